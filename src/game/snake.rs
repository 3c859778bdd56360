use super::direction::Direction;
use crate::consts;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// Snake state.
///
/// All positions are in grid cells, relative to the top-left corner of the
/// play field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The cells of the snake, oldest first; the head is always the last
    /// element, so the sequence is never empty.
    pub(super) body: VecDeque<Position>,

    /// The length the body is growing toward; increases by one per food
    /// eaten.  Invariant: `body.len() <= target_len`.
    pub(super) target_len: usize,

    /// The direction in which the snake is currently travelling
    pub(super) direction: Direction,

    /// The direction change to apply on the next logic tick, if any
    pub(super) pending: Option<Direction>,
}

impl Snake {
    /// Create a new snake of length one with its head at `head`, not yet
    /// moving.
    pub(super) fn new(head: Position) -> Snake {
        Snake {
            body: VecDeque::from([head]),
            target_len: consts::INITIAL_SNAKE_LENGTH,
            direction: Direction::Unset,
            pending: None,
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body should never be empty")
    }

    /// Return the cells of the snake, oldest first
    pub(super) fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    /// Request a direction change.  A request that would reverse the current
    /// travel direction is ignored; otherwise it replaces any change already
    /// pending, so only the last valid request of a frame takes effect.
    pub(super) fn turn(&mut self, direction: Direction) {
        if !direction.is_reverse_of(self.direction) {
            self.pending = Some(direction);
        }
    }

    /// Apply the pending direction change, if any.  Called once at the start
    /// of each logic tick.
    pub(super) fn apply_pending_turn(&mut self) {
        if let Some(direction) = self.pending.take() {
            if !direction.is_reverse_of(self.direction) {
                self.direction = direction;
            }
        }
    }

    /// Append a new head position
    pub(super) fn push_head(&mut self, head: Position) {
        self.body.push_back(head);
    }

    /// Drop tail cells until the body is no longer than `target_len`
    pub(super) fn trim(&mut self) {
        while self.body.len() > self.target_len {
            let _ = self.body.pop_front();
        }
    }

    /// Extend the snake's target length in response to eating food
    pub(super) fn grow(&mut self) {
        self.target_len += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_snake() {
        let snake = Snake::new(Position::new(13, 10));
        assert_eq!(snake.head(), Position::new(13, 10));
        assert_eq!(snake.body().len(), 1);
        assert_eq!(snake.target_len, 1);
        assert_eq!(snake.direction, Direction::Unset);
    }

    #[test]
    fn turn_from_unset() {
        let mut snake = Snake::new(Position::new(13, 10));
        snake.turn(Direction::Up);
        snake.apply_pending_turn();
        assert_eq!(snake.direction, Direction::Up);
    }

    #[test]
    fn reversal_request_ignored() {
        let mut snake = Snake::new(Position::new(13, 10));
        snake.direction = Direction::Right;
        snake.turn(Direction::Left);
        assert_eq!(snake.pending, None);
        snake.apply_pending_turn();
        assert_eq!(snake.direction, Direction::Right);
    }

    #[test]
    fn last_valid_turn_wins() {
        let mut snake = Snake::new(Position::new(13, 10));
        snake.direction = Direction::Up;
        snake.turn(Direction::Left);
        snake.turn(Direction::Down); // reverse of Up, ignored
        snake.apply_pending_turn();
        assert_eq!(snake.direction, Direction::Left);
    }

    #[test]
    fn trim_keeps_newest_cells() {
        let mut snake = Snake::new(Position::new(5, 5));
        snake.push_head(Position::new(6, 5));
        snake.push_head(Position::new(7, 5));
        snake.trim();
        assert_eq!(snake.body(), &VecDeque::from([Position::new(7, 5)]));
    }

    #[test]
    fn grow_retains_tail() {
        let mut snake = Snake::new(Position::new(5, 5));
        snake.grow();
        snake.push_head(Position::new(6, 5));
        snake.trim();
        assert_eq!(
            snake.body(),
            &VecDeque::from([Position::new(5, 5), Position::new(6, 5)])
        );
        assert_eq!(snake.target_len, 2);
    }
}
