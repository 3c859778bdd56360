use super::collision::{self, CollisionKind};
use super::direction::Direction;
use super::snake::Snake;
use crate::consts;
use rand::Rng;
use ratatui::layout::Position;

/// What a single logic tick did
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum TickOutcome {
    Moved,
    Ate,
    Fatal(CollisionKind),
}

/// The simulation state of one playing session: the snake and the food.
///
/// A `GridModel` is created fresh on every transition into play and is
/// discarded wholesale on restart; nothing in it survives a session.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct GridModel {
    pub(super) snake: Snake,
    pub(super) food: Position,
}

impl GridModel {
    /// Create a fresh session: a length-one snake at the center cell, not
    /// yet moving, and food at a random cell.
    pub(super) fn new<R: Rng>(rng: &mut R) -> GridModel {
        let head = Position::new(consts::GRID_WIDTH / 2, consts::GRID_HEIGHT / 2);
        GridModel {
            snake: Snake::new(head),
            food: random_cell(rng),
        }
    }

    /// Request a direction change, to take effect on the next logic tick
    pub(super) fn steer(&mut self, direction: Direction) {
        self.snake.turn(direction);
    }

    /// The score is derived from the snake's length; the starting length of
    /// one counts for zero.
    pub(super) fn score(&self) -> usize {
        self.snake.target_len - 1
    }

    /// Advance the simulation by one logic tick: apply the pending turn,
    /// move the head, handle food, trim the tail, and detect collisions.
    ///
    /// Crossing the play-field boundary is fatal; there is no wrap-around.
    /// Growth takes effect before the trim, so the tail cell is retained on
    /// the tick the food is eaten.
    pub(super) fn tick<R: Rng>(&mut self, rng: &mut R) -> TickOutcome {
        self.snake.apply_pending_turn();
        let (dx, dy) = self.snake.direction.delta();
        let head = self.snake.head();
        let x = i32::from(head.x) + dx;
        let y = i32::from(head.y) + dy;
        if collision::out_of_bounds(x, y) {
            return TickOutcome::Fatal(CollisionKind::Boundary);
        }
        let next = Position {
            x: u16::try_from(x).expect("in-bounds x should fit in u16"),
            y: u16::try_from(y).expect("in-bounds y should fit in u16"),
        };
        self.snake.push_head(next);
        let ate = collision::eats_food(next, self.food, consts::PICKUP_TOLERANCE);
        if ate {
            self.snake.grow();
            self.food = random_cell(rng);
        }
        self.snake.trim();
        if collision::self_hit(&self.snake) {
            TickOutcome::Fatal(CollisionKind::SelfHit)
        } else if ate {
            TickOutcome::Ate
        } else {
            TickOutcome::Moved
        }
    }
}

/// A uniformly random cell of the play field.  Cells occupied by the snake
/// are not excluded, so food can spawn under the body and stay unreachable
/// until the body clears it.
fn random_cell<R: Rng>(rng: &mut R) -> Position {
    Position::new(
        rng.random_range(0..consts::GRID_WIDTH),
        rng.random_range(0..consts::GRID_HEIGHT),
    )
}
