use crate::consts;

/// The direction the snake is travelling in.  `Unset` is the state before
/// the first directional input of a session; its movement delta is zero, so
/// the snake stays put until the player steers it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(super) enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    Unset,
}

impl Direction {
    /// Unit movement delta in cells, signed so that off-field candidate
    /// positions are representable before the boundary check.
    pub(super) fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Unset => (0, 0),
        }
    }

    /// Is `self` the exact reverse of `other`?  `Unset` reverses nothing.
    pub(super) fn is_reverse_of(self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Return the glyph to use for drawing the snake's head.  Before the
    /// first input the head faces down.
    pub(super) fn head_symbol(self) -> char {
        match self {
            Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
            Direction::Down | Direction::Unset => consts::SNAKE_HEAD_DOWN_SYMBOL,
            Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
            Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
        }
    }
}
