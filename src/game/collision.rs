use super::snake::Snake;
use crate::consts;
use ratatui::layout::Position;

/// The ways a run can end
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum CollisionKind {
    /// The head stepped across the play-field boundary
    Boundary,
    /// The head landed on another cell of the body
    SelfHit,
}

/// Would a head at the candidate cell `(x, y)` be outside the play field?
/// Evaluated on the unwrapped candidate, so a crossing is caught before any
/// other mutation of the tick.
pub(super) fn out_of_bounds(x: i32, y: i32) -> bool {
    x < 0 || y < 0 || x >= i32::from(consts::GRID_WIDTH) || y >= i32::from(consts::GRID_HEIGHT)
}

/// Does the snake's head coincide with any other cell of its body?
pub(super) fn self_hit(snake: &Snake) -> bool {
    let head = snake.head();
    let len = snake.body().len();
    snake.body().iter().take(len - 1).any(|&cell| cell == head)
}

/// Is the head close enough to the food to count as a pickup?
///
/// The acceptance window is `BLOCK_SIZE * tolerance` logical units per axis,
/// exclusive.  With grid-aligned food and tolerance 1.0 this reduces to an
/// exact cell match; lowering the tolerance shrinks the window further, and
/// raising it lets neighboring cells count.
pub(super) fn eats_food(head: Position, food: Position, tolerance: f64) -> bool {
    within_window(head.x, food.x, tolerance) && within_window(head.y, food.y, tolerance)
}

fn within_window(a: u16, b: u16, tolerance: f64) -> bool {
    f64::from(a.abs_diff(b)) * consts::BLOCK_SIZE < consts::BLOCK_SIZE * tolerance
}
