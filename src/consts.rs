//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Time budget for one render frame (the game clock runs at 20 fps)
pub(crate) const FRAME_PERIOD: Duration = Duration::from_millis(50);

/// The grid logic advances once every this many render frames, so the
/// perceived snake speed is independent of the frame rate.
pub(crate) const MOVE_FRAMES: u32 = 2;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Play-field width in cells (810 logical units at [`BLOCK_SIZE`] 30)
pub(crate) const GRID_WIDTH: u16 = 27;

/// Play-field height in cells (600 logical units at [`BLOCK_SIZE`] 30)
pub(crate) const GRID_HEIGHT: u16 = 20;

/// Edge length of one grid cell, in logical display units
pub(crate) const BLOCK_SIZE: f64 = 30.0;

/// Scalar controlling the food-pickup acceptance window.  At 1.0 the head
/// must land exactly on the food's cell; larger values widen the window so
/// that neighboring cells count as well.
pub(crate) const PICKUP_TOLERANCE: f64 = 1.0;

/// Snake length before any food has been eaten
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 1;

/// Directory searched for the optional banner art files
pub(crate) const ART_DIR: &str = "art";

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving down, and before the first
/// input has been received
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '○';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the welcome-screen banner
pub(crate) const WELCOME_BANNER_STYLE: Style =
    Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the game-over banner
pub(crate) const GAME_OVER_BANNER_STYLE: Style =
    Style::new().fg(Color::LightRed).add_modifier(Modifier::BOLD);

/// Style for art-loading diagnostics on the welcome screen
pub(crate) const NOTICE_STYLE: Style = Style::new().add_modifier(Modifier::DIM);
