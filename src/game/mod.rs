mod collision;
mod direction;
mod grid;
mod snake;
use self::direction::Direction;
use self::grid::{GridModel, TickOutcome};
use crate::app::{Context, Screen};
use crate::command::Command;
use crate::consts;
use crate::gameover::GameOverScreen;
use crate::util::{center_rect, get_display_area};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::Line,
    widgets::{Block, Widget},
    Frame,
};
use std::io;
use std::time::Instant;

/// The playing screen: one live [`GridModel`] plus the frame pacing that
/// drives it.
///
/// Input is sampled every frame; the grid itself advances only once every
/// [`consts::MOVE_FRAMES`] frames.
#[derive(Clone, Debug)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: GridModel,
    ctx: Context,
    frame: u32,
    next_frame: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(ctx: Context) -> Self {
        Game::new_with_rng(ctx, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    fn new_with_rng(ctx: Context, mut rng: R) -> Game<R> {
        let grid = GridModel::new(&mut rng);
        Game {
            rng,
            grid,
            ctx,
            frame: 0,
            next_frame: None,
        }
    }

    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        if self.next_frame.is_none() {
            self.next_frame = Some(Instant::now() + consts::FRAME_PERIOD);
        }
        let deadline = self.next_frame.expect("next_frame should be Some");
        let wait = deadline.saturating_duration_since(Instant::now());
        if wait.is_zero() || !poll(wait)? {
            self.next_frame = None;
            Ok(self.advance_frame())
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    /// Called once per frame deadline.  Advances the grid on every
    /// [`consts::MOVE_FRAMES`]th call; a fatal collision ends the session.
    fn advance_frame(&mut self) -> Option<Screen> {
        self.frame += 1;
        if self.frame < consts::MOVE_FRAMES {
            return None;
        }
        self.frame = 0;
        match self.grid.tick(&mut self.rng) {
            TickOutcome::Fatal(_) => Some(Screen::GameOver(GameOverScreen::new(
                self.ctx.clone(),
                self.grid.score(),
            ))),
            TickOutcome::Moved | TickOutcome::Ate => None,
        }
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit => return Some(Screen::Quit),
            Command::Up => self.grid.steer(Direction::Up),
            Command::Down => self.grid.steer(Direction::Down),
            Command::Left => self.grid.steer(Direction::Left),
            Command::Right => self.grid.steer(Direction::Right),
            Command::C | Command::Q => (),
        }
        None
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, board_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(display);
        Line::styled(format!(" Score: {}", self.grid.score()), consts::SCORE_BAR_STYLE)
            .render(score_area, buf);

        let board_size = Size {
            width: consts::GRID_WIDTH.saturating_add(2),
            height: consts::GRID_HEIGHT.saturating_add(2),
        };
        let board_area = center_rect(board_area, board_size);
        Block::bordered().render(board_area, buf);

        let mut board = Board {
            area: board_area.inner(Margin::new(1, 1)),
            buf,
        };
        // Draw order matters: the body covers food that spawned under it,
        // and the head covers whatever it lands on.
        board.draw_cell(self.grid.food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        let body = self.grid.snake.body();
        for &cell in body.iter().take(body.len() - 1) {
            board.draw_cell(cell, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        board.draw_cell(
            self.grid.snake.head(),
            self.grid.snake.direction.head_symbol(),
            consts::SNAKE_STYLE,
        );
    }
}

/// Maps grid cells to terminal cells inside the board border
#[derive(Debug)]
struct Board<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Board<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}
