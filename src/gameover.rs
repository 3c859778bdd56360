use crate::app::{Context, Screen};
use crate::command::Command;
use crate::consts;
use crate::game::Game;
use crate::util::{get_display_area, row};
use crossterm::event::{read, Event};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
    Frame,
};
use std::io;

/// Vertical offset of the banner within the display area
const BANNER_Y: u16 = 4;

/// Vertical offset of the taunt line
const TAUNT_Y: u16 = 9;

/// Vertical offset of the final-score line
const SCORE_Y: u16 = 11;

/// Vertical offset of the key-help line
const KEYS_Y: u16 = 13;

/// The screen shown after a fatal collision.  The previous session's grid is
/// already gone by the time this exists; only the final score survives.
#[derive(Clone, Debug)]
pub(crate) struct GameOverScreen {
    ctx: Context,
    score: usize,
}

impl GameOverScreen {
    pub(crate) fn new(ctx: Context, score: usize) -> GameOverScreen {
        GameOverScreen { ctx, score }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        Ok(self.handle_event(read()?))
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::C => Some(Screen::Game(Game::new(self.ctx.clone()))),
            Command::Q | Command::Quit => Some(Screen::Quit),
            Command::Up | Command::Down | Command::Left | Command::Right => None,
        }
    }
}

impl Widget for &GameOverScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        for (i, line) in self.ctx.art.game_over.iter().enumerate() {
            let Ok(offset) = u16::try_from(i) else {
                break;
            };
            Line::from(line.as_str())
                .centered()
                .style(consts::GAME_OVER_BANNER_STYLE)
                .render(row(display, BANNER_Y + offset), buf);
        }
        Line::from("YOU LOSE!!")
            .centered()
            .render(row(display, TAUNT_Y), buf);
        Line::from(format!("Final score: {}", self.score))
            .centered()
            .render(row(display, SCORE_Y), buf);
        Line::from_iter([
            Span::raw("Press "),
            Span::styled("c", consts::KEY_STYLE),
            Span::raw(" to play again or "),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(" to quit"),
        ])
        .centered()
        .render(row(display, KEYS_Y), buf);
    }
}
