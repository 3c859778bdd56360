use crate::app::{Context, Screen};
use crate::command::Command;
use crate::consts;
use crate::game::Game;
use crate::util::{get_display_area, row};
use crossterm::event::{read, Event};
use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget, Frame};
use std::io;

/// Vertical offset of the banner within the display area
const BANNER_Y: u16 = 4;

/// Vertical offset of the first instruction line
const INSTRUCTIONS_Y: u16 = 9;

static INSTRUCTIONS: &[&str] = &[
    "Press any arrow key to start",
    "Move with arrow keys, wasd, or hjkl",
    "Eat the food and don't bite yourself!",
];

/// The screen shown at startup, before the first session begins
#[derive(Clone, Debug)]
pub(crate) struct WelcomeScreen {
    ctx: Context,
}

impl WelcomeScreen {
    pub(crate) fn new(ctx: Context) -> WelcomeScreen {
        WelcomeScreen { ctx }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        Ok(self.handle_event(read()?))
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit => Some(Screen::Quit),
            Command::Up | Command::Down | Command::Left | Command::Right => {
                Some(Screen::Game(Game::new(self.ctx.clone())))
            }
            Command::C | Command::Q => None,
        }
    }
}

impl Widget for &WelcomeScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        for (i, line) in self.ctx.art.welcome.iter().enumerate() {
            let Ok(offset) = u16::try_from(i) else {
                break;
            };
            Line::from(line.as_str())
                .centered()
                .style(consts::WELCOME_BANNER_STYLE)
                .render(row(display, BANNER_Y + offset), buf);
        }
        for (i, line) in INSTRUCTIONS.iter().enumerate() {
            let Ok(offset) = u16::try_from(i) else {
                break;
            };
            Line::from(*line)
                .centered()
                .render(row(display, INSTRUCTIONS_Y + offset), buf);
        }
        if let Some(notice) = self.ctx.art.notices.first() {
            Line::from(notice.as_str())
                .centered()
                .style(consts::NOTICE_STYLE)
                .render(row(display, display.height.saturating_sub(1)), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::art::Art;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn test_screen() -> WelcomeScreen {
        WelcomeScreen::new(Context {
            art: Art::builtin(),
        })
    }

    #[test]
    fn arrow_key_starts_a_session() {
        let mut screen = test_screen();
        let next = screen.handle_event(Event::Key(KeyCode::Up.into()));
        assert!(matches!(next, Some(Screen::Game(_))));
    }

    #[test]
    fn ctrl_c_quits() {
        let mut screen = test_screen();
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(
            screen.handle_event(Event::Key(ev)),
            Some(Screen::Quit)
        ));
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut screen = test_screen();
        assert!(screen
            .handle_event(Event::Key(KeyCode::Char('q').into()))
            .is_none());
        assert!(screen
            .handle_event(Event::Key(KeyCode::Char('c').into()))
            .is_none());
    }

    #[test]
    fn render_welcome() {
        let screen = test_screen();
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        (&screen).render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "                                                                                ",
            "                                                                                ",
            "                                                                                ",
            "                                                                                ",
            "                                ┌─┐┌┐┌┌─┐┬┌─┌─┐                                 ",
            "                                └─┐│││├─┤├┴┐├┤                                  ",
            "                                └─┘┘└┘┴ ┴┴ ┴└─┘                                 ",
            "                                                                                ",
            "                                                                                ",
            "                          Press any arrow key to start                          ",
            "                      Move with arrow keys, wasd, or hjkl                       ",
            "                     Eat the food and don't bite yourself!                      ",
            "                                                                                ",
            "                                                                                ",
            "                                                                                ",
            "                                                                                ",
            "                                                                                ",
            "                                                                                ",
            "                                                                                ",
            "                                                                                ",
            "                                                                                ",
            "                                                                                ",
            "                                                                                ",
            "                                                                                ",
        ]);
        expected.set_style(Rect::new(0, 4, 80, 3), consts::WELCOME_BANNER_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn render_welcome_with_notice() {
        let mut art = Art::builtin();
        art.notices
            .push(String::from("could not read art file art/welcome.txt"));
        let screen = WelcomeScreen::new(Context { art });
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        (&screen).render(area, &mut buffer);
        let notice_row = Rect::new(0, 23, 80, 1);
        let mut expected_notice = Buffer::empty(notice_row);
        Line::from("could not read art file art/welcome.txt")
            .centered()
            .style(consts::NOTICE_STYLE)
            .render(notice_row, &mut expected_notice);
        let actual_notice = Buffer {
            area: notice_row,
            content: buffer.content[23 * 80..].to_vec(),
        };
        pretty_assertions::assert_eq!(actual_notice, expected_notice);
    }
}
