use crate::art::Art;
use crate::consts;
use crate::game::Game;
use crate::gameover::GameOverScreen;
use crate::welcome::WelcomeScreen;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::path::Path;

/// Context shared by every screen, constructed once at startup and passed
/// along on every transition.  No ambient globals.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Context {
    pub(crate) art: Art,
}

impl Context {
    pub(crate) fn load() -> Context {
        Context {
            art: Art::load(Path::new(consts::ART_DIR)),
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct App {
    screen: Screen,
}

impl App {
    pub(crate) fn new(ctx: Context) -> App {
        App {
            screen: Screen::Welcome(WelcomeScreen::new(ctx)),
        }
    }

    /// The outer loop: draw, process input, follow screen transitions.
    /// Restarting after a game over comes back through here as an ordinary
    /// transition, so repeated restarts cannot grow the call stack.
    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        match self.screen {
            Screen::Welcome(ref welcome) => {
                terminal.draw(|frame| welcome.draw(frame))?;
            }
            Screen::Game(ref game) => {
                terminal.draw(|frame| game.draw(frame))?;
            }
            Screen::GameOver(ref over) => {
                terminal.draw(|frame| over.draw(frame))?;
            }
            Screen::Quit => (),
        }
        Ok(())
    }

    fn process_input(&mut self) -> io::Result<()> {
        let next = match self.screen {
            Screen::Welcome(ref mut welcome) => welcome.process_input()?,
            Screen::Game(ref mut game) => game.process_input()?,
            Screen::GameOver(ref mut over) => over.process_input()?,
            Screen::Quit => None,
        };
        if let Some(screen) = next {
            self.screen = screen;
        }
        Ok(())
    }

    fn quitting(&self) -> bool {
        matches!(self.screen, Screen::Quit)
    }
}

/// The phase of the application.  Exactly one grid simulation is live, and
/// only while in `Game`.
#[derive(Clone, Debug)]
pub(crate) enum Screen {
    Welcome(WelcomeScreen),
    Game(Game),
    GameOver(GameOverScreen),
    Quit,
}
