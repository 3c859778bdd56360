mod app;
mod art;
mod command;
mod consts;
mod game;
mod gameover;
mod util;
mod welcome;
use crate::app::{App, Context};
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    let ctx = Context::load();
    let terminal = ratatui::init();
    let r = App::new(ctx).run(terminal);
    ratatui::restore();
    io_exit(r)
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
