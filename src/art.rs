use std::path::Path;
use thiserror::Error;

/// Banner art for the welcome and game-over screens.
///
/// Each banner is read from an optional text file; a missing or unreadable
/// file falls back to the built-in banner without aborting, and the failure
/// is recorded as a notice for display on the welcome screen.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Art {
    pub(crate) welcome: Vec<String>,
    pub(crate) game_over: Vec<String>,
    pub(crate) notices: Vec<String>,
}

#[rustfmt::skip]
static WELCOME_BANNER: &[&str] = &[
    "┌─┐┌┐┌┌─┐┬┌─┌─┐",
    "└─┐│││├─┤├┴┐├┤ ",
    "└─┘┘└┘┴ ┴┴ ┴└─┘",
];

#[rustfmt::skip]
static GAME_OVER_BANNER: &[&str] = &[
    "┌─┐┌─┐┌┬┐┌─┐ ┌─┐┬  ┬┌─┐┬─┐",
    "│ ┬├─┤│││├┤  │ │└┐┌┘├┤ ├┬┘",
    "└─┘┴ ┴┴ ┴└─┘ └─┘ └┘ └─┘┴└─",
];

impl Art {
    pub(crate) fn load(dir: &Path) -> Art {
        let mut notices = Vec::new();
        let welcome = load_banner(&dir.join("welcome.txt"), WELCOME_BANNER, &mut notices);
        let game_over = load_banner(&dir.join("game_over.txt"), GAME_OVER_BANNER, &mut notices);
        Art {
            welcome,
            game_over,
            notices,
        }
    }

    #[cfg(test)]
    pub(crate) fn builtin() -> Art {
        Art {
            welcome: to_lines(WELCOME_BANNER),
            game_over: to_lines(GAME_OVER_BANNER),
            notices: Vec::new(),
        }
    }
}

fn load_banner(path: &Path, fallback: &[&str], notices: &mut Vec<String>) -> Vec<String> {
    match read_banner(path) {
        Ok(lines) => lines,
        Err(e) => {
            notices.push(format!("{e}; using the built-in one"));
            to_lines(fallback)
        }
    }
}

fn read_banner(path: &Path) -> Result<Vec<String>, ArtError> {
    let content = fs_err::read_to_string(path).map_err(|source| ArtError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let lines = content
        .lines()
        .map(|line| line.trim_end().to_owned())
        .collect::<Vec<_>>();
    if lines.is_empty() {
        return Err(ArtError::Empty {
            path: path.display().to_string(),
        });
    }
    Ok(lines)
}

fn to_lines(banner: &[&str]) -> Vec<String> {
    banner.iter().copied().map(String::from).collect()
}

#[derive(Debug, Error)]
pub(crate) enum ArtError {
    #[error("could not read art file {path}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("art file {path} is empty")]
    Empty { path: String },
}
