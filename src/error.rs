use std::path::PathBuf;

use thiserror::Error;

/// Failure to measure or rasterize a piece of text
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("cannot render empty text")]
    EmptyText,
    #[error("text {text:?} contains characters that cannot be drawn")]
    Unprintable { text: String },
    #[error("text {text:?} is too wide to measure")]
    TooWide { text: String },
}

/// Everything that can go wrong before the first tick runs
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to read config file {path}")]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config file {path} is malformed")]
    ConfigFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to read vocabulary {path}")]
    Vocabulary {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("vocabulary has {found} words, expected at least {expected}")]
    VocabularyTooShort { found: usize, expected: usize },
    #[error("invalid screen size: {0}")]
    Screen(String),
    #[error("invalid font metrics: {0}")]
    Font(String),
    #[error("vocabulary word {word:?} cannot be rendered")]
    UnmeasurableWord {
        word: String,
        #[source]
        source: RenderError,
    },
    #[error("vocabulary word {word:?} is {width} units wide, the screen is only {screen_width}")]
    WordTooWide {
        word: String,
        width: u32,
        screen_width: u32,
    },
    #[error("terminal setup failed")]
    Terminal(#[from] std::io::Error),
}

/// Failure while a session is being played
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("terminal i/o failed")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Render(#[from] RenderError),
}
