//! Error type for the loading paths (word lists, config).
//!
//! Gameplay itself never fails: every keypress maps to a defined outcome.
//! Only data coming in from the host page can be rejected.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The JSON payload could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A word list contained no entries.
    #[error("word bank is empty")]
    EmptyWordBank,

    /// A word entry had an empty or non-alphabetic text.
    #[error("invalid word: {0:?}")]
    InvalidWord(String),

    /// A config value would stall the game loop.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
