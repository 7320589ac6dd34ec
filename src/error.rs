//! Error types for word construction, feedback parsing and vocabulary loading.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A word could not be built from its text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("expected a word of {expected} letters, got {found}")]
    InvalidLength { expected: usize, found: usize },
    #[error("'{0}' is not a letter between 'a' and 'z'")]
    InvalidLetter(char),
}

/// A feedback token string could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    #[error("expected {expected} feedback symbols, got {found}")]
    InvalidLength { expected: usize, found: usize },
    #[error("unknown feedback symbol '{symbol}' at position {position} (use r, y or g)")]
    InvalidSymbol { symbol: char, position: usize },
}

/// A word list could not be loaded. Any of these is fatal to a run.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("unable to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}:{line}: invalid word", path.display())]
    InvalidWord {
        path: PathBuf,
        line: usize,
        #[source]
        source: WordError,
    },
    #[error("answer list {} contains no words", path.display())]
    EmptyAnswers { path: PathBuf },
}
