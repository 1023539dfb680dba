use thiserror::Error;

use std::io;

use crate::decode::stream::Char;

#[derive(Debug, Error)]
pub enum Error {
    /// Failure reported by the underlying code-point source, passed through as-is.
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("{found}, {message}")]
    Syntax { found: Char, message: String },

    #[error("<end-of-input>:{row}:{column}, unexpected end of input")]
    UnexpectedEof { row: usize, column: usize },

    #[error("{found}, key {key:?} is not greater than previous key {previous:?}")]
    Ordering {
        found: Char,
        key: String,
        previous: String,
    },

    #[error("{found}, invalid escape code")]
    Escape { found: Char },

    #[error("{0}")]
    Message(String),
}

/// Coarse classification of [`Error`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unexpected character (or end of input) for the current grammar position.
    Structural,
    /// Key not strictly greater than its predecessor in the same object.
    Ordering,
    /// Unknown character after a backslash.
    Escape,
    /// Failure of the code-point source.
    Read,
    /// Parsed tree did not fit the requested type.
    Data,
}

impl Error {
    pub(crate) fn syntax(found: Char, message: impl Into<String>) -> Self {
        Error::Syntax {
            found,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_) => ErrorKind::Read,
            Error::Syntax { .. } | Error::UnexpectedEof { .. } => ErrorKind::Structural,
            Error::Ordering { .. } => ErrorKind::Ordering,
            Error::Escape { .. } => ErrorKind::Escape,
            Error::Message(_) => ErrorKind::Data,
        }
    }

    /// Zero-based `(row, column)` of the offending character, when there is one.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::Syntax { found, .. }
            | Error::Ordering { found, .. }
            | Error::Escape { found } => Some((found.row, found.column)),
            Error::UnexpectedEof { row, column } => Some((*row, *column)),
            Error::Io(_) | Error::Message(_) => None,
        }
    }

    /// The character the error points at; `None` for end-of-input and non-parse errors.
    pub fn found(&self) -> Option<Char> {
        match self {
            Error::Syntax { found, .. }
            | Error::Ordering { found, .. }
            | Error::Escape { found } => Some(*found),
            _ => None,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
