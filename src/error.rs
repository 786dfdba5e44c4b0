//! Crate-level error types.

use std::fmt;

/// Errors produced by the orbit-framing crate.
///
/// The per-frame and cancellation paths are infallible; only option I/O and
/// lifecycle misuse report errors.
#[derive(Debug)]
pub enum FramingError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// The behavior is already attached to a camera.
    AlreadyAttached,
}

impl fmt::Display for FramingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::AlreadyAttached => {
                write!(f, "behavior is already attached to a camera")
            }
        }
    }
}

impl std::error::Error for FramingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FramingError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
