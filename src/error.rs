//! Error types for tabler parsing and serialization.
//!
//! Parsing failures are reported as a [`ParseError`]: an [`ErrorKind`] plus the
//! 1-based line on which the problem was detected. The parser stops at the first
//! error, so there is never more than one per call and never a partial table.
//!
//! Everything else (I/O, the serde bridge) goes through the crate-wide [`Error`].
//!
//! ## Examples
//!
//! ```rust
//! use tabler::{parse, ErrorKind};
//!
//! let err = parse(b":x\n").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::ColonAtLineStart);
//! assert_eq!(err.line(), 1);
//! assert_eq!(err.to_string(), "line 1: colon with no preceding key on this line");
//! ```

use std::fmt;
use std::io;
use thiserror::Error;

/// The class of malformed input the parser ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A line begins with `:` before any key content.
    ColonAtLineStart,
    /// A pair was about to be committed with an empty key.
    EmptyKey,
    /// A second `%%` marker appeared before the first one's key was started.
    DanglingMultilineMarker,
    /// A `%%` key line ended without its terminating `:`.
    MissingColonForKey,
    /// A line ended without ever producing a `key:` prefix.
    NoKeyFound,
    /// Something other than whitespace followed a closing `%%` on its line.
    TextAfterCloseMarker,
}

impl ErrorKind {
    /// Returns a short human-readable description of this kind.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            ErrorKind::ColonAtLineStart => "colon with no preceding key on this line",
            ErrorKind::EmptyKey => "empty key",
            ErrorKind::DanglingMultilineMarker => "found %% while looking for a multi-line key",
            ErrorKind::MissingColonForKey => "colon at end of multi-line key not found",
            ErrorKind::NoKeyFound => "no key found",
            ErrorKind::TextAfterCloseMarker => "unexpected text after closing %%",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A parse failure together with the line where it was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    kind: ErrorKind,
    line: usize,
}

impl ParseError {
    /// Creates a parse error of `kind` detected on the 1-based `line`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tabler::{ErrorKind, ParseError};
    ///
    /// let err = ParseError::new(ErrorKind::NoKeyFound, 7);
    /// assert!(err.to_string().contains("line 7"));
    /// ```
    #[must_use]
    pub const fn new(kind: ErrorKind, line: usize) -> Self {
        ParseError { kind, line }
    }

    /// The class of malformed input.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The 1-based line on which the error was detected.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }
}

/// Represents all errors surfaced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from the byte source or sink, passed through unchanged
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Malformed input
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A key that cannot be written in the format
    #[error("Invalid key {key:?}: {reason}")]
    InvalidKey { key: String, reason: &'static str },

    /// Unsupported type for the serde bridge
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Failure converting one record of a table
    #[error("Record {index}: {msg}")]
    Record { index: usize, msg: String },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an invalid key error.
    pub fn invalid_key(key: &str, reason: &'static str) -> Self {
        Error::InvalidKey {
            key: key.to_string(),
            reason,
        }
    }

    /// Creates an unsupported type error for values that do not fit in a flat record.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tabler::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Attaches the index of the record being converted.
    ///
    /// Parse and I/O errors carry their own location and are returned as is.
    pub(crate) fn in_record(self, index: usize) -> Self {
        match self {
            Error::Io(_) | Error::Parse(_) | Error::Record { .. } => self,
            Error::Custom(msg) => Error::Record { index, msg },
            other => Error::Record {
                index,
                msg: other.to_string(),
            },
        }
    }

    /// Returns the underlying parse error, if this is one.
    #[must_use]
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Error::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::new(ErrorKind::MissingColonForKey, 3);
        assert_eq!(
            err.to_string(),
            "line 3: colon at end of multi-line key not found"
        );
        assert_eq!(err.kind(), ErrorKind::MissingColonForKey);
        assert_eq!(err.line(), 3);
    }

    #[test]
    fn test_parse_error_converts_transparently() {
        let err: Error = ParseError::new(ErrorKind::NoKeyFound, 2).into();
        assert_eq!(err.to_string(), "line 2: no key found");
        assert_eq!(
            err.as_parse_error().map(ParseError::kind),
            Some(ErrorKind::NoKeyFound)
        );
    }

    #[test]
    fn test_io_error_kept_intact() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        match err {
            Error::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::NotFound),
            other => panic!("expected Io, got {:?}", other),
        }
    }

    #[test]
    fn test_in_record_wraps_only_conversion_errors() {
        let err = Error::custom("bad number").in_record(4);
        assert_eq!(err.to_string(), "Record 4: bad number");

        let err = Error::unsupported_type("sequence").in_record(1);
        assert_eq!(err.to_string(), "Record 1: Unsupported type: sequence");

        let parse: Error = ParseError::new(ErrorKind::EmptyKey, 9).into();
        assert!(parse.in_record(0).as_parse_error().is_some());
    }
}
