//! Error types for URL parsing and field access.

use std::fmt;

use crate::field::Field;

/// Error returned when a URL string cannot be split into components.
///
/// Only structurally broken authorities are rejected; everything else
/// produces a best-effort parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// An authority marker (`//`) was followed by no host
    EmptyHost,
    /// The host contains a character that can never appear in a host
    InvalidHostChar {
        /// The invalid character
        char: char,
        /// Position in the host
        position: usize,
    },
    /// An IP literal was opened with `[` but not closed
    UnterminatedIpLiteral,
    /// The port is not a number in `0..=65535`
    InvalidPort {
        /// The port text that was found
        value: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is a malformed url: {}", self.input, self.kind)
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyHost => write!(f, "authority has no host"),
            Self::InvalidHostChar { char, position } => {
                write!(f, "invalid character {char:?} at position {position} in host")
            }
            Self::UnterminatedIpLiteral => {
                write!(f, "IP literal is missing its closing ']'")
            }
            Self::InvalidPort { value } => {
                write!(f, "invalid port '{value}'; expected a number up to 65535")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors for dynamic field access on a [`Url`](crate::Url).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// No field has this name
    Unknown {
        /// The name that was looked up
        name: String,
    },
    /// The field is derived from other fields and cannot be assigned
    ReadOnly {
        /// The field that was written
        field: Field,
    },
    /// The value assigned to `port` is not a valid port
    InvalidPort {
        /// The rejected value
        value: String,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown { name } => write!(f, "unknown url field '{name}'"),
            Self::ReadOnly { field } => {
                write!(f, "url field '{field}' is derived and cannot be set")
            }
            Self::InvalidPort { value } => {
                write!(f, "invalid port '{value}'; expected a number up to 65535")
            }
        }
    }
}

impl std::error::Error for FieldError {}
