//! Crate-level error types.

use std::fmt;

use crate::physics::BodyHandle;

/// Errors produced by the rotunda crate.
#[derive(Debug)]
pub enum RotundaError {
    /// A presentation was constructed with no nodes.
    EmptySequence,
    /// A node ordinal past the end of the sequence.
    NodeOutOfRange(usize),
    /// An interpolator was given a zero frame budget.
    InvalidFrameBudget,
    /// A body was requested with non-finite or non-positive extents.
    InvalidBounds(String),
    /// A body handle does not belong to this physics world.
    UnknownBody(BodyHandle),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for RotundaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySequence => {
                write!(f, "presentation needs at least one node")
            }
            Self::NodeOutOfRange(i) => write!(f, "no node at index {i}"),
            Self::InvalidFrameBudget => {
                write!(f, "interpolator frame budget must be positive")
            }
            Self::InvalidBounds(msg) => write!(f, "invalid bounds: {msg}"),
            Self::UnknownBody(handle) => {
                write!(f, "unknown body handle {}", handle.index())
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for RotundaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RotundaError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
