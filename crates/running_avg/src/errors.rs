//! Averager errors

use std::fmt;

use thiserror::Error;

/// Operation that needs at least one observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmptyOperation {
    /// Computing the mean
    Average,
    /// Removing the oldest observation
    Evict,
}

impl fmt::Display for EmptyOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Average => write!(f, "average"),
            Self::Evict => write!(f, "evict"),
        }
    }
}

/// Errors that can occur when using an [`Averager`](crate::Averager)
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AveragerError {
    /// The window holds no observations
    #[error("empty collection: cannot {operation} with no observations")]
    EmptyCollection {
        /// Operation that was attempted
        operation: EmptyOperation,
    },

    /// Window size must be at least one
    #[error("invalid window size: {0} (must be at least 1)")]
    InvalidWindowSize(usize),
}

impl AveragerError {
    /// Create an empty collection error for the given operation
    #[must_use]
    pub const fn empty(operation: EmptyOperation) -> Self {
        Self::EmptyCollection { operation }
    }

    /// Whether this error was caused by an empty window
    #[must_use]
    pub const fn is_empty_collection(&self) -> bool {
        matches!(self, Self::EmptyCollection { .. })
    }
}
