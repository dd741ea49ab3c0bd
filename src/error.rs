// src/error.rs

//! Error types for the contrast evaluation core.

use std::fmt;

/// Errors that can occur while configuring or querying a contrast function.
#[derive(Debug, Clone)]
pub enum ContrastError {
    /// Invalid configuration parameter.
    InvalidConfig {
        /// Name of the invalid parameter.
        parameter: String,
        /// Description of why it's invalid.
        message: String,
    },

    /// A query was issued before any estimate cube was bound.
    NotBound,

    /// A query coordinate lies outside the bound cube's extents.
    IndexOutOfBounds {
        /// Requested (bin, source, frame) coordinate.
        requested: (usize, usize, usize),
        /// Extents of the bound cube along (bin, source, frame).
        shape: (usize, usize, usize),
    },
}

impl fmt::Display for ContrastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContrastError::InvalidConfig { parameter, message } => {
                write!(f, "Invalid configuration for '{}': {}", parameter, message)
            }
            ContrastError::NotBound => {
                write!(f, "No estimate cube is bound; call bind() before querying")
            }
            ContrastError::IndexOutOfBounds { requested, shape } => {
                write!(
                    f,
                    "Coordinate (bin {}, source {}, frame {}) is out of range \
                     for an estimate cube of shape {}x{}x{}",
                    requested.0, requested.1, requested.2, shape.0, shape.1, shape.2
                )
            }
        }
    }
}

impl std::error::Error for ContrastError {}

/// Convenience type alias for Results with ContrastError.
pub type Result<T> = std::result::Result<T, ContrastError>;
