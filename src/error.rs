//! Error types for exact cover construction.

use thiserror::Error;

/// Errors reported by this crate.
///
/// Only problem construction can fail. An exhaustive search that finds no
/// exact cover is not an error; [`solve`](crate::solve) reports it as an
/// empty row sequence.
#[derive(Debug, Error)]
pub enum Error {
    /// The problem instance was rejected before any structure was built.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Creates an [`Error::InvalidInput`] from anything string-like.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }
}

/// Result type for exact cover operations.
pub type Result<T> = std::result::Result<T, Error>;
