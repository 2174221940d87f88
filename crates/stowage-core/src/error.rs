//! Error types for Stowage.

use thiserror::Error;

/// Result type alias for Stowage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when preparing a packing request.
///
/// The packing pass itself never fails: degenerate inputs place zero units
/// and the engine returns a normal result. These errors are only produced
/// by the explicit `validate()` entry points for callers that want to
/// reject bad input up front.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid box type provided.
    #[error("Invalid box type: {0}")]
    InvalidBoxType(String),

    /// Invalid container provided.
    #[error("Invalid container: {0}")]
    InvalidContainer(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
