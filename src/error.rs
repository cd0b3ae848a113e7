//! Error types for the agora library.
//!
//! All fallible operations return [`AgoraError`] through the crate-wide
//! [`Result`] alias.
//!
//! # Examples
//!
//! ```
//! use agora::error::{AgoraError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(AgoraError::not_found("question 42"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for agora operations.
///
/// Parsing a search string is infallible by contract (malformed tokens degrade
/// to literal tags), so the variants here cover the store, the page-request
/// validation, and the I/O done by the CLI.
#[derive(Error, Debug)]
pub enum AgoraError {
    /// I/O errors (data file loading, output streams)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Store-related errors
    #[error("Store error: {0}")]
    Store(String),

    /// An entity lookup that matched nothing (e.g. a `user:` filter)
    #[error("Not found: {0}")]
    NotFound(String),

    /// A request parameter outside its valid range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with AgoraError.
pub type Result<T> = std::result::Result<T, AgoraError>;

impl AgoraError {
    /// Create a new store error.
    pub fn store<S: Into<String>>(msg: S) -> Self {
        AgoraError::Store(msg.into())
    }

    /// Create a new not-found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        AgoraError::NotFound(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        AgoraError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        AgoraError::Other(msg.into())
    }

    /// Whether this error is the domain-level not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AgoraError::NotFound(_))
    }
}
