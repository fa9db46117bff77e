//! Error types for the stripfix library.
//!
//! All fallible operations in the crate return [`Result`], with every failure
//! represented by the [`StripfixError`] enum.
//!
//! # Examples
//!
//! ```
//! use stripfix::error::{Result, StripfixError};
//!
//! fn load_resource() -> Result<()> {
//!     Err(StripfixError::dictionary("word list is missing"))
//! }
//!
//! match load_resource() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for stripfix operations.
///
/// Setup-time failures (missing dictionary or word-list files, correction
/// table compilation) and malformed input records all surface through this
/// enum; per-word correction issues never do.
#[derive(Error, Debug)]
pub enum StripfixError {
    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Dictionary or word-list setup errors
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Strip-table errors (missing columns, malformed records)
    #[error("Table error: {0}")]
    Table(String),

    /// Analysis-related errors (tokenization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with StripfixError.
pub type Result<T> = std::result::Result<T, StripfixError>;

impl StripfixError {
    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        StripfixError::Dictionary(msg.into())
    }

    /// Create a new table error.
    pub fn table<S: Into<String>>(msg: S) -> Self {
        StripfixError::Table(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        StripfixError::Analysis(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        StripfixError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        StripfixError::Other(msg.into())
    }
}
