//! Error types for snippet-extract.
//!
//! An empty paragraph list is a valid outcome and never an error; only
//! input the loader cannot turn into a tree is reported here.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTML parsing failed.
    #[error("HTML parsing failed: {0}")]
    ParseError(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
