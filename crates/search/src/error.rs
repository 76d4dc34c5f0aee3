//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur during search operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Query was empty after trimming
    #[error("Empty query")]
    EmptyQuery,
}
