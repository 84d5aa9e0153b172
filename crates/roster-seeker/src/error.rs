//! Error types for the seeker crate.
//!
//! Running a query never fails. These errors come from reading query state
//! out of text, e.g. a screen restoring itself from URL parameters.

use thiserror::Error;

/// Errors that can occur when parsing query state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeekerError {
    /// Sort direction was neither `asc` nor `desc`.
    #[error("invalid sort direction: {0:?} (expected \"asc\" or \"desc\")")]
    InvalidDirection(String),

    /// Page parameter was not a positive integer.
    #[error("invalid page: {0:?} (expected a positive integer)")]
    InvalidPage(String),

    /// Sort parameter had no field name.
    #[error("invalid sort: {0:?} (expected \"field\" or \"field:dir\")")]
    InvalidSort(String),
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
