//! Error types for the roster crate.

use roster_seeker::SeekerError;
use thiserror::Error;

/// Errors from reading user input, settings, or fixtures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    /// Screen name did not match any list screen.
    #[error("unknown screen: {0:?} (expected one of: {names})", names = crate::screens::Screen::names())]
    UnknownScreen(String),

    /// Status text did not match any variant.
    #[error("unknown {kind} value: {value:?}")]
    UnknownStatus { kind: &'static str, value: String },

    /// Filter argument was not `KEY=VALUE`.
    #[error("invalid filter: {0:?} (expected KEY=VALUE)")]
    InvalidFilter(String),

    /// Query state could not be parsed.
    #[error(transparent)]
    Query(#[from] SeekerError),

    /// Settings file could not be read or parsed.
    #[error("invalid settings in {source_name}: {message}")]
    Settings { source_name: String, message: String },

    /// Embedded fixtures did not deserialize.
    #[error("invalid fixtures: {0}")]
    Fixtures(String),
}

/// Result type for roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;
