//! Error types for jpholiday-rs.
//!
//! The library recognises exactly one fallible boundary: constructing a
//! date (from components, a serial number, a timestamp, or a string).
//! Everything past that boundary is total and returns plain values.

use thiserror::Error;

/// The top-level error type used throughout jpholiday-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Date construction or arithmetic produced an invalid date.
    #[error("date error: {0}")]
    Date(String),

    /// A date string could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand `Result` type used throughout jpholiday-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;
