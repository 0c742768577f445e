//! Error types for the analysis core.
//!
//! Aggregation and replay are total over degenerate input - empty
//! collections, zero denominators, and dirty values produce zeros or empty
//! reports, never an error. The only fallible surface is caller-supplied
//! configuration that would make a computation meaningless, such as a
//! non-positive starting balance for a backtest run.

use thiserror::Error;

/// Errors produced when caller-supplied configuration is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    /// A field carries a value the analysis core cannot work with.
    #[error("invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name as the caller supplied it.
        field: String,
        /// Why the value was rejected.
        message: String,
    },
}
