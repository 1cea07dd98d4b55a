//! Error types for the Compound core crate.
//!
//! This module defines the error types shared by the foundational types,
//! providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for Compound core operations.
pub type CompoundResult<T> = Result<T, CompoundError>;

/// The error type for Compound core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompoundError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// No price recorded for the requested date.
    ///
    /// Lookups are exact-date only; there is no interpolation or
    /// nearest-date fallback.
    #[error("No price for '{series}' on {date}")]
    PriceNotFound {
        /// Name of the price series that was queried.
        series: String,
        /// The date that has no recorded price.
        date: String,
    },
}

impl CompoundError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a price not found error.
    #[must_use]
    pub fn price_not_found(series: impl Into<String>, date: impl ToString) -> Self {
        Self::PriceNotFound {
            series: series.into(),
            date: date.to_string(),
        }
    }
}
