//! Error types for portfolio operations.
//!
//! This module defines the error types used throughout the portfolio crate.

use compound_core::CompoundError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    /// Position addition with a zero or negative amount.
    #[error("Invalid amount: {amount} - the amount to add must be above 0")]
    InvalidAmount {
        /// The rejected amount.
        amount: Decimal,
    },

    /// Return computation over a range whose end precedes its start.
    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidDateRange {
        /// Start of the holding period.
        start: String,
        /// End of the holding period.
        end: String,
    },

    /// Portfolio value at the start of the period is zero, leaving the
    /// cumulative return undefined.
    #[error("Portfolio value at {date} is zero; cumulative return is undefined")]
    ZeroStartValue {
        /// The valuation date with a zero total.
        date: String,
    },

    /// Calculation failed.
    #[error("Calculation failed: {reason}")]
    CalculationFailed {
        /// The reason the calculation failed.
        reason: String,
    },

    /// Core library error.
    #[error("Core error: {0}")]
    Core(#[from] CompoundError),
}

impl PortfolioError {
    /// Creates an invalid amount error.
    #[must_use]
    pub fn invalid_amount(amount: Decimal) -> Self {
        Self::InvalidAmount { amount }
    }

    /// Creates an invalid date range error.
    #[must_use]
    pub fn invalid_date_range(start: impl ToString, end: impl ToString) -> Self {
        Self::InvalidDateRange {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// Creates a zero start value error.
    #[must_use]
    pub fn zero_start_value(date: impl ToString) -> Self {
        Self::ZeroStartValue {
            date: date.to_string(),
        }
    }

    /// Creates a calculation failed error.
    #[must_use]
    pub fn calculation_failed(reason: impl Into<String>) -> Self {
        Self::CalculationFailed {
            reason: reason.into(),
        }
    }
}
