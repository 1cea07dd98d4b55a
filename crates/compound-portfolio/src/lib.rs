//! # Compound Portfolio
//!
//! Position ledger and return calculations for the Compound library.
//!
//! This crate answers one question: what is the cumulative or annualized
//! return of a collection of held assets between two dates? The
//! [`Portfolio`] ledger maps each asset to the quantity held of it; each
//! asset carries its own [`PriceSeries`](compound_core::PriceSeries) price
//! history, queried live at computation time.
//!
//! ## Design Philosophy
//!
//! - **Pure calculations**: return computations take the period as input,
//!   mutate nothing, and produce a single `Decimal` result
//! - **Decimal domain**: values stay in `rust_decimal::Decimal`; only the
//!   fractional power of the annualization crosses into `f64`, and that
//!   crossing is checked
//! - **Explicit failures**: missing prices, reversed date ranges, and
//!   degenerate arithmetic surface as typed errors, never as float artifacts
//!
//! ## Quick Start
//!
//! ```rust
//! use compound_portfolio::prelude::*;
//!
//! let start = Date::from_ymd(2024, 1, 15)?;
//! let end = start.add_years(1)?;
//!
//! let mut acme = PriceSeries::new("ACME");
//! acme.try_add_price(start, dec!(50));
//! acme.try_add_price(end, dec!(52));
//!
//! let mut portfolio = Portfolio::new();
//! portfolio.add_position(acme, dec!(100))?;
//!
//! let cumulative = portfolio.profit(start, end, ReturnMode::Cumulative)?;
//! assert_eq!(cumulative, dec!(0.04));
//! # Ok::<(), PortfolioError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`portfolio`] - The ledger and its positions
//! - [`returns`] - Cumulative and annualized return formulas
//! - [`error`] - Error types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod portfolio;
pub mod returns;

// Re-export error types at crate root
pub use error::{PortfolioError, PortfolioResult};

// Re-export main types
pub use portfolio::{Portfolio, Position};
pub use returns::{annualized_return, cumulative_return, ReturnMode};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use compound_portfolio::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{PortfolioError, PortfolioResult};

    // Ledger types
    pub use crate::portfolio::{Portfolio, Position};

    // Return calculations
    pub use crate::returns::{annualized_return, cumulative_return, ReturnMode};

    // Re-export commonly used types from dependencies
    pub use compound_core::{CompoundError, Date, PriceSeries};
    pub use rust_decimal::Decimal;
    pub use rust_decimal_macros::dec;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_compiles() {
        // Basic smoke test
        let err = PortfolioError::zero_start_value("2025-01-15");
        assert!(err.to_string().contains("zero"));
    }
}
