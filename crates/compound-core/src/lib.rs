//! # Compound Core
//!
//! Core types for the Compound portfolio return analytics library.
//!
//! This crate provides the foundational building blocks used throughout
//! Compound:
//!
//! - **Types**: The [`Date`] calendar type used to index prices
//! - **Price Series**: The [`PriceSeries`] date-indexed price history
//! - **Errors**: Structured error types shared by the foundational layer
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing incompatible values
//! - **Explicit Over Implicit**: Clear, self-documenting APIs
//! - **Decimal Arithmetic**: Prices are `rust_decimal::Decimal`, never floats
//!
//! ## Example
//!
//! ```rust
//! use compound_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let mut series = PriceSeries::new("ACME");
//! let day = Date::from_ymd(2025, 1, 15)?;
//! series.try_add_price(day, dec!(98.50));
//! assert_eq!(series.price(day)?, dec!(98.50));
//! # Ok::<(), CompoundError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]

pub mod error;
pub mod series;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CompoundError, CompoundResult};
    pub use crate::series::PriceSeries;
    pub use crate::types::Date;
}

// Re-export commonly used types at crate root
pub use error::{CompoundError, CompoundResult};
pub use series::PriceSeries;
pub use types::Date;
