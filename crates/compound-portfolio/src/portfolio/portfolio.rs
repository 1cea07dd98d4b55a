//! Portfolio struct and core methods.

use std::collections::btree_map::{BTreeMap, Entry};

use compound_core::{Date, PriceSeries};
use rust_decimal::Decimal;

use crate::portfolio::Position;
use crate::returns::{self, ReturnMode};
use crate::{PortfolioError, PortfolioResult};

/// A ledger of held positions, keyed by asset name.
///
/// The portfolio maps each asset to the quantity held of it and aggregates
/// price lookups across all held assets to compute returns over a date
/// range. An asset absent from the ledger is simply not held; positions only
/// ever grow (there is no sell or remove operation).
///
/// Assets are identified by the name of their [`PriceSeries`]. Adding a
/// position under a name that is already held accumulates the quantity and
/// folds the incoming prices into the held history, so "same name" always
/// means "same position".
///
/// # Example
///
/// ```rust
/// use compound_portfolio::prelude::*;
///
/// let day = Date::from_ymd(2024, 1, 15)?;
/// let mut series = PriceSeries::new("ACME");
/// series.try_add_price(day, dec!(50));
/// series.try_add_price(day.add_years(1)?, dec!(52));
///
/// let mut portfolio = Portfolio::new();
/// portfolio.add_position(series, dec!(100))?;
///
/// let growth = portfolio.profit(day, day.add_years(1)?, ReturnMode::Cumulative)?;
/// assert_eq!(growth, dec!(0.04));
/// # Ok::<(), PortfolioError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    /// Held positions, one per distinct asset name.
    positions: BTreeMap<String, Position>,
}

impl Portfolio {
    /// Creates an empty portfolio.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` units of the asset described by `series`.
    ///
    /// If the asset is already held, the amount accumulates on the existing
    /// position and the incoming series' prices are folded into the held
    /// history (dates already priced keep their original price). Returns the
    /// resulting total quantity held of the asset.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::InvalidAmount` if `amount` is zero or
    /// negative. The ledger is left untouched in that case.
    pub fn add_position(&mut self, series: PriceSeries, amount: Decimal) -> PortfolioResult<Decimal> {
        if amount <= Decimal::ZERO {
            return Err(PortfolioError::invalid_amount(amount));
        }

        match self.positions.entry(series.name().to_string()) {
            Entry::Occupied(mut held) => Ok(held.get_mut().absorb(series, amount)),
            Entry::Vacant(slot) => Ok(slot.insert(Position::new(series, amount)).quantity()),
        }
    }

    /// Computes the portfolio's return over `[start, end]`.
    ///
    /// Dispatches to the cumulative or annualized formula based on `mode`;
    /// [`ReturnMode::default()`] is `Annualized`.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::InvalidDateRange` if `end < start`, and
    /// propagates any failure of the selected formula (see
    /// [`cumulative_return`](Self::cumulative_return) and
    /// [`annualized_return`](Self::annualized_return)).
    pub fn profit(&self, start: Date, end: Date, mode: ReturnMode) -> PortfolioResult<Decimal> {
        match mode {
            ReturnMode::Cumulative => returns::cumulative_return(self, start, end),
            ReturnMode::Annualized => returns::annualized_return(self, start, end),
        }
    }

    /// Computes the cumulative return over `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::InvalidDateRange` if `end < start`,
    /// `CompoundError::PriceNotFound` (wrapped) if any held asset lacks a
    /// price at `start` or `end`, and `PortfolioError::ZeroStartValue` if
    /// the portfolio values to zero at `start`.
    pub fn cumulative_return(&self, start: Date, end: Date) -> PortfolioResult<Decimal> {
        returns::cumulative_return(self, start, end)
    }

    /// Computes the annualized return over `[start, end]`.
    ///
    /// # Errors
    ///
    /// Fails as [`cumulative_return`](Self::cumulative_return) does, plus
    /// `PortfolioError::CalculationFailed` if the power computation leaves
    /// the representable range.
    pub fn annualized_return(&self, start: Date, end: Date) -> PortfolioResult<Decimal> {
        returns::annualized_return(self, start, end)
    }

    /// Returns the number of held positions.
    #[must_use]
    pub fn position_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if the portfolio holds no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the quantity held of the named asset, if held.
    #[must_use]
    pub fn quantity(&self, name: &str) -> Option<Decimal> {
        self.positions.get(name).map(Position::quantity)
    }

    /// Returns the price history of the named asset, if held.
    #[must_use]
    pub fn series(&self, name: &str) -> Option<&PriceSeries> {
        self.positions.get(name).map(Position::series)
    }

    /// Returns mutable access to the price history of the named asset.
    ///
    /// Prices added through this accessor are visible to subsequent return
    /// computations. The quantity held is not reachable this way; positions
    /// change only through [`add_position`](Self::add_position).
    pub fn series_mut(&mut self, name: &str) -> Option<&mut PriceSeries> {
        self.positions.get_mut(name).map(Position::series_mut)
    }

    /// Iterates over the held positions in asset-name order.
    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.positions.values()
    }
}
