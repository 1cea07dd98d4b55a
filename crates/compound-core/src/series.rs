//! Price history for a single tradable asset.

use std::collections::btree_map::{BTreeMap, Entry};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CompoundError, CompoundResult};
use crate::types::Date;

/// The date-indexed price history of one asset.
///
/// A series is identified by its name, which callers treat as the unique
/// identifier of the asset. Prices are recorded at day granularity, at most
/// one per date; once set, a date's price is immutable for the life of the
/// series.
///
/// The series performs no validation of price sign or magnitude; callers are
/// responsible for supplying sane inputs.
///
/// # Example
///
/// ```rust
/// use compound_core::{Date, PriceSeries};
/// use rust_decimal_macros::dec;
///
/// let mut series = PriceSeries::new("ACME");
/// let day = Date::from_ymd(2025, 6, 15).unwrap();
///
/// assert!(series.try_add_price(day, dec!(98.50)));
/// assert!(!series.try_add_price(day, dec!(99.00)));
/// assert_eq!(series.price(day).unwrap(), dec!(98.50));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSeries {
    /// Name of the asset. Assumed unique across a ledger.
    name: String,
    /// Recorded prices, one per date.
    prices: BTreeMap<Date, Decimal>,
}

impl PriceSeries {
    /// Creates an empty series identified by `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prices: BTreeMap::new(),
        }
    }

    /// Returns the name of the asset.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Records `price` for `date` if no price exists yet for that date.
    ///
    /// Returns `true` if the price was inserted; `false` if a price was
    /// already recorded for `date`, in which case the series is unchanged.
    pub fn try_add_price(&mut self, date: Date, price: Decimal) -> bool {
        match self.prices.entry(date) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(price);
                true
            }
        }
    }

    /// Returns the price recorded for `date`.
    ///
    /// Lookups are exact-date only; there is no interpolation or
    /// nearest-date fallback.
    ///
    /// # Errors
    ///
    /// Returns `CompoundError::PriceNotFound` if no price was recorded for
    /// `date`.
    pub fn price(&self, date: Date) -> CompoundResult<Decimal> {
        self.prices
            .get(&date)
            .copied()
            .ok_or_else(|| CompoundError::price_not_found(&self.name, date))
    }

    /// Returns the number of recorded prices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Returns true if no prices have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Iterates over the recorded prices in date order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, Decimal)> + '_ {
        self.prices.iter().map(|(date, price)| (*date, *price))
    }
}
