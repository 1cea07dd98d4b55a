//! A held position: an asset and the quantity held of it.

use compound_core::PriceSeries;
use rust_decimal::Decimal;

/// An asset held in a portfolio, with the quantity held of it.
///
/// The position owns the asset's price history; the ledger queries it live,
/// so prices added to a held asset are visible to later return computations.
/// Quantities are strictly positive; the ledger enforces this before a
/// position is created or grown.
#[derive(Debug, Clone)]
pub struct Position {
    /// The asset's price history.
    series: PriceSeries,
    /// Quantity held. Strictly positive.
    quantity: Decimal,
}

impl Position {
    /// Creates a position holding `quantity` units of the asset.
    #[must_use]
    pub(crate) fn new(series: PriceSeries, quantity: Decimal) -> Self {
        Self { series, quantity }
    }

    /// Returns the asset's price history.
    #[must_use]
    pub fn series(&self) -> &PriceSeries {
        &self.series
    }

    /// Returns the quantity held.
    #[must_use]
    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Grows the position by `amount` and folds the incoming series' prices
    /// into the held history. Dates already priced keep their original
    /// price. Returns the new total quantity.
    pub(crate) fn absorb(&mut self, incoming: PriceSeries, amount: Decimal) -> Decimal {
        for (date, price) in incoming.iter() {
            self.series.try_add_price(date, price);
        }
        self.quantity += amount;
        self.quantity
    }

    pub(crate) fn series_mut(&mut self) -> &mut PriceSeries {
        &mut self.series
    }
}
