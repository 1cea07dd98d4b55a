//! Return formulas over a portfolio and a holding period.
//!
//! This module provides the two return measures:
//! - Cumulative return: total percentage change in portfolio value
//! - Annualized return: the compound annual growth rate that reproduces the
//!   cumulative return over the actual holding period
//!
//! All functions are pure - they take the portfolio and the period as input
//! and return computed results. No caching, no I/O, no side effects.

use compound_core::Date;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{Portfolio, PortfolioError, PortfolioResult};

/// Which return measure to compute.
///
/// The original contract defaulted to the annualized measure; `Default`
/// preserves that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReturnMode {
    /// Total percentage change over the holding period, unannualized.
    Cumulative,
    /// Compound annual growth rate over the holding period.
    #[default]
    Annualized,
}

/// Calculates the cumulative return of `portfolio` between the dates given.
///
/// The return is `(end_value - start_value) / start_value` where each value
/// is the sum over every held asset of `quantity × price(date)`. An empty
/// portfolio, or a period of zero length, returns `0`.
///
/// # Errors
///
/// Returns `PortfolioError::InvalidDateRange` if `end < start`, a wrapped
/// `CompoundError::PriceNotFound` if any held asset has no price at `start`
/// or `end`, and `PortfolioError::ZeroStartValue` if the portfolio values to
/// zero at `start`.
pub fn cumulative_return(
    portfolio: &Portfolio,
    start: Date,
    end: Date,
) -> PortfolioResult<Decimal> {
    ensure_ordered(start, end)?;
    cumulative(portfolio, start, end)
}

/// Calculates the annualized return of `portfolio` between the dates given.
///
/// A cumulative return of zero or less annualizes to `0`; the formula is
/// defined only for positive cumulative growth. Periods spanning an exact
/// whole number of calendar years use `(1 + r)^(1/years) - 1`; any other
/// period annualizes by day count as `(1 + r)^(365/days) - 1`.
///
/// # Errors
///
/// Fails as [`cumulative_return`] does, plus
/// `PortfolioError::CalculationFailed` if the power computation leaves the
/// representable range.
pub fn annualized_return(
    portfolio: &Portfolio,
    start: Date,
    end: Date,
) -> PortfolioResult<Decimal> {
    ensure_ordered(start, end)?;
    annualized(portfolio, start, end)
}

fn ensure_ordered(start: Date, end: Date) -> PortfolioResult<()> {
    if end < start {
        return Err(PortfolioError::invalid_date_range(start, end));
    }
    Ok(())
}

/// Cumulative return over an already-validated period.
fn cumulative(portfolio: &Portfolio, start: Date, end: Date) -> PortfolioResult<Decimal> {
    if portfolio.is_empty() || start == end {
        return Ok(Decimal::ZERO);
    }

    let mut start_total = Decimal::ZERO;
    let mut end_total = Decimal::ZERO;
    for position in portfolio.positions() {
        let quantity = position.quantity();
        start_total += quantity * position.series().price(start)?;
        end_total += quantity * position.series().price(end)?;
    }

    if start_total == Decimal::ZERO {
        return Err(PortfolioError::zero_start_value(start));
    }

    Ok((end_total - start_total) / start_total)
}

/// Annualized return over an already-validated period.
fn annualized(portfolio: &Portfolio, start: Date, end: Date) -> PortfolioResult<Decimal> {
    let growth = cumulative(portfolio, start, end)?;
    if growth <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }

    let day_after_end = end.add_days(1);
    let exponent = if start.month() == day_after_end.month() && start.day() == day_after_end.day()
    {
        // The period spans exact calendar years
        let years_held = Decimal::from(day_after_end.year() - start.year());
        Decimal::ONE / years_held
    } else {
        // start < end here: a zero-length period already returned above
        let days_held = Decimal::from(start.days_between(&end));
        dec!(365) / days_held
    };

    Ok(pow_decimal(Decimal::ONE + growth, exponent)? - Decimal::ONE)
}

/// Decimal exponentiation via f64.
///
/// Decimal arithmetic has no fractional power operator, so the base and
/// exponent cross into f64 for the power operation and the result crosses
/// back. This is the only point where values leave the decimal domain.
fn pow_decimal(base: Decimal, exponent: Decimal) -> PortfolioResult<Decimal> {
    let base_f = base
        .to_f64()
        .ok_or_else(|| PortfolioError::calculation_failed(format!("cannot lower {base} to f64")))?;
    let exponent_f = exponent.to_f64().ok_or_else(|| {
        PortfolioError::calculation_failed(format!("cannot lower {exponent} to f64"))
    })?;

    let raised = base_f.powf(exponent_f);
    if !raised.is_finite() {
        return Err(PortfolioError::calculation_failed(format!(
            "{base}^{exponent} is not finite"
        )));
    }

    Decimal::from_f64_retain(raised).ok_or_else(|| {
        PortfolioError::calculation_failed(format!("{raised} exceeds the decimal range"))
    })
}
