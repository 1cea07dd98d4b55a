//! Property-based tests for ledger invariants.
//!
//! These tests verify properties that should always hold:
//! - Position quantities accumulate exactly
//! - A date's first price is the only price it ever has
//! - Reversed date ranges never compute
//! - The cumulative return matches the weighted aggregate definition

use approx::assert_relative_eq;
use compound_portfolio::prelude::*;
use rust_decimal::prelude::ToPrimitive;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

/// Simple deterministic hash for test data generation.
fn simple_hash(seed: u64, i: u64) -> u64 {
    let mut x = seed.wrapping_add(i).wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x = x.wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x
}

fn day(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Generates a portfolio of `n` assets priced at both period ends, returning
/// the portfolio alongside the independently tracked period totals.
fn generate_portfolio(n: usize, seed: u64, start: Date, end: Date) -> (Portfolio, Decimal, Decimal) {
    let mut portfolio = Portfolio::new();
    let mut start_total = Decimal::ZERO;
    let mut end_total = Decimal::ZERO;

    for i in 0..n {
        let hash = simple_hash(seed, i as u64);

        let quantity = Decimal::from(1 + (hash % 100) as i64);
        let start_price = Decimal::from(10 + (hash >> 8) as i64 % 100);
        let end_price = Decimal::from(10 + (hash >> 16) as i64 % 100);

        let mut series = PriceSeries::new(format!("ASSET{}", i));
        series.try_add_price(start, start_price);
        series.try_add_price(end, end_price);

        portfolio.add_position(series, quantity).unwrap();

        start_total += quantity * start_price;
        end_total += quantity * end_price;
    }

    (portfolio, start_total, end_total)
}

// =============================================================================
// PROPERTY: QUANTITIES ACCUMULATE EXACTLY
// =============================================================================

#[test]
fn property_amounts_accumulate() {
    for seed in 0..10 {
        let mut portfolio = Portfolio::new();
        let mut expected = Decimal::ZERO;

        for i in 0..20 {
            let amount = Decimal::from(1 + simple_hash(seed, i) % 1000) / dec!(10);
            expected += amount;

            let total = portfolio
                .add_position(PriceSeries::new("ACME"), amount)
                .unwrap();
            assert_eq!(total, expected, "seed={}, step={}", seed, i);
        }

        assert_eq!(portfolio.quantity("ACME"), Some(expected));
        assert_eq!(portfolio.position_count(), 1);
    }
}

#[test]
fn property_rejected_amounts_never_mutate() {
    for seed in 0..10 {
        let mut portfolio = Portfolio::new();
        portfolio
            .add_position(PriceSeries::new("ACME"), dec!(7))
            .unwrap();

        for i in 0..20 {
            let amount = -Decimal::from(simple_hash(seed, i) % 500);
            assert!(portfolio
                .add_position(PriceSeries::new("ACME"), amount)
                .is_err());
        }

        assert_eq!(portfolio.quantity("ACME"), Some(dec!(7)));
    }
}

// =============================================================================
// PROPERTY: ONE PRICE PER DATE
// =============================================================================

#[test]
fn property_first_price_wins() {
    for seed in 0..10 {
        let mut series = PriceSeries::new("ACME");
        let base = day(2024, 1, 1);

        // First pass: every insertion succeeds
        for i in 0..50 {
            let price = Decimal::from(simple_hash(seed, i) % 10_000) / dec!(100);
            assert!(series.try_add_price(base.add_days(i as i64), price));
        }

        // Second pass: every insertion is refused and nothing changes
        for i in 0..50 {
            let original = Decimal::from(simple_hash(seed, i) % 10_000) / dec!(100);
            let date = base.add_days(i as i64);

            assert!(!series.try_add_price(date, original + dec!(1)));
            assert_eq!(series.price(date).unwrap(), original);
        }

        assert_eq!(series.len(), 50);
    }
}

#[test]
fn property_price_not_found_iff_never_added() {
    let mut series = PriceSeries::new("ACME");
    let base = day(2024, 1, 1);

    // Price every even offset
    for i in (0..60).step_by(2) {
        series.try_add_price(base.add_days(i), dec!(42));
    }

    for i in 0..60 {
        let lookup = series.price(base.add_days(i));
        if i % 2 == 0 {
            assert!(lookup.is_ok());
        } else {
            assert!(matches!(
                lookup.unwrap_err(),
                CompoundError::PriceNotFound { .. }
            ));
        }
    }
}

// =============================================================================
// PROPERTY: REVERSED RANGES NEVER COMPUTE
// =============================================================================

#[test]
fn property_reversed_ranges_always_fail() {
    let (portfolio, _, _) = generate_portfolio(5, 1, day(2024, 1, 2), day(2024, 6, 3));

    for offset in 1..30 {
        let end = day(2024, 6, 3);
        let start = end.add_days(offset);

        for mode in [ReturnMode::Cumulative, ReturnMode::Annualized] {
            assert!(matches!(
                portfolio.profit(start, end, mode).unwrap_err(),
                PortfolioError::InvalidDateRange { .. }
            ));
        }
    }
}

// =============================================================================
// PROPERTY: CUMULATIVE RETURN IS THE WEIGHTED AGGREGATE
// =============================================================================

#[test]
fn property_cumulative_matches_weighted_definition() {
    let start = day(2024, 1, 2);
    let end = day(2024, 6, 3);

    for seed in 0..10 {
        for size in [1, 2, 5, 10, 25] {
            let (portfolio, start_total, end_total) =
                generate_portfolio(size, seed, start, end);

            let expected = (end_total - start_total) / start_total;
            let actual = portfolio.cumulative_return(start, end).unwrap();

            assert_eq!(actual, expected, "size={}, seed={}", size, seed);
        }
    }
}

#[test]
fn property_exact_single_year_annualizes_to_cumulative() {
    let start = day(2023, 3, 15);
    let end = start.add_years(1).unwrap() - 1;

    for seed in 0..10 {
        let (portfolio, _, _) = generate_portfolio(8, seed, start, end);

        let cumulative = portfolio.cumulative_return(start, end).unwrap();
        let annualized = portfolio.annualized_return(start, end).unwrap();

        if cumulative <= Decimal::ZERO {
            assert_eq!(annualized, Decimal::ZERO, "seed={}", seed);
        } else {
            // Over exactly one year the exponent is 1; only the float
            // crossing separates the two results.
            assert_relative_eq!(
                annualized.to_f64().unwrap(),
                cumulative.to_f64().unwrap(),
                epsilon = 1e-9
            );
        }
    }
}

// =============================================================================
// PROPERTY: PROFIT DISPATCHES TO THE MATCHING FORMULA
// =============================================================================

#[test]
fn property_profit_agrees_with_direct_methods() {
    let start = day(2022, 5, 9);
    let end = day(2024, 11, 21);

    for seed in 0..10 {
        let (portfolio, _, _) = generate_portfolio(6, seed, start, end);

        assert_eq!(
            portfolio.profit(start, end, ReturnMode::Cumulative).unwrap(),
            portfolio.cumulative_return(start, end).unwrap()
        );
        assert_eq!(
            portfolio.profit(start, end, ReturnMode::Annualized).unwrap(),
            portfolio.annualized_return(start, end).unwrap()
        );
    }
}
