//! Property-based tests for the forecast engine.
//!
//! These verify that universal invariants hold across randomized scenarios
//! and horizons, using the `proptest` crate for test case generation.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use runwise_core::{simulate, Scenario};

// =============================================================================
// Generators
// =============================================================================

/// Generates a scenario with drivers in realistic planning ranges.
fn arb_scenario() -> impl Strategy<Value = Scenario> {
    (
        "[A-Za-z]{3,12}",
        -0.2f64..0.5,
        0.0f64..0.4,
        0.0f64..0.9,
        0.0f64..50_000.0,
        0.0f64..50_000.0,
        0.0f64..50_000.0,
    )
        .prop_map(
            |(name, growth, churn, cogs_pct, opex_rnd, opex_sm, opex_ga)| {
                Scenario {
                    name,
                    growth,
                    churn,
                    cogs_pct,
                    opex_rnd,
                    opex_sm,
                    opex_ga,
                }
            },
        )
}

/// Generates an arbitrary anchor date; day 28 keeps every month valid.
fn arb_start_date() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2100, 1u32..=12, 1u32..=28).prop_map(|(year, month, day)| {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
    })
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The run always has exactly `months` records, indexed sequentially
    /// from 1, each dated the first of a month.
    #[test]
    fn prop_record_count_matches_horizon(
        scenario in arb_scenario(),
        start in arb_start_date(),
        months in 1u32..120,
        mrr0 in 0.0f64..1_000_000.0,
        initial_cash in -100_000.0f64..1_000_000.0,
    ) {
        let run = simulate(start, months, mrr0, initial_cash, &scenario).unwrap();

        prop_assert_eq!(run.records.len(), months as usize);
        for (i, record) in run.records.iter().enumerate() {
            prop_assert_eq!(record.month, i as u32 + 1);
            prop_assert_eq!(record.date.day(), 1);
        }
    }

    /// Revenue recognition mirrors MRR exactly, every month.
    #[test]
    fn prop_revenue_mirrors_mrr(
        scenario in arb_scenario(),
        start in arb_start_date(),
        months in 1u32..120,
        mrr0 in 0.0f64..1_000_000.0,
    ) {
        let run = simulate(start, months, mrr0, 0.0, &scenario).unwrap();

        for record in &run.records {
            prop_assert_eq!(record.revenue, record.mrr);
        }
    }

    /// The cash balance moves by exactly the operating cash flow: for
    /// month 1 relative to the initial balance, and between every adjacent
    /// pair of months after that.
    #[test]
    fn prop_cash_deltas_equal_operating_cf(
        scenario in arb_scenario(),
        start in arb_start_date(),
        months in 1u32..120,
        mrr0 in 0.0f64..1_000_000.0,
        initial_cash in -100_000.0f64..1_000_000.0,
    ) {
        let run = simulate(start, months, mrr0, initial_cash, &scenario).unwrap();

        let tolerance = |reference: f64| 1e-6 * reference.abs().max(1.0);

        let first = &run.records[0];
        let delta = first.cash_balance - initial_cash;
        prop_assert!(
            (delta - first.operating_cf).abs() <= tolerance(first.operating_cf),
            "month 1 delta {} != operating_cf {}",
            delta,
            first.operating_cf
        );

        for pair in run.records.windows(2) {
            let delta = pair[1].cash_balance - pair[0].cash_balance;
            prop_assert!(
                (delta - pair[1].operating_cf).abs()
                    <= tolerance(pair[1].operating_cf),
                "month {} delta {} != operating_cf {}",
                pair[1].month,
                delta,
                pair[1].operating_cf
            );
        }
    }

    /// Determinism: two calls with identical arguments produce an
    /// identical record series, bit for bit.
    #[test]
    fn prop_identical_inputs_identical_series(
        scenario in arb_scenario(),
        start in arb_start_date(),
        months in 1u32..120,
        mrr0 in 0.0f64..1_000_000.0,
        initial_cash in -100_000.0f64..1_000_000.0,
    ) {
        let first = simulate(start, months, mrr0, initial_cash, &scenario).unwrap();
        let second = simulate(start, months, mrr0, initial_cash, &scenario).unwrap();

        prop_assert_eq!(first.records, second.records);
    }
}
