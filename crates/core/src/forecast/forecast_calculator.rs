//! The simulation engine: one linear pass, two scalar recurrences.

use chrono::{Datelike, Months, NaiveDate, Utc};
use log::debug;

use crate::errors::{Error, Result};
use crate::forecast::{ForecastRun, MonthlyRecord, RunMetadata};
use crate::scenario::Scenario;

/// Simulates monthly subscription metrics over `months` periods.
///
/// `start_date` anchors the first period and is snapped to the first day of
/// its calendar month; `mrr0` is the recurring revenue at that month and
/// `initial_cash` the cash on hand before that month's operations (month 1
/// already folds its own operating cash flow into the balance).
///
/// Pure and side-effect free: identical inputs reproduce an identical
/// record series, so callers may safely memoize by input tuple. Fails only
/// on a non-positive horizon.
pub fn simulate(
    start_date: NaiveDate,
    months: u32,
    mrr0: f64,
    initial_cash: f64,
    scenario: &Scenario,
) -> Result<ForecastRun> {
    if months == 0 {
        return Err(Error::InvalidArgument(
            "`months` must be strictly positive".to_string(),
        ));
    }

    debug!(
        "simulating {} months for scenario '{}'",
        months, scenario.name
    );

    // Growth and churn combine additively into one net monthly rate,
    // not as two compounding factors.
    let net_rate = 1.0 + scenario.growth - scenario.churn;
    let fixed_opex = scenario.opex_rnd + scenario.opex_sm + scenario.opex_ga;

    let mut records = Vec::with_capacity(months as usize);
    let mut mrr = mrr0;
    let mut cash_balance = initial_cash;

    for t in 0..months {
        if t > 0 {
            mrr *= net_rate;
        }
        let date = period_start(start_date, t)?;

        // Revenue recognition mirrors MRR; no deferred/accrual distinction.
        let revenue = mrr;
        let cogs = revenue * scenario.cogs_pct;
        let gross_profit = revenue - cogs;
        let ebitda = gross_profit - fixed_opex;
        let operating_cf = ebitda;
        cash_balance += operating_cf;

        records.push(MonthlyRecord {
            month: t + 1,
            date,
            mrr,
            revenue,
            cogs,
            gross_profit,
            opex_rnd: scenario.opex_rnd,
            opex_sm: scenario.opex_sm,
            opex_ga: scenario.opex_ga,
            ebitda,
            operating_cf,
            cash_balance,
        });
    }

    Ok(ForecastRun {
        records,
        metadata: RunMetadata {
            scenario: scenario.clone(),
            generated_at: Utc::now(),
        },
    })
}

/// First day of the calendar month `offset` months after `start_date`'s
/// month.
fn period_start(start_date: NaiveDate, offset: u32) -> Result<NaiveDate> {
    let origin = NaiveDate::from_ymd_opt(start_date.year(), start_date.month(), 1)
        .ok_or_else(|| {
            Error::InvalidArgument(format!("invalid start date {start_date}"))
        })?;
    origin.checked_add_months(Months::new(offset)).ok_or_else(|| {
        Error::InvalidArgument(format!(
            "forecast horizon exceeds the supported date range at month offset {offset}"
        ))
    })
}
