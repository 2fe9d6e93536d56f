//! Derived summary indicators over a completed run.
//!
//! These are read-only views computed by presentation layers; the engine
//! itself never includes them in the record table.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::forecast::ForecastRun;

/// Months until the projected cash balance first turns negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Runway {
    /// Cash goes strictly below zero at this 1-based month.
    DepletedAt(u32),
    /// Cash never dips below zero within the projected horizon.
    BeyondHorizon(u32),
}

impl fmt::Display for Runway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Runway::DepletedAt(month) => write!(f, "{month}"),
            Runway::BeyondHorizon(months) => write!(f, "≥{months}"),
        }
    }
}

/// First 1-based month whose cash balance is strictly negative.
///
/// A month that lands exactly on zero does not end the runway.
pub fn runway(run: &ForecastRun) -> Runway {
    run.records
        .iter()
        .find(|record| record.cash_balance < 0.0)
        .map(|record| Runway::DepletedAt(record.month))
        .unwrap_or(Runway::BeyondHorizon(run.records.len() as u32))
}

/// Annualized revenue run-rate at month 12 (month-12 MRR times 12).
///
/// `None` when fewer than 12 months were projected.
pub fn annualized_run_rate(run: &ForecastRun) -> Option<f64> {
    run.records.get(11).map(|record| record.mrr * 12.0)
}

/// EBITDA of the first projected month.
pub fn first_month_ebitda(run: &ForecastRun) -> Option<f64> {
    run.records.first().map(|record| record.ebitda)
}

/// The headline indicators bundled for dashboards and CLIs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KpiSummary {
    pub arr_month_12: Option<f64>,
    pub runway: Runway,
    pub first_month_ebitda: Option<f64>,
}

impl KpiSummary {
    pub fn from_run(run: &ForecastRun) -> Self {
        Self {
            arr_month_12: annualized_run_rate(run),
            runway: runway(run),
            first_month_ebitda: first_month_ebitda(run),
        }
    }
}
