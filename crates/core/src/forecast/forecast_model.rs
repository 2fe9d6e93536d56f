//! Forecast run domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::scenario::Scenario;

/// One month of projected financials.
///
/// Field order matches the canonical row schema consumed by exporters
/// (`constants::FORECAST_COLUMNS`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyRecord {
    /// 1-based month index, sequential from the start of the run
    pub month: u32,
    /// First day of the calendar month
    pub date: NaiveDate,
    /// Monthly recurring revenue
    pub mrr: f64,
    /// Equal to MRR for a pure subscription business
    pub revenue: f64,
    pub cogs: f64,
    pub gross_profit: f64,
    pub opex_rnd: f64,
    pub opex_sm: f64,
    pub opex_ga: f64,
    pub ebitda: f64,
    /// EBITDA stands in for operating cash flow: no working-capital
    /// adjustment, no tax, no capex
    pub operating_cf: f64,
    /// Cumulative cash position at month end
    pub cash_balance: f64,
}

/// Run-level annotations for downstream traceability.
///
/// Metadata never feeds back into the computed rows; two runs with
/// identical inputs differ only in `generated_at`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunMetadata {
    /// Snapshot of the drivers the run was computed from
    pub scenario: Scenario,
    pub generated_at: DateTime<Utc>,
}

impl RunMetadata {
    /// String-keyed view of the annotations.
    pub fn as_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(
            "scenario".to_string(),
            Value::Object(self.scenario.to_metadata()),
        );
        map.insert(
            "generated_at".to_string(),
            Value::String(self.generated_at.to_rfc3339()),
        );
        map
    }
}

/// An ordered sequence of monthly records plus run-level metadata.
///
/// Exists only for the duration of one engine call; it is never mutated
/// after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastRun {
    pub records: Vec<MonthlyRecord>,
    pub metadata: RunMetadata,
}

impl ForecastRun {
    /// Number of projected months.
    pub fn months(&self) -> usize {
        self.records.len()
    }
}
