//! Forecast module - run models, the simulation engine, derived indicators.

pub mod forecast_calculator;
mod forecast_model;
mod indicators;

pub use forecast_calculator::simulate;
pub use forecast_model::{ForecastRun, MonthlyRecord, RunMetadata};
pub use indicators::{
    annualized_run_rate, first_month_ebitda, runway, KpiSummary, Runway,
};
