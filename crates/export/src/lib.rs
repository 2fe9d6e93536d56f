//! Runwise Export - CSV and spreadsheet serialization of forecast runs.
//!
//! Consumes a `ForecastRun` and writes it out without altering any value.
//! Column order follows `runwise_core::FORECAST_COLUMNS` exactly in both
//! formats.

pub mod csv_export;
pub mod errors;
pub mod xlsx_export;

pub use csv_export::{to_csv_string, write_csv};
pub use errors::{ExportError, Result};
pub use xlsx_export::{to_xlsx_buffer, write_xlsx};
