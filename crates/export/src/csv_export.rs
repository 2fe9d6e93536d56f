//! Delimited-text serialization of a forecast run.

use std::io;

use runwise_core::{ForecastRun, MonthlyRecord, FORECAST_COLUMNS};

use crate::errors::Result;

/// Writes the monthly record table as CSV to `writer`: a header row in
/// canonical column order, then one row per month.
///
/// Dates are ISO (`yyyy-mm-dd`); numbers are emitted in shortest
/// round-trip form. No rounding is applied.
pub fn write_csv<W: io::Write>(run: &ForecastRun, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(FORECAST_COLUMNS)?;
    for record in &run.records {
        csv_writer.write_record(row_fields(record))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Renders the full table to an in-memory CSV string.
pub fn to_csv_string(run: &ForecastRun) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(run, &mut buffer)?;
    // The writer only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn row_fields(record: &MonthlyRecord) -> [String; 12] {
    [
        record.month.to_string(),
        record.date.to_string(),
        record.mrr.to_string(),
        record.revenue.to_string(),
        record.cogs.to_string(),
        record.gross_profit.to_string(),
        record.opex_rnd.to_string(),
        record.opex_sm.to_string(),
        record.opex_ga.to_string(),
        record.ebitda.to_string(),
        record.operating_cf.to_string(),
        record.cash_balance.to_string(),
    ]
}
