//! Spreadsheet serialization of a forecast run.

use std::path::Path;

use rust_xlsxwriter::{DocProperties, Format, Workbook, Worksheet};
use runwise_core::{ForecastRun, MonthlyRecord, FORECAST_COLUMNS};

use crate::errors::Result;

const SHEET_NAME: &str = "Forecast";
const EXPORT_TITLE: &str = "Runwise Forecast Export";

/// Writes the run as an `.xlsx` workbook at `path`.
///
/// One `Forecast` worksheet: a header row in canonical column order, then
/// one row per month with dates as real date cells. Document properties
/// carry the export title and the scenario name as subject. Cell values
/// are the raw engine output, unrounded.
pub fn write_xlsx(run: &ForecastRun, path: &Path) -> Result<()> {
    let mut workbook = build_workbook(run)?;
    workbook.save(path)?;
    Ok(())
}

/// Renders the workbook to an in-memory buffer.
pub fn to_xlsx_buffer(run: &ForecastRun) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(run)?;
    Ok(workbook.save_to_buffer()?)
}

fn build_workbook(run: &ForecastRun) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    workbook.set_properties(
        &DocProperties::new()
            .set_title(EXPORT_TITLE)
            .set_subject(run.metadata.scenario.name.as_str()),
    );

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;
    worksheet.set_column_width(1, 12)?;

    for (col, name) in FORECAST_COLUMNS.iter().enumerate() {
        worksheet.write(0, col as u16, *name)?;
    }

    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    for (i, record) in run.records.iter().enumerate() {
        write_row(worksheet, (i + 1) as u32, record, &date_format)?;
    }

    Ok(workbook)
}

fn write_row(
    worksheet: &mut Worksheet,
    row: u32,
    record: &MonthlyRecord,
    date_format: &Format,
) -> Result<()> {
    worksheet.write(row, 0, record.month)?;
    worksheet.write_with_format(row, 1, &record.date, date_format)?;
    worksheet.write(row, 2, record.mrr)?;
    worksheet.write(row, 3, record.revenue)?;
    worksheet.write(row, 4, record.cogs)?;
    worksheet.write(row, 5, record.gross_profit)?;
    worksheet.write(row, 6, record.opex_rnd)?;
    worksheet.write(row, 7, record.opex_sm)?;
    worksheet.write(row, 8, record.opex_ga)?;
    worksheet.write(row, 9, record.ebitda)?;
    worksheet.write(row, 10, record.operating_cf)?;
    worksheet.write(row, 11, record.cash_balance)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use runwise_core::{simulate, Scenario};

    fn sample_run() -> ForecastRun {
        let start = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        simulate(start, 6, 50_000.0, 100_000.0, &Scenario::base()).unwrap()
    }

    #[test]
    fn buffer_is_a_zip_container() {
        let buffer = to_xlsx_buffer(&sample_run()).unwrap();
        // xlsx is a ZIP archive; check the magic and that content exists
        assert!(buffer.starts_with(b"PK"));
        assert!(buffer.len() > 1_000);
    }

    #[test]
    fn saves_a_workbook_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("forecast.xlsx");

        write_xlsx(&sample_run(), &path).unwrap();
        assert!(path.metadata().unwrap().len() > 0);
    }
}
