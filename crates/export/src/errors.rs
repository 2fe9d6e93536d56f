//! Export error types.

use thiserror::Error;

/// Type alias for Result using our ExportError type.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors raised while serializing a forecast run.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet export failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
