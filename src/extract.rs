use crate::backend::{CellValue, QueryResult};
use crate::error::CheckError;

/// How the tested value is derived from a query result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
    /// First column of the first row, parsed as a number.
    ScalarFirstCell,
    /// Number of rows returned.
    RowCount,
}

/// Reduce a query result to the single numeric signal tested against
/// thresholds.
///
/// A row count is always defined, zero included. Scalar extraction requires
/// at least one row, and a first cell that reads as a number; a NULL or
/// non-numeric cell is an error rather than a silent zero.
pub fn extract(result: &QueryResult, mode: ExtractionMode) -> Result<f64, CheckError> {
    match mode {
        ExtractionMode::RowCount => Ok(result.rows.len() as f64),
        ExtractionMode::ScalarFirstCell => {
            let row = result.rows.first().ok_or(CheckError::EmptyResult)?;
            match row.first().unwrap_or(&CellValue::Null) {
                CellValue::Text(text) => {
                    text.trim()
                        .parse::<f64>()
                        .map_err(|_| CheckError::NonNumericValue {
                            value: text.clone(),
                        })
                }
                CellValue::Null => Err(CheckError::NonNumericValue {
                    value: "NULL".to_string(),
                }),
            }
        }
    }
}
