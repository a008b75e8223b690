// CSV rendering of the exported sheets (month closure and raw presences).
//
// Notes
// - The header row comes from the serde renames on the row type.
// - Semicolon delimited so the decimal-comma locales the sheet is opened in
//   do not split cells.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpreadsheetCsvError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("flush failed: {0}")]
    Flush(String),
}

pub const DELIMITER: u8 = b';';

pub fn write_spreadsheet_csv<T: Serialize>(rows: &[T]) -> Result<Vec<u8>, SpreadsheetCsvError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| SpreadsheetCsvError::Flush(e.to_string()))
}
