//! CSV text → [`Dataset`] parsing.
//!
//! This is the shipped implementation of the replaceable loader collaborator:
//! a header row with year column names, a first column of entity labels, and
//! numeric cells that may carry thousands separators (stripped before
//! parsing). Acquisition (files, network) stays with the caller — hand this
//! module text or any `io::Read`.

use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::Matrix;
use std::io;

/// Parse a CSV string into a [`Dataset`].
pub fn parse_csv(text: &str) -> Result<Dataset> {
    read_csv(text.as_bytes())
}

/// Read CSV from any reader into a [`Dataset`].
///
/// Ragged rows and non-numeric cells fail with [`Error::InputShape`] before
/// any computation downstream can run on a partially-parsed table.
pub fn read_csv<R: io::Read>(reader: R) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| Error::InputShape(format!("unreadable header row: {}", e)))?
        .clone();
    if headers.len() < 2 {
        return Err(Error::InputShape(
            "header row needs a label column and at least one year column".to_string(),
        ));
    }
    let columns: Vec<String> = headers.iter().skip(1).map(|h| h.trim().to_string()).collect();
    let width = columns.len();

    let mut labels = Vec::new();
    let mut cells = Vec::new();

    for (row_idx, record) in rdr.records().enumerate() {
        let record =
            record.map_err(|e| Error::InputShape(format!("row {}: {}", row_idx + 1, e)))?;
        if record.len() != width + 1 {
            return Err(Error::InputShape(format!(
                "row {} has {} fields, expected {}",
                row_idx + 1,
                record.len(),
                width + 1
            )));
        }

        let label = record[0].trim().to_string();
        for (col_idx, cell) in record.iter().skip(1).enumerate() {
            let value = parse_numeric(cell).ok_or_else(|| {
                Error::InputShape(format!(
                    "non-numeric value '{}' at row '{}', column '{}'",
                    cell, label, columns[col_idx]
                ))
            })?;
            cells.push(value);
        }
        labels.push(label);
    }

    if labels.is_empty() {
        return Err(Error::InputShape("no data rows".to_string()));
    }

    let values = Matrix::from_shape_vec((labels.len(), width), cells)
        .map_err(|e| Error::InputShape(e.to_string()))?;
    Dataset::new(labels, columns, values)
}

/// Numeric parse with thousands separators stripped, e.g. "1,234" → 1234.0.
fn parse_numeric(cell: &str) -> Option<f64> {
    let cleaned: String = cell.trim().chars().filter(|&c| c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}
