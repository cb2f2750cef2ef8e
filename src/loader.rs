use std::path::Path;

use log::warn;

use crate::error::AnalysisError;

/// Load the question corpus from a CSV file with headers.
///
/// The column named `field` supplies each record's text. A missing cell is
/// normalized to an empty string; if the column is absent entirely, every
/// record becomes empty (logged once as a warning, not an error — the
/// records still participate in every aggregation). A read or parse failure
/// is surfaced once and no aggregation runs.
pub fn load_questions(path: &Path, field: &str) -> Result<Vec<String>, AnalysisError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let column = reader
        .headers()?
        .iter()
        .position(|h| h == field);
    if column.is_none() {
        warn!(
            "column {:?} not found in {}; all records normalized to empty text",
            field,
            path.display()
        );
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let text = column
            .and_then(|i| row.get(i))
            .unwrap_or("")
            .to_string();
        records.push(text);
    }
    Ok(records)
}
