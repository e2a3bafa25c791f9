use std::{fs::File, io::Read};

use log::{debug, info};

use crate::{error::AnalysisError, models::table::TrafficTable};

/// Build CSV reader with desired configuration, Sets the capacity 32k for the buffer used in the CSV reader.
/// Fields are kept untrimmed and short rows are allowed through.
pub fn build_csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .flexible(true)
        .buffer_capacity(32 * 1024)
        .from_reader(reader)
}

/// Load the whole traffic file at `path` into memory.
pub fn load(path: &str) -> Result<TrafficTable, AnalysisError> {
    info!("Loading data from {}", path);

    let file = File::open(path).map_err(|e| {
        debug!("Failed to open {}: {}", path, e);
        AnalysisError::FileNotFound(path.to_string())
    })?;

    let table = read_table(file)?;

    debug!(
        "Loaded {} rows with {} columns from {}",
        table.len(),
        table.headers().len(),
        path
    );

    Ok(table)
}

/// Read a header row and every data row from `reader`.
pub fn read_table<R: Read>(reader: R) -> Result<TrafficTable, AnalysisError> {
    let mut csv_reader = build_csv_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result?;

        if record.len() > headers.len() {
            let line = record.position().map_or(0, |p| p.line());
            return Err(AnalysisError::Unexpected(format!(
                "Error tokenizing data. Expected {} fields in line {}, saw {}",
                headers.len(),
                line,
                record.len()
            )));
        }

        rows.push(record);
    }

    Ok(TrafficTable::new(headers, rows))
}
