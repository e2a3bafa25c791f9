use std::{fs::File, io::Write};

use log::info;

use crate::{error::AnalysisError, models::report::AnalysisReport};

/// Log the completed report, one line per entry.
pub fn log_report(report: &AnalysisReport) {
    info!("Analysis completed. Results:");
    for (label, value) in report.entries() {
        info!("{}: {}", label, value);
    }
}

/// Write the report to `path` as a single-row CSV, replacing any existing file.
pub fn save_report(report: &AnalysisReport, path: &str) -> Result<(), AnalysisError> {
    info!("Saving report to {}", path);

    let file = File::create(path)?;
    write_report(report, file)
}

pub fn write_report<W: Write>(report: &AnalysisReport, writer: W) -> Result<(), AnalysisError> {
    let mut builder = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    builder.serialize(report)?;
    builder.flush()?;

    Ok(())
}
