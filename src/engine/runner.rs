use crate::{
    adapters::{
        csv_parser,
        output::{log_report, save_report},
    },
    engine::aggregator,
    error::AnalysisError,
    models::report::AnalysisReport,
};

/// Load, aggregate and report on one traffic file.
/// Nothing is written to `output_file` unless loading and aggregation both succeed.
pub fn analyze_traffic(
    input_file: &str,
    output_file: Option<&str>,
) -> Result<AnalysisReport, AnalysisError> {
    let table = csv_parser::load(input_file)?;

    let report = aggregator::aggregate(&table)?;

    log_report(&report);

    if let Some(path) = output_file {
        save_report(&report, path)?;
    }

    Ok(report)
}
