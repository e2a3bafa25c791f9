use std::{collections::HashSet, str::FromStr};

use log::info;
use rust_decimal::Decimal;

use crate::{
    error::AnalysisError,
    models::{report::AnalysisReport, table::TrafficTable},
};

pub const SOURCE_IP: &str = "source_ip";
pub const DATA_TRANSFERRED: &str = "data_transferred";

/// Compute the distinct source IP count and the total data transferred.
pub fn aggregate(table: &TrafficTable) -> Result<AnalysisReport, AnalysisError> {
    info!("Performing analysis...");

    let source_ips = table
        .column(SOURCE_IP)
        .ok_or_else(|| AnalysisError::MissingColumn(SOURCE_IP.to_string()))?;
    let data_transferred = table
        .column(DATA_TRANSFERRED)
        .ok_or_else(|| AnalysisError::MissingColumn(DATA_TRANSFERRED.to_string()))?;

    let unique_ips = source_ips
        .values()
        .map(|(_, ip)| ip)
        .collect::<HashSet<_>>()
        .len() as u64;

    let mut total = Decimal::ZERO;
    for (line, raw) in data_transferred.values() {
        let amount = parse_amount(raw).map_err(|e| match e {
            AmountError::NotANumber => AnalysisError::Unexpected(format!(
                "could not convert '{}' to a number in column '{}' (line {})",
                raw, DATA_TRANSFERRED, line
            )),
            AmountError::OutOfRange => AnalysisError::Unexpected(format!(
                "value '{}' in column '{}' (line {}) is outside the exact decimal range",
                raw, DATA_TRANSFERRED, line
            )),
        })?;

        total = total.checked_add(amount).ok_or_else(|| {
            AnalysisError::Unexpected(format!(
                "overflow while summing column '{}' (line {})",
                DATA_TRANSFERRED, line
            ))
        })?;
    }

    Ok(AnalysisReport {
        unique_ips,
        total_data_transferred: total.normalize(),
    })
}

#[derive(Debug, PartialEq)]
enum AmountError {
    NotANumber,
    /// A finite number that `Decimal` cannot hold: magnitude at or above 2^96
    /// or more than 28 fractional digits.
    OutOfRange,
}

/// Parse a numeric field, accepting plain and scientific notation.
fn parse_amount(raw: &str) -> Result<Decimal, AmountError> {
    let raw = raw.trim();
    if let Ok(amount) = Decimal::from_str(raw).or_else(|_| Decimal::from_scientific(raw)) {
        return Ok(amount);
    }

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Err(AmountError::OutOfRange),
        _ => Err(AmountError::NotANumber),
    }
}
