use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const UNIQUE_IPS: &str = "Unique IPs";
pub const TOTAL_DATA_TRANSFERRED: &str = "Total Data Transferred";

/// Two-statistic summary of one traffic file.
/// Field order is the column order of the saved CSV.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    #[serde(rename = "Unique IPs")]
    pub unique_ips: u64,

    #[serde(rename = "Total Data Transferred", with = "rust_decimal::serde::str")]
    pub total_data_transferred: Decimal,
}

impl AnalysisReport {
    /// Label/value pairs in report order.
    pub fn entries(&self) -> [(&'static str, String); 2] {
        [
            (UNIQUE_IPS, self.unique_ips.to_string()),
            (TOTAL_DATA_TRANSFERRED, self.total_data_transferred.to_string()),
        ]
    }
}
