use clap::Parser;

/// Analyze network traffic patterns.
#[derive(Parser, Debug)]
#[command(name = "traffic_analyzer", version)]
pub struct Args {
    /// Path to the CSV file containing network traffic data.
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: String,

    /// Path to save the analysis report (optional).
    #[arg(long = "output_file", value_name = "OUTPUT_FILE")]
    pub output_file: Option<String>,
}

impl Args {
    /// The output path, treating an empty value the same as no value.
    pub fn output_file(&self) -> Option<&str> {
        self.output_file.as_deref().filter(|path| !path.is_empty())
    }
}

/// Parse command-line arguments for the input and optional output CSV paths
pub fn parse_cli_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_only() {
        let args = Args::try_parse_from(["traffic_analyzer", "traffic.csv"]).unwrap();
        assert_eq!(args.input_file, "traffic.csv");
        assert_eq!(args.output_file(), None);
    }

    #[test]
    fn test_with_output_file() {
        let args = Args::try_parse_from([
            "traffic_analyzer",
            "traffic.csv",
            "--output_file",
            "report.csv",
        ])
        .unwrap();
        assert_eq!(args.output_file(), Some("report.csv"));
    }

    #[test]
    fn test_empty_output_file_means_none() {
        let args =
            Args::try_parse_from(["traffic_analyzer", "traffic.csv", "--output_file", ""]).unwrap();
        assert_eq!(args.output_file(), None);
    }

    #[test]
    fn test_input_file_is_required() {
        assert!(Args::try_parse_from(["traffic_analyzer"]).is_err());
    }
}
