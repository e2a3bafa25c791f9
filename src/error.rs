use std::io;

use thiserror::Error;

/// Fatal conditions of a single analysis run. Each one ends the process.
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("The input file is empty.")]
    EmptyInput,

    #[error("Missing expected column in the data: '{0}'")]
    MissingColumn(String),

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl AnalysisError {
    /// Process exit code for this condition.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl From<csv::Error> for AnalysisError {
    fn from(err: csv::Error) -> Self {
        AnalysisError::Unexpected(err.to_string())
    }
}

impl From<io::Error> for AnalysisError {
    fn from(err: io::Error) -> Self {
        AnalysisError::Unexpected(err.to_string())
    }
}
