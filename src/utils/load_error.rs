use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Why a stops file could not be loaded. Any of these aborts the whole load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("stops file missing column {column}")]
    MissingColumn { column: &'static str },
    #[error("line {line}: row has no value for column {column}")]
    MissingField { line: u64, column: &'static str },
    #[error("line {line}: {column} value {value:?} is not an integer: {source}")]
    InvalidInteger {
        line: u64,
        column: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("line {line}: {column} value {value:?} is not a number: {source}")]
    InvalidFloat {
        line: u64,
        column: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}
