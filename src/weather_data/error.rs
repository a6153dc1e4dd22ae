use std::num::ParseFloatError;
use thiserror::Error;

/// Raised by [`crate::WeatherQuery::params`] before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("WeatherQuery: at least one station is required")]
    MissingStations,

    #[error("WeatherQuery: at least one data field is required")]
    MissingFields,
}

/// The conversion that failed for a single cell.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    #[error(transparent)]
    Float(#[from] ParseFloatError),

    #[error(transparent)]
    Time(#[from] chrono::ParseError),
}

/// Failure while turning a delimited ASOS payload into observations.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to parse column '{column}' at line {line}: '{value}'")]
    Field {
        column: &'static str,
        line: u64,
        value: String,
        #[source]
        source: ValueError,
    },

    #[error("Row at line {line} has {len} cells but column '{column}' is at index {index}")]
    RowShape {
        line: u64,
        column: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Header names none of the known columns: '{header}'")]
    NoKnownColumns { header: String },

    #[error("Malformed delimited payload")]
    Csv(#[from] csv::Error),
}
