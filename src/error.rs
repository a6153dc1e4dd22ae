use crate::weather_data::error::{ParseError, QueryError};
use polars::error::PolarsError;
use serde::Deserialize;
use thiserror::Error;

/// Body IEM returns alongside an HTTP 404.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Error)]
#[error("{detail}")]
pub struct NotFoundError {
    pub detail: String,
    #[serde(default)]
    pub code: u16,
}

#[derive(Debug, Error)]
pub enum IemError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse JSON response from {url}")]
    JsonParse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Failed processing DataFrame: {0}")]
    Frame(#[from] PolarsError),
}
