//! Error types for the baseball triples CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, TriplesError>;

#[derive(Error, Debug)]
pub enum TriplesError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("Invalid configuration in {path}: {message}")]
    Config { path: String, message: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Starting season {from} must be lower or equal than finishing season {to}")]
    InvalidSeasonRange { from: u16, to: u16 },

    #[error("Season {season} is outside the available range {min}-{max}")]
    SeasonOutOfBounds { season: u16, min: u16, max: u16 },

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Template \"{template}\" must contain a {{year}} placeholder")]
    InvalidTemplate { template: String },
}

impl TriplesError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        TriplesError::InvalidArgument {
            message: message.into(),
        }
    }
}
