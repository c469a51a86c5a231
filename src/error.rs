use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while loading, scaling, bookmarking or uploading recipes
#[derive(Error, Debug)]
pub enum RecipeError {
    /// The request did not settle before the timer fired
    #[error("Request took too long! Timeout after {} second(s)", .0.as_secs_f64())]
    Timeout(Duration),

    /// Transport failure (DNS, connection refused, TLS, ...)
    #[error("Network error: {0}")]
    NetworkError(#[source] reqwest::Error),

    /// The API answered with a non-2xx status
    #[error("{message} ({status})")]
    HttpStatusError { status: u16, message: String },

    /// Malformed JSON or unexpected response shape
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Bad recipe upload payload
    #[error("{0}")]
    ValidationError(String),

    /// Servings must be a positive number on both sides of a rescale
    #[error("Invalid servings: {0} (must be at least 1)")]
    InvalidServings(u32),

    /// Bookmark file could not be read or written
    #[error("Storage error: {0}")]
    StorageError(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl RecipeError {
    /// Whether this is the timeout side of the request race
    pub fn is_timeout(&self) -> bool {
        matches!(self, RecipeError::Timeout(_))
    }
}

impl From<serde_json::Error> for RecipeError {
    fn from(err: serde_json::Error) -> Self {
        RecipeError::ParseError(err.to_string())
    }
}

impl From<reqwest::Error> for RecipeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RecipeError::ParseError(err.to_string())
        } else {
            RecipeError::NetworkError(err)
        }
    }
}
