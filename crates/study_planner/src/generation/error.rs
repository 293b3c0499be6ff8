//! Error types for timetable generation.

use thiserror::Error;

/// Errors that can occur while asking the model for a timetable.
#[derive(Debug, Error, Clone)]
pub enum GenerationError {
    /// No API key configured
    #[error("API key not configured. Please set GEMINI_API_KEY environment variable.")]
    MissingApiKey,

    /// The description was empty or whitespace
    #[error("Please enter a description for your study plan.")]
    MissingInput,

    /// Network/HTTP request failed
    #[error("Network error: {message}")]
    Network { message: String },

    /// Upstream answered with a non-success status
    #[error("API request failed with status: {status}")]
    RequestFailed { status: u16 },

    /// Upstream body was not the expected JSON envelope
    #[error("Unexpected response: {message}")]
    UnexpectedResponse { message: String },

    /// The envelope carried no text part
    #[error("No text returned from model")]
    NoText,

    /// The model's text was not valid JSON
    #[error("Could not interpret model output: {message}")]
    MalformedOutput { message: String },

    /// The model's JSON was null or a bare scalar
    #[error("Invalid JSON structure returned")]
    InvalidStructure,

    /// Endpoint URL could not be built
    #[error("URL error: {message}")]
    UrlError { message: String },
}

impl GenerationError {
    /// Returns true if this error is caused by server configuration rather
    /// than the request or the upstream service.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            GenerationError::MissingApiKey | GenerationError::UrlError { .. }
        )
    }

    /// Returns true if this error was raised before any network call.
    pub fn is_before_request(&self) -> bool {
        matches!(
            self,
            GenerationError::MissingApiKey
                | GenerationError::MissingInput
                | GenerationError::UrlError { .. }
        )
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        GenerationError::Network {
            message: err.to_string(),
        }
    }
}

impl From<url::ParseError> for GenerationError {
    fn from(err: url::ParseError) -> Self {
        GenerationError::UrlError {
            message: err.to_string(),
        }
    }
}
