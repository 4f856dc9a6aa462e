//! MBTA client error types.

use super::convert::ConversionError;

/// Errors from fetching or decoding API data.
#[derive(Debug, thiserror::Error)]
pub enum MbtaError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Rate limited by the API
    #[error("rate limited by MBTA API")]
    RateLimited,

    /// Response body was not the JSON we expected
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Well-formed JSON that doesn't describe valid routes or stops
    #[error("invalid API data: {0}")]
    Conversion(#[from] ConversionError),

    /// Offline fixture data could not be read
    #[error("fixture error: {message}")]
    Fixture { message: String },
}
