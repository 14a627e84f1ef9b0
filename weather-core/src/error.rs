use thiserror::Error;

/// Failures of a single city lookup, from input validation to normalization.
///
/// `Display` output is what the user sees in the error banner.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("City parameter is required")]
    EmptyCity,

    #[error("Invalid weather endpoint '{0}'")]
    InvalidEndpoint(String),

    #[error("Failed to send request to Visual Crossing: {0}")]
    Request(#[source] reqwest::Error),

    #[error("HTTP error! status: {status}")]
    Status { status: u16, body: String },

    #[error("Failed to parse Visual Crossing timeline JSON: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Weather data is unavailable for '{city}'")]
    Unavailable { city: String },
}
