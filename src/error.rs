use reqwest::StatusCode;

/// Represents the possible errors that can occur when querying the TzKT API.
#[derive(Debug, thiserror::Error)]
pub enum TzktError {
    /// The request never produced a response (connection, DNS or timeout failure).
    #[error("Network request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The response body was not valid JSON or did not have the expected shape.
    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),
    /// The API answered with a non-successful status code.
    #[error("API request failed with status {status}: {message}")]
    Api {
        status: StatusCode,
        message: String,
    },
    #[error("URL parsing failed: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
