use reqwest::StatusCode;
use thiserror::Error;

/// Failures surfaced by the API client.
///
/// Every failure is logged once, tagged with the endpoint, and propagated
/// to the caller; there is no retry and no local recovery.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status. The message is the
    /// server-supplied `detail` when present, otherwise a fixed fallback,
    /// and `Display` is the message alone.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// The response body could not be decoded into the expected type.
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
}
