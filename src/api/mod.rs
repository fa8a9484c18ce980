/// Backend access module
///
/// This module isolates network failure from rendering: every call returns
/// an `ApiError` value instead of letting transport or decode problems reach
/// the UI loop uncontrolled.

pub mod client;

pub use client::ApiClient;

use thiserror::Error;

/// Why a backend call failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a usable response
    #[error("request failed: {0}")]
    Network(String),
    /// The backend answered with a non-success status
    #[error("backend returned status {0}")]
    Status(u16),
    /// The response body did not match the expected shape
    #[error("malformed response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
