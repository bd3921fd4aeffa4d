use std::fmt;

use reqwest::StatusCode;

/// Why a single provider lookup did not produce a usable location.
///
/// Every variant is handled the same way by [`super::GeoClient::resolve`]:
/// the next provider is tried, and `Unknown` is reported once the list is
/// exhausted.
#[derive(Debug)]
pub enum GeoError {
    /// The request never produced a response (DNS, connect, timeout).
    Network(reqwest::Error),
    /// The provider answered with a non-success status.
    Status(StatusCode),
    /// The body was not a JSON object carrying a city or a country.
    Malformed(String),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "network failure: {e}"),
            Self::Status(status) => write!(f, "provider returned {status}"),
            Self::Malformed(reason) => write!(f, "malformed response: {reason}"),
        }
    }
}

impl std::error::Error for GeoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Network(e) => Some(e),
            Self::Status(_) | Self::Malformed(_) => None,
        }
    }
}

impl From<reqwest::Error> for GeoError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e)
    }
}

impl From<serde_json::Error> for GeoError {
    fn from(e: serde_json::Error) -> Self {
        Self::Malformed(e.to_string())
    }
}
