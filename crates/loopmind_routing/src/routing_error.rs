use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("No route found: {0}")]
    NoRoute(String),

    #[error("Invalid route data: {0}")]
    InvalidRoute(String),

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Routing request timed out after {0:?}")]
    Timeout(Duration),
}
