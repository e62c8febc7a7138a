//! Response DTOs for the relay server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for POST /storeURL
#[derive(Debug, Clone, Serialize)]
pub struct StoreUrlResponse {
    /// Success message
    pub message: String,
    /// The identity the URL was stored under
    #[serde(rename = "userId")]
    pub user_id: String,
}

impl StoreUrlResponse {
    /// Creates a new StoreUrlResponse
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            message: "URL stored successfully.".to_string(),
            user_id: user_id.into(),
        }
    }
}

/// Response body for GET /getURL
#[derive(Debug, Clone, Serialize)]
pub struct GetUrlResponse {
    /// The stored URL
    pub url: String,
}

impl GetUrlResponse {
    /// Creates a new GetUrlResponse
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Response body for the liveness check (GET /)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Status message
    pub message: String,
    /// Port the server was configured to listen on
    pub port: u16,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn running(port: u16) -> Self {
        Self {
            message: "Server is running.".to_string(),
            port,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
