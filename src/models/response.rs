use serde::{Deserialize, Serialize};

/// Error body returned for 4xx/5xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Short error label (e.g., "Not Found").
    pub error: String,
    /// Human-readable explanation.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        ErrorResponse {
            error: error.into(),
            message: message.into(),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "OK".
    pub status: String,
    /// ISO 8601 UTC time the check was answered.
    pub timestamp: String,
    /// Hosting surface that answered (e.g., "Vercel Serverless").
    pub environment: String,
}

/// Body of `GET /` — static description of the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub endpoints: EndpointList,
    pub documentation: String,
}

/// Endpoints advertised by [`ServiceInfo`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointList {
    pub track: String,
    pub health: String,
}
