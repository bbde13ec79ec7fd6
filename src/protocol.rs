use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "AIMCS Backend API";
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Current time as an ISO-8601 UTC string with millisecond precision.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Error response returned by the API.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of a 500 response.
#[derive(Debug, Serialize)]
pub struct FaultResponse {
    pub error: String,
    pub message: String,
}

/// Body of a 404 response.
#[derive(Debug, Serialize)]
pub struct NotFoundResponse {
    pub error: String,
    pub path: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub service: String,
    pub version: String,
}

/// Directory of the public endpoints.
#[derive(Debug, Serialize)]
pub struct ApiIndexResponse {
    pub message: String,
    pub version: String,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub health: String,
    pub test: String,
    pub models: String,
    pub chat: String,
}

#[derive(Debug, Serialize)]
pub struct TestResponse {
    pub message: String,
    pub timestamp: String,
    pub environment: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelStatus {
    Available,
    #[allow(dead_code)]
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub provider: &'static str,
    pub status: ModelStatus,
}

#[derive(Debug, Serialize)]
pub struct ModelsResponse<'a> {
    pub models: &'a [ModelDescriptor],
}

/// Chat body as sent by the client, before validation.
#[derive(Debug, Default, Deserialize)]
pub struct ChatPayload {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

/// Chat request with its required fields checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
    pub model: String,
}

impl ChatPayload {
    /// Require a non-empty message; fill in the default model when absent.
    /// Returns `None` when the message is missing.
    pub fn validate(self, default_model: &str) -> Option<ChatRequest> {
        let message = self.message.filter(|m| !m.is_empty())?;
        Some(ChatRequest {
            message,
            model: self.model.unwrap_or_else(|| default_model.to_string()),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub model: String,
    pub timestamp: String,
}
