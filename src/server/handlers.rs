use std::sync::Arc;

use axum::extract::State;
use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::backend::Backend;
use crate::config::Config;
use crate::error::ApiError;
use crate::protocol::{
    timestamp, ApiIndexResponse, ChatPayload, ChatResponse, Endpoints, HealthResponse,
    ModelsResponse, TestResponse, API_VERSION, SERVICE_NAME,
};

use super::extract::Payload;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub backend: Arc<dyn Backend>,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: timestamp(),
        service: SERVICE_NAME.to_string(),
        version: API_VERSION.to_string(),
    })
}

/// Directory of available endpoints.
pub async fn index() -> Json<ApiIndexResponse> {
    Json(ApiIndexResponse {
        message: format!("Welcome to {SERVICE_NAME}"),
        version: API_VERSION.to_string(),
        endpoints: Endpoints {
            health: "/health".to_string(),
            test: "/api/test".to_string(),
            models: "/api/models".to_string(),
            chat: "/api/chat".to_string(),
        },
    })
}

pub async fn api_test(State(state): State<Arc<AppState>>) -> Json<TestResponse> {
    Json(TestResponse {
        message: "Backend API is working!".to_string(),
        timestamp: timestamp(),
        environment: state.config.environment.clone(),
    })
}

/// Models endpoint: static list from the backend.
pub async fn models(State(state): State<Arc<AppState>>) -> Response {
    Json(ModelsResponse {
        models: state.backend.models(),
    })
    .into_response()
}

/// Chat endpoint: validates the body and returns the backend reply.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Payload(payload): Payload<ChatPayload>,
) -> Result<Json<ChatResponse>, ApiError> {
    let request = payload
        .validate(&state.config.default_model)
        .ok_or(ApiError::MissingMessage)?;

    let response = state
        .backend
        .reply(&request)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(ChatResponse {
        response,
        model: request.model,
        timestamp: timestamp(),
    }))
}

/// Fallback for unmatched paths and unlisted methods on known paths.
pub async fn not_found(uri: Uri) -> ApiError {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    ApiError::NotFound(path.to_string())
}
