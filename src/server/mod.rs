pub mod extract;
pub mod handlers;
pub mod logging;
pub mod middleware;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;

use crate::backend::Backend;
use crate::config::Config;

use self::handlers::AppState;

/// Build the axum router. Layers, outermost first: security headers, access
/// log, CORS, fault handling, panic catching, body limit.
pub fn build_router(config: Config, backend: Arc<dyn Backend>) -> Router {
    let body_limit = config.body_limit;
    let state = Arc::new(AppState { config, backend });

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api", get(handlers::index))
        .route("/api/test", get(handlers::api_test))
        .route("/api/models", get(handlers::models))
        .route("/api/chat", post(handlers::chat))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CatchPanicLayer::custom(middleware::panic_response))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::fault_middleware,
        ))
        .layer(middleware::cors_layer())
        .layer(axum_middleware::from_fn(logging::access_log))
        .layer(axum_middleware::from_fn(middleware::security_headers))
        .with_state(state)
}
