use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, routing::any, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::db::Database;
use crate::envelope::{error_response, JsonResponse, SuccessEnvelope};
use crate::middleware::cors_middleware;

pub struct AppState {
    /// Opened at startup when a database URL is configured
    pub db: Option<Arc<Database>>,
}

impl AppState {
    pub fn new(db: Option<Arc<Database>>) -> Self {
        Self { db }
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/v1/readiness", any(readiness))
        .route("/v1/err", any(error_probe))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(cors_middleware)),
        )
        .with_state(state)
}

// Route handlers
pub async fn readiness() -> impl IntoResponse {
    JsonResponse::new(StatusCode::OK, SuccessEnvelope::ok())
}

// Status stays 200 even though the payload is an error
pub async fn error_probe() -> impl IntoResponse {
    error_response(StatusCode::OK, "Internal Server Error")
}
