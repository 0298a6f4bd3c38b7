pub mod handlers;

use crate::core::{DecodeOptions, Normalizer, NormalizerOptions};
use crate::domain::ports::CatalogSource;
use crate::utils::error::GatewayError;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Collaborators shared across requests. Decode and normalization settings
/// are fixed at startup; nothing in here is mutable.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogSource>,
    pub decode_opts: Arc<DecodeOptions>,
    pub normalizer: Arc<Normalizer>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogSource>) -> Self {
        Self {
            catalog,
            decode_opts: Arc::new(DecodeOptions::default()),
            normalizer: Arc::new(Normalizer::new(NormalizerOptions::default())),
        }
    }
}

/// The JSON envelope every failing code path terminates in. No endpoint ever
/// returns raw XML or a non-JSON body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/api/bgg-plays", get(handlers::plays))
        .route("/api/bgg-stats", get(handlers::stats))
        .fallback(not_found)
        .layer(cors)
        .with_state(state)
}

async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Not Found".to_string(),
        }),
    )
        .into_response()
}

// Failures are logged with endpoint context where they happen (see the
// handlers); this impl only shapes them for the wire. Upstream detail never
// reaches the client.
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            GatewayError::Validation { message } => (StatusCode::BAD_REQUEST, message),
            GatewayError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            GatewayError::Upstream(_) | GatewayError::UpstreamStatus { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to reach the game catalog.".to_string(),
            ),
            GatewayError::Decode(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Received malformed data from the game catalog.".to_string(),
            ),
            GatewayError::Config { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal configuration error.".to_string(),
            ),
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}
