use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::value::service::ValueService;

use crate::observability;
use crate::openapi;

pub mod values;

/// Shared handler state: the value service over whichever repository the
/// process was started with.
#[derive(Clone)]
pub struct ServerState {
    pub values: Arc<ValueService>,
}

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "OK")))]
pub async fn hello() -> &'static str {
    "Hello World!"
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

pub async fn metrics() -> (axum::http::StatusCode, String) {
    observability::encode_metrics()
}

/// Build the full application router.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/", get(hello))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/values", get(values::list).post(values::create))
        .route(
            "/values/:id",
            get(values::get_one).patch(values::update).delete(values::delete_one),
        )
        .with_state(state);

    api.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
