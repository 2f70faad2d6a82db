pub mod health;

use axum::{routing::get, Json, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::common::AppState;
use crate::error::AppError;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        health::readyz,
    ),
    components(
        schemas(
            health::HealthResponse,
            health::ReadinessResponse,
        )
    ),
    tags(
        (name = "health", description = "Liveness and readiness probes"),
    ),
    info(
        title = "Nereo ML Service",
        description = "Nereo machine-learning service",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub fn build_router(state: AppState) -> Router {
    tracing::debug!(deployment = ?state.config.deployment, "Building router");

    // Probe routes
    let health_routes = Router::new()
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readyz));

    // OpenAPI documentation
    let docs_routes = Router::new()
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
        .route("/openapi.json", get(openapi_json));

    // Combine all routes
    Router::new()
        .merge(health_routes)
        .merge(docs_routes)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
