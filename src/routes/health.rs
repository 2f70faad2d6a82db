use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"ok"`
    #[schema(example = "ok")]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ReadinessResponse {
    /// Always `"ready"`
    #[schema(example = "ready")]
    pub status: String,
}

/// Liveness check endpoint
///
/// Returns 200 OK while the process is running.
/// Suitable for Kubernetes liveness probes.
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse),
    ),
    tag = "health"
)]
pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Readiness check endpoint
///
/// Returns 200 OK once the service accepts traffic.
#[utoipa::path(
    get,
    path = "/readyz",
    responses(
        (status = 200, description = "Service is ready", body = ReadinessResponse),
    ),
    tag = "health"
)]
pub async fn readyz() -> Json<ReadinessResponse> {
    Json(ReadinessResponse {
        status: "ready".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn healthz_returns_ok() {
        let Json(body) = healthz().await;
        assert_eq!(body.status, "ok");
    }

    #[tokio::test]
    async fn readyz_returns_ready() {
        let Json(body) = readyz().await;
        assert_eq!(body.status, "ready");
    }
}
