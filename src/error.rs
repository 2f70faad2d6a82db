use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method Not Allowed".to_string(),
            ),
            Self::Config(e) => {
                tracing::error!("Config error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
            Self::Io(e) => {
                tracing::error!("I/O error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "detail": detail,
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    fn invalid_port() -> AppResult<()> {
        Err(ConfigError::Invalid {
            var: "API_PORT",
            value: "eighty".to_string(),
        })?
    }

    #[test]
    fn config_error_converts_through_question_mark() {
        let err = invalid_port().unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::Invalid { .. })));
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value for environment variable API_PORT: \"eighty\""
        );
    }

    #[test]
    fn status_codes_follow_variant() {
        assert_eq!(
            AppError::NotFound("Not Found".to_string())
                .into_response()
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::MethodNotAllowed.into_response().status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            invalid_port().unwrap_err().into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
