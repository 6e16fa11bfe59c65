//! API error types with IntoResponse
//!
//! Every error becomes `{"error": "<message>"}`. Messages are the fixed
//! per-resource strings; the underlying cause of a failure is logged and
//! never sent to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Message returned when a request body is not a flat JSON object.
pub const MALFORMED_BODY: &str = "Cuerpo de la solicitud inválido";

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Required field missing on create (400)
    Invalid { message: &'static str },

    /// Body could not be parsed (400)
    MalformedBody { reason: String },

    /// No row matched the identity (404)
    NotFound { message: &'static str },

    /// Persistence or hashing failed (500, logged)
    Failed {
        message: &'static str,
        source: BoxError,
    },
}

impl ApiError {
    pub fn failed(message: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Failed {
            message,
            source: source.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Invalid { .. } | Self::MalformedBody { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Failed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Invalid { message } | Self::NotFound { message } => *message,
            Self::MalformedBody { reason } => {
                tracing::debug!(%reason, "Rejected request body");
                MALFORMED_BODY
            }
            Self::Failed { message, source } => {
                // Log the actual error, return the generic message
                tracing::error!(error = %source, "{}", message);
                *message
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn invalid_is_400() {
        let (status, body) = body_of(ApiError::Invalid {
            message: "Datos requeridos",
        })
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Datos requeridos" }));
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let (status, body) = body_of(ApiError::NotFound {
            message: "inventario no encontrada",
        })
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "inventario no encontrada" }));
    }

    #[tokio::test]
    async fn failure_hides_its_cause() {
        let (status, body) = body_of(ApiError::failed(
            "Error al crear la venta",
            "duplicate entry '1' for key 'PRIMARY'",
        ))
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Error al crear la venta" }));
    }

    #[tokio::test]
    async fn malformed_body_is_400() {
        let (status, body) = body_of(ApiError::MalformedBody {
            reason: "EOF while parsing".into(),
        })
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": MALFORMED_BODY }));
    }
}
