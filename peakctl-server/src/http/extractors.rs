//! Custom Axum extractors

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::error::ApiError;

/// JSON object body extractor whose rejection is an [`ApiError`].
///
/// The body must be a JSON object; arrays and bare values are rejected
/// before the payload type sees them, since derived structs would otherwise
/// accept an array as positional fields. Every rejection is a 400.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(object) = Json::<Map<String, Value>>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::MalformedBody {
                reason: rejection.body_text(),
            })?;

        serde_json::from_value(Value::Object(object))
            .map(Self)
            .map_err(|e| ApiError::MalformedBody {
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};

    use crate::resources::products::Product;

    async fn extract(raw: &str) -> Result<Product, ApiError> {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(raw.to_owned()))
            .unwrap();

        JsonBody::<Product>::from_request(request, &())
            .await
            .map(|JsonBody(product)| product)
    }

    #[tokio::test]
    async fn positional_array_is_rejected() {
        let result = extract(r#"[10, "Jeans", "d", 45, "10 min", "Ropa"]"#).await;
        assert!(matches!(result, Err(ApiError::MalformedBody { .. })));
    }

    #[tokio::test]
    async fn bare_values_are_rejected() {
        for raw in [r#""texto""#, "42", "null", "true"] {
            let result = extract(raw).await;
            assert!(
                matches!(result, Err(ApiError::MalformedBody { .. })),
                "body {}",
                raw
            );
        }
    }

    #[tokio::test]
    async fn object_is_accepted() {
        let product = extract(r#"{"id_producto": 10, "categoria": "Ropa"}"#)
            .await
            .unwrap();
        assert_eq!(product.id_producto, Some(crate::models::Scalar::Int(10)));
    }
}
