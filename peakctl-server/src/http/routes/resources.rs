//! Generic CRUD endpoints, mounted once per resource
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | /api/{path} | 200, array of records |
//! | GET | /api/{path}/{id} | 200, record |
//! | POST | /api/{path} | 201, created record plus `id` |
//! | PUT | /api/{path}/{id} | 200, `{message}` |
//! | DELETE | /api/{path}/{id} | 200, `{message}` |

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::credentials::CredentialHasher;
use crate::db::ResourceRepo;
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::models::{require_present, Scalar};
use crate::resources::{Changeset, Credential, Record, Resource};
use crate::state::AppState;

/// Success body for update and delete
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /api/{path}
async fn list<R: Resource>(
    State(state): State<AppState>,
) -> Result<Json<Vec<R::Record>>, ApiError> {
    let messages = R::DESCRIPTOR.messages;
    let records = ResourceRepo::<R>::new(state.executor())
        .list()
        .await
        .map_err(|e| ApiError::failed(messages.list_failed, e))?;

    Ok(Json(records))
}

/// GET /api/{path}/{id}
async fn fetch<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<R::Record>, ApiError> {
    let messages = R::DESCRIPTOR.messages;
    ResourceRepo::<R>::new(state.executor())
        .get(&id)
        .await
        .map_err(|e| ApiError::failed(messages.get_failed, e))?
        .map(Json)
        .ok_or(ApiError::NotFound {
            message: messages.not_found,
        })
}

/// POST /api/{path}
async fn create<R: Resource>(
    State(state): State<AppState>,
    JsonBody(record): JsonBody<R::Record>,
) -> Result<(StatusCode, Json<Map<String, Value>>), ApiError> {
    let d = R::DESCRIPTOR;
    let fields = record.into_fields();

    if let Err(e) = require_present(&fields, d.required) {
        tracing::debug!(resource = d.path, reason = %e, "Rejected create");
        return Err(ApiError::Invalid {
            message: d.messages.invalid,
        });
    }

    let mut values: Vec<(&'static str, Scalar)> = fields
        .into_iter()
        .filter_map(|(column, value)| value.map(|v| (column, v)))
        .collect();

    if let Some(credential) = d.credential {
        hash_credential(state.hasher(), credential, &mut values)
            .await
            .map_err(|e| ApiError::failed(d.messages.create_failed, e))?;
    }

    let outcome = ResourceRepo::<R>::new(state.executor())
        .insert(&values)
        .await
        .map_err(|e| ApiError::failed(d.messages.create_failed, e))?;

    let id = match outcome.last_insert_id {
        Some(generated) => Value::from(generated),
        None => values
            .iter()
            .find(|(column, _)| *column == d.identity)
            .map(|(_, v)| v.to_json())
            .unwrap_or(Value::Null),
    };

    let mut body = Map::new();
    body.insert("id".to_owned(), id);
    for (column, value) in &values {
        let key = match d.credential {
            Some(credential) if credential.column == *column => credential.response_field,
            _ => *column,
        };
        body.insert(key.to_owned(), value.to_json());
    }

    tracing::info!(resource = d.path, "Created record");
    Ok((StatusCode::CREATED, Json(body)))
}

/// PUT /api/{path}/{id}
///
/// Writes only the updatable columns present in the body. With nothing to
/// write, answers from an existence check instead.
async fn update<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(changes): JsonBody<R::Changes>,
) -> Result<Json<MessageResponse>, ApiError> {
    let d = R::DESCRIPTOR;
    let mut values: Vec<(&'static str, Scalar)> = changes
        .into_patches()
        .into_iter()
        .filter_map(|(column, patch)| patch.into_set().map(|v| (column, v)))
        .collect();

    if let Some(credential) = d.credential {
        // An empty or null credential means "leave it as it is".
        values.retain(|(column, v)| *column != credential.column || v.is_truthy());
        hash_credential(state.hasher(), credential, &mut values)
            .await
            .map_err(|e| ApiError::failed(d.messages.update_failed, e))?;
    }

    let repo = ResourceRepo::<R>::new(state.executor());
    let found = if values.is_empty() {
        repo.exists(&id).await
    } else {
        repo.update(&id, &values).await.map(|affected| affected > 0)
    }
    .map_err(|e| ApiError::failed(d.messages.update_failed, e))?;

    if !found {
        return Err(ApiError::NotFound {
            message: d.messages.update_not_found,
        });
    }

    Ok(Json(MessageResponse {
        message: d.messages.updated,
    }))
}

/// DELETE /api/{path}/{id}
async fn remove<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let messages = R::DESCRIPTOR.messages;
    let affected = ResourceRepo::<R>::new(state.executor())
        .delete(&id)
        .await
        .map_err(|e| ApiError::failed(messages.delete_failed, e))?;

    if affected == 0 {
        return Err(ApiError::NotFound {
            message: messages.delete_not_found,
        });
    }

    Ok(Json(MessageResponse {
        message: messages.deleted,
    }))
}

/// Replace the credential value in `values`, if present, with its hash.
async fn hash_credential(
    hasher: &dyn CredentialHasher,
    credential: Credential,
    values: &mut [(&'static str, Scalar)],
) -> Result<(), crate::credentials::HashError> {
    if let Some((_, value)) = values
        .iter_mut()
        .find(|(column, _)| *column == credential.column)
    {
        let hashed = hasher.hash(&value.to_string()).await?;
        *value = Scalar::Text(hashed);
    }
    Ok(())
}

/// Routes for one resource
pub fn router<R: Resource>() -> Router<AppState> {
    let base = format!("/api/{}", R::DESCRIPTOR.path);
    let item = format!("{}/{{id}}", base);

    Router::new()
        .route(&base, get(list::<R>).post(create::<R>))
        .route(&item, get(fetch::<R>).put(update::<R>).delete(remove::<R>))
}
