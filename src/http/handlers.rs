//! Route handlers
//!
//! Each handler resolves the tenant collection from the request `Host`
//! header and performs exactly one store call. Store failures surface as
//! 502; replaces and deletes of missing identifiers stay no-ops so delete
//! keeps its idempotency.

use axum::body::Bytes;
use axum::extract::{Host, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Local;

use crate::observability::Event;
use crate::store::{Record, RecordId};

use super::errors::{ApiError, ApiResult};
use super::response::Empty;
use super::server::AppState;

fn parse_record(body: &[u8]) -> ApiResult<Record> {
    serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))
}

fn parse_id(raw: &str) -> ApiResult<RecordId> {
    RecordId::parse(raw).map_err(|_| ApiError::InvalidId(raw.to_string()))
}

/// GET /records
pub async fn list(
    State(state): State<AppState>,
    Host(host): Host,
) -> ApiResult<Json<Vec<Record>>> {
    let collection = state.tenants.collection_for(&host);
    let records = state.store.list(&collection).await?;
    Ok(Json(records))
}

/// GET /records/:id
pub async fn get(
    State(state): State<AppState>,
    Host(host): Host,
    Path(id): Path<String>,
) -> ApiResult<Json<Record>> {
    let collection = state.tenants.collection_for(&host);
    let id = parse_id(&id)?;
    let record = state
        .store
        .get(&collection, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound(id.to_hex()))?;
    Ok(Json(record))
}

/// POST /records
pub async fn create(
    State(state): State<AppState>,
    Host(host): Host,
    body: Bytes,
) -> ApiResult<Json<Record>> {
    let collection = state.tenants.collection_for(&host);
    let mut record = parse_record(&body)?;

    // the store assigns identifiers; whatever the client sent is discarded
    record.id = None;
    record.pubdate = Some(Local::now());

    let id = state.store.insert(&collection, &record).await?;
    record.id = Some(id);
    Ok(Json(record))
}

/// POST /records/:id
///
/// Full-document replace keyed by the body's identifier, falling back to the
/// path identifier when the body carries none.
pub async fn update(
    State(state): State<AppState>,
    Host(host): Host,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Empty>> {
    let collection = state.tenants.collection_for(&host);
    let record = parse_record(&body)?;
    let id = match record.id {
        Some(id) => id,
        None => parse_id(&id)?,
    };

    let replaced = state.store.replace(&collection, &id, &record).await?;
    if !replaced {
        Event::warn("record.update_missed")
            .field("collection", &collection)
            .field("id", id)
            .emit();
    }
    Ok(Json(Empty {}))
}

/// DELETE /records/:id
pub async fn remove(
    State(state): State<AppState>,
    Host(host): Host,
    Path(id): Path<String>,
) -> ApiResult<Json<Empty>> {
    let collection = state.tenants.collection_for(&host);
    let id = parse_id(&id)?;

    let removed = state.store.remove(&collection, &id).await?;
    if !removed {
        Event::warn("record.delete_missed")
            .field("collection", &collection)
            .field("id", id)
            .emit();
    }
    Ok(Json(Empty {}))
}

/// OPTIONS /records and /records/:id
///
/// The CORS wrapper supplies the headers; the body is the empty object.
pub async fn preflight() -> Json<Empty> {
    Json(Empty {})
}

/// GET /
pub async fn root_redirect() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/static/")]).into_response()
}
