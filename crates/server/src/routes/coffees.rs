use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::Coffee;
use tracing::info;

use crate::errors::ApiError;
use crate::observability::record_operation;
use crate::state::AppState;

/// GET /coffees
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Coffee>>, ApiError> {
    record_operation("list");
    Ok(Json(state.coffees.list_all().await?))
}

/// GET /coffees/:id — an unknown id answers 200 with a `null` body, not 404.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Coffee>>, ApiError> {
    record_operation("get");
    Ok(Json(state.coffees.get_by_id(&id).await?))
}

/// POST /coffees
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<Coffee>,
) -> Result<Json<Coffee>, ApiError> {
    record_operation("create");
    let created = state.coffees.create(input).await?;
    Ok(Json(created))
}

/// PUT /coffees/:id — 201 when the id was new, 200 when it was replaced.
///
/// The response echoes the request body verbatim, including a body `id` that
/// differs from the path; the stored record is always keyed by the path id.
pub async fn upsert(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<Coffee>,
) -> Result<(StatusCode, Json<Coffee>), ApiError> {
    record_operation("upsert");
    if input.has_id() && input.id != id {
        info!(path_id = %id, body_id = %input.id, "upsert body id differs from path id");
    }
    let (_, created) = state.coffees.upsert(&id, input.clone()).await?;
    let status = if created { StatusCode::CREATED } else { StatusCode::OK };
    Ok((status, Json(input)))
}

/// DELETE /coffees/:id — always 204, whether or not the id existed.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    record_operation("delete");
    state.coffees.delete_by_id(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
