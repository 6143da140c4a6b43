//! Handlers for the `/actors` resource.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_db::repositories::ActorRepo;

use super::parse_id;
use crate::error::{AppError, AppResult, StorageResultExt};
use crate::state::AppState;

/// Number of actors returned by `GET /actors/popular`.
pub const POPULAR_LIMIT: i64 = 6;

/// GET /api/actors
///
/// List every actor alphabetically.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let actors = ActorRepo::list(&state.pool)
        .await
        .or_storage_error("Failed to fetch actors")?;
    Ok(Json(actors))
}

/// GET /api/actors/popular
///
/// No ranking exists yet; this is the first [`POPULAR_LIMIT`] actors stored.
pub async fn popular(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let actors = ActorRepo::list_popular(&state.pool, POPULAR_LIMIT)
        .await
        .or_storage_error("Failed to fetch popular actors")?;
    Ok(Json(actors))
}

/// GET /api/actors/{id}
///
/// Get a single actor with the movies they appear in.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let not_found = || AppError::Core(CoreError::not_found("Actor", &id));

    let actor_id = parse_id(&id).ok_or_else(not_found)?;
    let actor = ActorRepo::find_by_id_with_movies(&state.pool, actor_id)
        .await
        .or_storage_error("Failed to fetch actor")?
        .ok_or_else(not_found)?;
    Ok(Json(actor))
}
