//! Handlers for the `/movies` resource.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_db::repositories::MovieRepo;

use super::parse_id;
use crate::error::{AppError, AppResult, StorageResultExt};
use crate::state::AppState;

/// Number of movies returned by `GET /movies/latest`.
pub const LATEST_LIMIT: i64 = 4;

/// GET /api/movies
///
/// List every movie, newest release first.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let movies = MovieRepo::list(&state.pool)
        .await
        .or_storage_error("Failed to fetch movies")?;
    Ok(Json(movies))
}

/// GET /api/movies/latest
pub async fn latest(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let movies = MovieRepo::list_latest(&state.pool, LATEST_LIMIT)
        .await
        .or_storage_error("Failed to fetch latest movies")?;
    Ok(Json(movies))
}

/// GET /api/movies/{id}
///
/// Get a single movie with its cast.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let not_found = || AppError::Core(CoreError::not_found("Movie", &id));

    let movie_id = parse_id(&id).ok_or_else(not_found)?;
    let movie = MovieRepo::find_by_id_with_cast(&state.pool, movie_id)
        .await
        .or_storage_error("Failed to fetch movie")?
        .ok_or_else(not_found)?;
    Ok(Json(movie))
}
