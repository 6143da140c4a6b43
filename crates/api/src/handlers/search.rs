//! Handler for catalog search.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_db::models::search::SearchParams;
use catalog_db::repositories::SearchRepo;

use crate::error::{AppResult, StorageResultExt};
use crate::state::AppState;

/// GET /api/search?q=
///
/// Movies matching by title or genre and actors matching by name. A missing
/// or empty `q`, or a query string that does not parse (e.g. `q` given
/// twice), is rejected before the store is queried.
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unparseable search query string");
            SearchParams { q: None }
        }
    };

    let term = match params.q.as_deref() {
        Some(q) if !q.is_empty() => q,
        _ => return Err(CoreError::Validation("Search query is required".into()).into()),
    };

    let results = SearchRepo::search(&state.pool, term)
        .await
        .or_storage_error("Search failed")?;

    tracing::debug!(
        query = term,
        movies = results.movies.len(),
        actors = results.actors.len(),
        "Search executed",
    );

    Ok(Json(results))
}
