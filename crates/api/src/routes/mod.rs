pub mod actor;
pub mod health;
pub mod movie;
pub mod search;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies                 list (newest release first)
/// /movies/latest          four most recent releases
/// /movies/{id}            movie with cast
///
/// /actors                 list (by name)
/// /actors/popular         first six actors stored
/// /actors/{id}            actor with filmography
///
/// /search?q=              movies and actors matching q
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/movies", movie::router())
        .nest("/actors", actor::router())
        .nest("/search", search::router())
}
