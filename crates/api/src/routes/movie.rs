//! Route definitions for the `/movies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// Movie routes mounted at `/movies`.
///
/// ```text
/// GET    /           -> list
/// GET    /latest     -> latest
/// GET    /{id}       -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movie::list))
        .route("/latest", get(movie::latest))
        .route("/{id}", get(movie::get_by_id))
}
