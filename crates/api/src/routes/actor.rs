//! Route definitions for the `/actors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::actor;
use crate::state::AppState;

/// Actor routes mounted at `/actors`.
///
/// ```text
/// GET    /           -> list
/// GET    /popular    -> popular
/// GET    /{id}       -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(actor::list))
        .route("/popular", get(actor::popular))
        .route("/{id}", get(actor::get_by_id))
}
