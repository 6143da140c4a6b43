//! Substring search over movies and actors.

use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::movie::Movie;

/// Query string for `GET /api/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Two independent result sets for one query.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    /// Movies whose title or genre contains the query.
    pub movies: Vec<Movie>,
    /// Actors whose name contains the query.
    pub actors: Vec<Actor>,
}
