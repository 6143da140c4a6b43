//! Movie entity model and DTOs.

use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::cast::CastMember;

/// A row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i32>,
    /// Comma-joined categories, e.g. `"Action, Thriller"`.
    pub genre: Option<String>,
    pub director: Option<String>,
    /// Running time in minutes.
    pub duration: Option<i32>,
    /// 0-5 scale, may be fractional.
    pub rating: Option<f64>,
    pub poster_url: Option<String>,
    pub created_at: Timestamp,
}

/// A movie together with the actors who appear in it.
#[derive(Debug, Clone, Serialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: Movie,
    pub cast: Vec<CastMember>,
}

/// DTO for inserting a new movie.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i32>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub duration: Option<i32>,
    pub rating: Option<f64>,
    pub poster_url: Option<String>,
}
