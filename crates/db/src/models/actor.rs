//! Actor entity model and DTOs.

use catalog_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::cast::FilmographyEntry;

/// Role label stored when none is given on insert.
pub const DEFAULT_ROLE: &str = "Actor";

/// A row from the `actors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub name: String,
    pub bio: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub photo_url: Option<String>,
    pub role: Option<String>,
    pub created_at: Timestamp,
}

/// An actor together with the movies they appear in.
#[derive(Debug, Clone, Serialize)]
pub struct ActorDetail {
    #[serde(flatten)]
    pub actor: Actor,
    pub movies: Vec<FilmographyEntry>,
}

/// DTO for inserting a new actor. `role` falls back to [`DEFAULT_ROLE`].
#[derive(Debug, Clone, Deserialize)]
pub struct CreateActor {
    pub name: String,
    pub bio: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub photo_url: Option<String>,
    pub role: Option<String>,
}
