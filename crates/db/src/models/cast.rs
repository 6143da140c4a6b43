//! Cast edges: the `movie_cast` join between movies and actors.
//!
//! The joined views below are built from typed rows so that only the
//! columns of the joined entity plus `character_name` reach the client.

use catalog_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::actor::Actor;
use super::movie::Movie;

/// A row from the `movie_cast` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CastEdge {
    pub id: DbId,
    pub movie_id: Option<DbId>,
    pub actor_id: Option<DbId>,
    pub character_name: Option<String>,
}

/// An actor as they appear in one movie's cast.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CastMember {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub actor: Actor,
    pub character_name: Option<String>,
}

/// A movie as it appears in one actor's filmography.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FilmographyEntry {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub movie: Movie,
    pub character_name: Option<String>,
}

/// DTO for linking an actor to a movie.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCastEdge {
    pub movie_id: DbId,
    pub actor_id: DbId,
    pub character_name: Option<String>,
}
