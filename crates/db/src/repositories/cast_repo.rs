//! Repository for the `movie_cast` join table.

use catalog_core::types::DbId;
use sqlx::sqlite::SqliteExecutor;
use sqlx::SqlitePool;

use crate::models::cast::{CastEdge, CreateCastEdge};

const COLUMNS: &str = "id, movie_id, actor_id, character_name";

/// Provides insert and lookup operations for cast edges.
pub struct CastRepo;

impl CastRepo {
    /// Link an actor to a movie. Both IDs must reference existing rows.
    pub async fn create<'e>(
        executor: impl SqliteExecutor<'e>,
        input: &CreateCastEdge,
    ) -> Result<CastEdge, sqlx::Error> {
        let query = format!(
            "INSERT INTO movie_cast (movie_id, actor_id, character_name) \
             VALUES (?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CastEdge>(&query)
            .bind(input.movie_id)
            .bind(input.actor_id)
            .bind(&input.character_name)
            .fetch_one(executor)
            .await
    }

    /// List the cast edges of a movie, in insertion order.
    ///
    /// Raw edge rows, without the joined actor columns. The joined view in
    /// [`super::MovieRepo::get_cast`] must always have one entry per row
    /// returned here.
    pub async fn list_for_movie(
        pool: &SqlitePool,
        movie_id: DbId,
    ) -> Result<Vec<CastEdge>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie_cast WHERE movie_id = ? ORDER BY id");
        sqlx::query_as::<_, CastEdge>(&query)
            .bind(movie_id)
            .fetch_all(pool)
            .await
    }

    /// List the cast edges of an actor, in insertion order.
    ///
    /// Raw edge rows; [`super::ActorRepo::get_movies`] has one entry per row
    /// returned here, carrying the same `character_name`.
    pub async fn list_for_actor(
        pool: &SqlitePool,
        actor_id: DbId,
    ) -> Result<Vec<CastEdge>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie_cast WHERE actor_id = ? ORDER BY id");
        sqlx::query_as::<_, CastEdge>(&query)
            .bind(actor_id)
            .fetch_all(pool)
            .await
    }
}
