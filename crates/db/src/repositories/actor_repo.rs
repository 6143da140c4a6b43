//! Repository for the `actors` table.

use catalog_core::types::DbId;
use sqlx::sqlite::SqliteExecutor;
use sqlx::SqlitePool;

use crate::models::actor::{Actor, ActorDetail, CreateActor, DEFAULT_ROLE};
use crate::models::cast::FilmographyEntry;

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, name, bio, date_of_birth, photo_url, role, created_at";

/// Column list for the `actors` table aliased as `a` (used in JOIN queries).
pub(crate) const JOINED_COLUMNS: &str =
    "a.id, a.name, a.bio, a.date_of_birth, a.photo_url, a.role, a.created_at";

/// Provides read and insert operations for actors.
pub struct ActorRepo;

impl ActorRepo {
    /// Insert a new actor, returning the created row.
    pub async fn create<'e>(
        executor: impl SqliteExecutor<'e>,
        input: &CreateActor,
    ) -> Result<Actor, sqlx::Error> {
        let query = format!(
            "INSERT INTO actors (name, bio, date_of_birth, photo_url, role) \
             VALUES (?, ?, ?, ?, COALESCE(?, '{DEFAULT_ROLE}')) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Actor>(&query)
            .bind(&input.name)
            .bind(&input.bio)
            .bind(input.date_of_birth)
            .bind(&input.photo_url)
            .bind(&input.role)
            .fetch_one(executor)
            .await
    }

    /// Find an actor by ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors WHERE id = ?");
        sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an actor by ID, enriched with their filmography.
    pub async fn find_by_id_with_movies(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<ActorDetail>, sqlx::Error> {
        let actor = Self::find_by_id(pool, id).await?;
        match actor {
            Some(actor) => {
                let movies = Self::get_movies(pool, actor.id).await?;
                Ok(Some(ActorDetail { actor, movies }))
            }
            None => Ok(None),
        }
    }

    /// List every actor alphabetically by name.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors ORDER BY name, id");
        sqlx::query_as::<_, Actor>(&query).fetch_all(pool).await
    }

    /// List the first `limit` actors in insertion order.
    ///
    /// There is no popularity signal in the schema yet, so "popular" means
    /// "first stored".
    pub async fn list_popular(pool: &SqlitePool, limit: i64) -> Result<Vec<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors ORDER BY id LIMIT ?");
        sqlx::query_as::<_, Actor>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Get the movies an actor appears in, each with the character they play.
    ///
    /// Ordered by cast edge ID.
    pub async fn get_movies(
        pool: &SqlitePool,
        actor_id: DbId,
    ) -> Result<Vec<FilmographyEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {movie_columns}, mc.character_name \
             FROM movies m \
             JOIN movie_cast mc ON mc.movie_id = m.id \
             WHERE mc.actor_id = ? \
             ORDER BY mc.id",
            movie_columns = super::movie_repo::JOINED_COLUMNS,
        );
        sqlx::query_as::<_, FilmographyEntry>(&query)
            .bind(actor_id)
            .fetch_all(pool)
            .await
    }
}
