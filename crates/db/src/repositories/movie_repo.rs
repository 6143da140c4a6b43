//! Repository for the `movies` table.

use catalog_core::types::DbId;
use sqlx::sqlite::SqliteExecutor;
use sqlx::SqlitePool;

use crate::models::cast::CastMember;
use crate::models::movie::{CreateMovie, Movie, MovieDetail};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, title, description, release_year, genre, director, \
    duration, rating, poster_url, created_at";

/// Column list for the `movies` table aliased as `m` (used in JOIN queries).
pub(crate) const JOINED_COLUMNS: &str = "m.id, m.title, m.description, m.release_year, \
    m.genre, m.director, m.duration, m.rating, m.poster_url, m.created_at";

/// Newest release first. Movies sharing a year keep insertion order.
const NEWEST_FIRST: &str = "ORDER BY release_year DESC, id ASC";

/// Provides read and insert operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row.
    pub async fn create<'e>(
        executor: impl SqliteExecutor<'e>,
        input: &CreateMovie,
    ) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies \
                (title, description, release_year, genre, director, duration, rating, poster_url) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.release_year)
            .bind(&input.genre)
            .bind(&input.director)
            .bind(input.duration)
            .bind(input.rating)
            .bind(&input.poster_url)
            .fetch_one(executor)
            .await
    }

    /// Find a movie by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = ?");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a movie by ID, enriched with its cast.
    pub async fn find_by_id_with_cast(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<MovieDetail>, sqlx::Error> {
        let movie = Self::find_by_id(pool, id).await?;
        match movie {
            Some(movie) => {
                let cast = Self::get_cast(pool, movie.id).await?;
                Ok(Some(MovieDetail { movie, cast }))
            }
            None => Ok(None),
        }
    }

    /// List every movie, newest release first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies {NEWEST_FIRST}");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// List the `limit` most recent releases, using the same order as [`Self::list`].
    pub async fn list_latest(pool: &SqlitePool, limit: i64) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies {NEWEST_FIRST} LIMIT ?");
        sqlx::query_as::<_, Movie>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Count all movies.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM movies")
            .fetch_one(pool)
            .await
    }

    /// Get the actors appearing in a movie, each with the character they play.
    ///
    /// Ordered by cast edge ID, i.e. the order the edges were inserted.
    pub async fn get_cast(
        pool: &SqlitePool,
        movie_id: DbId,
    ) -> Result<Vec<CastMember>, sqlx::Error> {
        let query = format!(
            "SELECT {actor_columns}, mc.character_name \
             FROM actors a \
             JOIN movie_cast mc ON mc.actor_id = a.id \
             WHERE mc.movie_id = ? \
             ORDER BY mc.id",
            actor_columns = super::actor_repo::JOINED_COLUMNS,
        );
        sqlx::query_as::<_, CastMember>(&query)
            .bind(movie_id)
            .fetch_all(pool)
            .await
    }
}
