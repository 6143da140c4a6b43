//! Substring search across movies and actors.

use sqlx::SqlitePool;

use crate::models::actor::Actor;
use crate::models::movie::Movie;
use crate::models::search::SearchResults;

/// Provides `LIKE`-based search. Case sensitivity follows SQLite's `LIKE`,
/// which folds ASCII letters only.
pub struct SearchRepo;

impl SearchRepo {
    /// Run both the movie and the actor search for `term`.
    ///
    /// `term` is bound as a parameter; `%` and `_` inside it keep their
    /// `LIKE` meaning.
    pub async fn search(pool: &SqlitePool, term: &str) -> Result<SearchResults, sqlx::Error> {
        let pattern = format!("%{term}%");
        let movies = Self::search_movies(pool, &pattern).await?;
        let actors = Self::search_actors(pool, &pattern).await?;
        Ok(SearchResults { movies, actors })
    }

    /// Movies whose title or genre matches `pattern`.
    async fn search_movies(pool: &SqlitePool, pattern: &str) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {columns} FROM movies \
             WHERE title LIKE ?1 OR genre LIKE ?1 \
             ORDER BY id",
            columns = super::movie_repo::COLUMNS,
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    /// Actors whose name matches `pattern`.
    async fn search_actors(pool: &SqlitePool, pattern: &str) -> Result<Vec<Actor>, sqlx::Error> {
        let query = format!(
            "SELECT {columns} FROM actors WHERE name LIKE ? ORDER BY id",
            columns = super::actor_repo::COLUMNS,
        );
        sqlx::query_as::<_, Actor>(&query)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }
}
