//! Demonstration dataset inserted into an empty catalog.

use chrono::NaiveDate;

use crate::models::actor::CreateActor;
use crate::models::cast::CreateCastEdge;
use crate::models::movie::CreateMovie;
use crate::repositories::{ActorRepo, CastRepo, MovieRepo};
use crate::DbPool;

/// A cast edge in the seed set, expressed as indices into
/// [`sample_movies`] and [`sample_actors`].
struct SeedRole {
    movie: usize,
    actor: usize,
    character_name: &'static str,
}

const SEED_ROLES: [SeedRole; 3] = [
    SeedRole {
        movie: 0,
        actor: 1,
        character_name: "Pushpa Raj",
    },
    SeedRole {
        movie: 1,
        actor: 0,
        character_name: "Salaar",
    },
    SeedRole {
        movie: 2,
        actor: 2,
        character_name: "Hanuman",
    },
];

/// Populate the catalog with the demonstration dataset if it has no movies.
///
/// Returns `true` when rows were inserted, `false` when the catalog already
/// had data. All inserts happen in one transaction.
pub async fn seed_if_empty(pool: &DbPool) -> Result<bool, sqlx::Error> {
    if MovieRepo::count(pool).await? > 0 {
        tracing::debug!("Catalog already populated, skipping seed");
        return Ok(false);
    }

    let mut tx = pool.begin().await?;

    let mut movie_ids = Vec::new();
    for input in sample_movies() {
        let movie = MovieRepo::create(&mut *tx, &input).await?;
        movie_ids.push(movie.id);
    }

    let mut actor_ids = Vec::new();
    for input in sample_actors() {
        let actor = ActorRepo::create(&mut *tx, &input).await?;
        actor_ids.push(actor.id);
    }

    for role in &SEED_ROLES {
        let edge = CreateCastEdge {
            movie_id: movie_ids[role.movie],
            actor_id: actor_ids[role.actor],
            character_name: Some(role.character_name.to_string()),
        };
        CastRepo::create(&mut *tx, &edge).await?;
    }

    tx.commit().await?;

    tracing::info!(
        movies = movie_ids.len(),
        actors = actor_ids.len(),
        cast = SEED_ROLES.len(),
        "Seeded catalog with sample data",
    );
    Ok(true)
}

fn sample_movies() -> Vec<CreateMovie> {
    vec![
        CreateMovie {
            title: "Pushpa 2: The Rule".into(),
            description: Some(
                "The continuation of Pushpa Raj's story in the red sandalwood smuggling world."
                    .into(),
            ),
            release_year: Some(2023),
            genre: Some("Action, Thriller".into()),
            director: Some("Sukumar".into()),
            duration: Some(180),
            rating: Some(4.5),
            poster_url: Some(
                "https://via.placeholder.com/300x400/ff9933/ffffff?text=Pushpa+2".into(),
            ),
        },
        CreateMovie {
            title: "Salaar: Part 1 - Ceasefire".into(),
            description: Some(
                "A story of two friends who become bitter enemies in the criminal underworld."
                    .into(),
            ),
            release_year: Some(2023),
            genre: Some("Action, Drama".into()),
            director: Some("Prashanth Neel".into()),
            duration: Some(175),
            rating: Some(4.2),
            poster_url: Some("https://via.placeholder.com/300x400/138808/ffffff?text=Salaar".into()),
        },
        CreateMovie {
            title: "HanuMan".into(),
            description: Some(
                "A superhero film based on Hindu mythology featuring Lord Hanuman.".into(),
            ),
            release_year: Some(2024),
            genre: Some("Superhero, Action".into()),
            director: Some("Prasanth Varma".into()),
            duration: Some(158),
            rating: Some(4.7),
            poster_url: Some(
                "https://via.placeholder.com/300x400/3333ff/ffffff?text=HanuMan".into(),
            ),
        },
    ]
}

fn sample_actors() -> Vec<CreateActor> {
    vec![
        CreateActor {
            name: "Prabhas".into(),
            bio: Some("Known as the Rebel Star, famous for Baahubali series.".into()),
            date_of_birth: NaiveDate::from_ymd_opt(1979, 10, 23),
            photo_url: Some(
                "https://via.placeholder.com/200x250/cccccc/333333?text=Prabhas".into(),
            ),
            role: Some("Actor".into()),
        },
        CreateActor {
            name: "Allu Arjun".into(),
            bio: Some("Stylish Star known for his unique dance moves and acting.".into()),
            date_of_birth: NaiveDate::from_ymd_opt(1982, 4, 8),
            photo_url: Some(
                "https://via.placeholder.com/200x250/cccccc/333333?text=Allu+Arjun".into(),
            ),
            role: Some("Actor".into()),
        },
        CreateActor {
            name: "Ram Charan".into(),
            bio: Some("Megastar known for his powerful performances.".into()),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 3, 27),
            photo_url: Some(
                "https://via.placeholder.com/200x250/cccccc/333333?text=Ram+Charan".into(),
            ),
            role: Some("Actor".into()),
        },
    ]
}
