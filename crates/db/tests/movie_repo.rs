//! Repository tests for movies and their cast.

mod common;

use catalog_db::models::actor::CreateActor;
use catalog_db::models::cast::CreateCastEdge;
use catalog_db::models::movie::CreateMovie;
use catalog_db::repositories::{ActorRepo, CastRepo, MovieRepo};
use common::{empty_pool, seeded_pool};

fn new_movie(title: &str, release_year: i32) -> CreateMovie {
    CreateMovie {
        title: title.to_string(),
        description: None,
        release_year: Some(release_year),
        genre: None,
        director: None,
        duration: None,
        rating: None,
        poster_url: None,
    }
}

fn new_actor(name: &str) -> CreateActor {
    CreateActor {
        name: name.to_string(),
        bio: None,
        date_of_birth: None,
        photo_url: None,
        role: None,
    }
}

#[tokio::test]
async fn test_create_and_find_movie() {
    let pool = empty_pool().await;

    let input = CreateMovie {
        rating: Some(3.5),
        genre: Some("Drama".into()),
        ..new_movie("RRR", 2022)
    };
    let movie = MovieRepo::create(&pool, &input).await.unwrap();
    assert_eq!(movie.title, "RRR");
    assert_eq!(movie.release_year, Some(2022));
    assert_eq!(movie.rating, Some(3.5));

    let found = MovieRepo::find_by_id(&pool, movie.id).await.unwrap().unwrap();
    assert_eq!(found.id, movie.id);
    assert_eq!(found.genre.as_deref(), Some("Drama"));

    assert!(MovieRepo::find_by_id(&pool, movie.id + 1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_movie_ids_are_monotonic() {
    let pool = empty_pool().await;

    let first = MovieRepo::create(&pool, &new_movie("A", 2000)).await.unwrap();
    let second = MovieRepo::create(&pool, &new_movie("B", 2000)).await.unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_list_orders_newest_release_first() {
    let pool = seeded_pool().await;

    let movies = MovieRepo::list(&pool).await.unwrap();
    let titles: Vec<&str> = movies.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(
        titles,
        ["HanuMan", "Pushpa 2: The Rule", "Salaar: Part 1 - Ceasefire"]
    );
}

#[tokio::test]
async fn test_list_latest_truncates_in_same_order() {
    let pool = seeded_pool().await;
    MovieRepo::create(&pool, &new_movie("Old Classic", 1990)).await.unwrap();
    MovieRepo::create(&pool, &new_movie("Upcoming", 2025)).await.unwrap();

    let latest = MovieRepo::list_latest(&pool, 4).await.unwrap();
    let titles: Vec<&str> = latest.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(
        titles,
        ["Upcoming", "HanuMan", "Pushpa 2: The Rule", "Salaar: Part 1 - Ceasefire"]
    );

    let all = MovieRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 5);
    assert_eq!(all[4].title, "Old Classic");
}

#[tokio::test]
async fn test_list_latest_on_seed_returns_all_three() {
    let pool = seeded_pool().await;

    let latest = MovieRepo::list_latest(&pool, 4).await.unwrap();
    assert_eq!(latest.len(), 3);
    assert_eq!(latest[0].title, "HanuMan");
    assert_eq!(latest[0].release_year, Some(2024));
    assert!(latest[1..].iter().all(|m| m.release_year == Some(2023)));
}

#[tokio::test]
async fn test_cast_length_matches_edge_count_for_every_movie() {
    let pool = seeded_pool().await;

    for movie in MovieRepo::list(&pool).await.unwrap() {
        let detail = MovieRepo::find_by_id_with_cast(&pool, movie.id)
            .await
            .unwrap()
            .expect("listed movie must be found");
        let edges = CastRepo::list_for_movie(&pool, movie.id).await.unwrap();

        assert_eq!(detail.movie.id, movie.id);
        assert_eq!(detail.cast.len(), edges.len());
    }
}

#[tokio::test]
async fn test_cast_carries_actor_and_character() {
    let pool = seeded_pool().await;
    let pushpa = MovieRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .find(|m| m.title == "Pushpa 2: The Rule")
        .unwrap();

    let cast = MovieRepo::get_cast(&pool, pushpa.id).await.unwrap();
    assert_eq!(cast.len(), 1);
    assert_eq!(cast[0].actor.name, "Allu Arjun");
    assert_eq!(cast[0].character_name.as_deref(), Some("Pushpa Raj"));
}

#[tokio::test]
async fn test_cast_follows_edge_insertion_order() {
    let pool = empty_pool().await;
    let movie = MovieRepo::create(&pool, &new_movie("Ensemble", 2020)).await.unwrap();
    let zed = ActorRepo::create(&pool, &new_actor("Zed")).await.unwrap();
    let amy = ActorRepo::create(&pool, &new_actor("Amy")).await.unwrap();

    for (actor_id, character) in [(zed.id, "Lead"), (amy.id, "Sidekick")] {
        CastRepo::create(
            &pool,
            &CreateCastEdge {
                movie_id: movie.id,
                actor_id,
                character_name: Some(character.into()),
            },
        )
        .await
        .unwrap();
    }

    let cast = MovieRepo::get_cast(&pool, movie.id).await.unwrap();
    let names: Vec<&str> = cast.iter().map(|c| c.actor.name.as_str()).collect();
    assert_eq!(names, ["Zed", "Amy"]);
}

#[tokio::test]
async fn test_find_with_cast_missing_movie_is_none() {
    let pool = seeded_pool().await;
    assert!(MovieRepo::find_by_id_with_cast(&pool, 999_999)
        .await
        .unwrap()
        .is_none());
}
