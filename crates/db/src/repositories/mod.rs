//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept the pool (or, for inserts, any SQLite executor) as the
//! first argument.

pub mod actor_repo;
pub mod cast_repo;
pub mod movie_repo;
pub mod search_repo;

pub use actor_repo::ActorRepo;
pub use cast_repo::CastRepo;
pub use movie_repo::MovieRepo;
pub use search_repo::SearchRepo;
