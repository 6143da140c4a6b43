pub mod actor;
pub mod cast;
pub mod movie;
pub mod search;
