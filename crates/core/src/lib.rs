//! Shared domain types and the error taxonomy for the film catalog.

pub mod error;
pub mod types;
