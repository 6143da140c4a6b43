//! Film catalog API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes and
//! the middleware-wrapped application) so integration tests and the binary
//! entrypoint share them.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
