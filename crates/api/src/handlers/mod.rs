//! Request handlers for the catalog resources.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `catalog_db` and
//! tag storage failures with the route's client-facing message.

pub mod actor;
pub mod movie;
pub mod search;

use catalog_core::types::DbId;

/// Parse an `{id}` path segment.
///
/// A segment that is not an integer cannot match any row, so callers treat
/// `None` the same as a missing row.
pub(crate) fn parse_id(raw: &str) -> Option<DbId> {
    raw.parse().ok()
}
