/// Domain-level errors shared by the store and the HTTP layer.
///
/// Storage failures are not represented here; they stay as `sqlx::Error`
/// until the HTTP boundary attaches a client-facing message.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist. `key` is the raw identifier the
    /// caller asked for, which may not even be numeric.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}
