use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and storage failures tagged with
/// the message the calling route reports.
/// Implements [`IntoResponse`] to produce `{"error": message}` bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `catalog_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage failure. `message` is the fixed text shown to the client;
    /// the underlying error is only logged.
    #[error("{message}: {source}")]
    Storage {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Attach a client-facing message to a storage result.
pub trait StorageResultExt<T> {
    fn or_storage_error(self, message: &'static str) -> AppResult<T>;
}

impl<T> StorageResultExt<T> for Result<T, sqlx::Error> {
    fn or_storage_error(self, message: &'static str) -> AppResult<T> {
        self.map_err(|source| AppError::Storage { message, source })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, key } => {
                    tracing::debug!(entity, key = %key, "Entity not found");
                    (StatusCode::NOT_FOUND, core.to_string())
                }
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            },

            // --- Storage errors ---
            AppError::Storage { message, source } => {
                tracing::error!(error = %source, "{message}");
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}
