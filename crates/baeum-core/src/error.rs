use crate::catalog::CatalogError;
use crate::progress::StoreError;

/// Failures the engine recovers from without touching other users.
///
/// Input-format problems are not errors; handlers answer those with a
/// re-prompt and no mutation.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Catalog or store read failed; the event is safe to retry
    #[error("content source unavailable: {0}")]
    ContentUnavailable(String),

    /// Session points at content the catalog no longer resolves
    #[error("stale session state: {0}")]
    StaleState(String),
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        EngineError::ContentUnavailable(err.to_string())
    }
}

impl From<CatalogError> for EngineError {
    fn from(err: CatalogError) -> Self {
        EngineError::ContentUnavailable(err.to_string())
    }
}
