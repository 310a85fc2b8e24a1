//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;

/// Errors emitted by `RankingService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RankingServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `MediaService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MediaServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
