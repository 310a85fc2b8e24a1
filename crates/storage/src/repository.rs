use async_trait::async_trait;
use maestro_core::model::{MediaItem, RankingEntry};
use std::sync::Arc;
use thiserror::Error;

use crate::mock::{mock_media, mock_ranking};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),
}

/// Read access to the member leaderboard.
#[async_trait]
pub trait RankingRepository: Send + Sync {
    /// List up to `limit` entries, best first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source cannot be read.
    async fn list_ranking(&self, limit: u32) -> Result<Vec<RankingEntry>, StorageError>;
}

/// Read access to the media library.
#[async_trait]
pub trait MediaRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the source cannot be read.
    async fn list_media(&self) -> Result<Vec<MediaItem>, StorageError>;
}

/// In-memory, read-only data source for tests and the desktop build.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    ranking: Arc<Vec<RankingEntry>>,
    media: Arc<Vec<MediaItem>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new(ranking: Vec<RankingEntry>, media: Vec<MediaItem>) -> Self {
        Self {
            ranking: Arc::new(ranking),
            media: Arc::new(media),
        }
    }

    /// Repository holding the built-in leaderboard and media library.
    #[must_use]
    pub fn mock() -> Self {
        Self::new(mock_ranking(), mock_media())
    }
}

#[async_trait]
impl RankingRepository for InMemoryRepository {
    async fn list_ranking(&self, limit: u32) -> Result<Vec<RankingEntry>, StorageError> {
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(self.ranking.iter().take(limit).cloned().collect())
    }
}

#[async_trait]
impl MediaRepository for InMemoryRepository {
    async fn list_media(&self) -> Result<Vec<MediaItem>, StorageError> {
        Ok(self.media.as_ref().clone())
    }
}

/// Aggregates the read repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub ranking: Arc<dyn RankingRepository>,
    pub media: Arc<dyn MediaRepository>,
}

impl Storage {
    #[must_use]
    pub fn from_repository(repo: InMemoryRepository) -> Self {
        let ranking: Arc<dyn RankingRepository> = Arc::new(repo.clone());
        let media: Arc<dyn MediaRepository> = Arc::new(repo);
        Self { ranking, media }
    }

    #[must_use]
    pub fn mock() -> Self {
        Self::from_repository(InMemoryRepository::mock())
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::from_repository(InMemoryRepository::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maestro_core::model::MediaKind;

    #[tokio::test]
    async fn mock_ranking_keeps_source_order() {
        let storage = Storage::mock();
        let rows = storage.ranking.list_ranking(10).await.unwrap();

        let names: Vec<_> = rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Kim Ji-soo",
                "Lee Min-ho",
                "Park Seo-jun",
                "Choi Woo-shik",
                "Song Hye-kyo"
            ]
        );
        assert_eq!(rows[0].total_ap, 1250);
        assert_eq!(rows[0].percent_of_goal, 125);
    }

    #[tokio::test]
    async fn list_ranking_honours_limit() {
        let repo = InMemoryRepository::mock();
        assert_eq!(repo.list_ranking(2).await.unwrap().len(), 2);
        assert!(repo.list_ranking(0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn mock_media_has_both_kinds() {
        let items = Storage::mock().media.list_media().await.unwrap();
        assert!(items.iter().any(|item| item.kind == MediaKind::Video));
        assert!(items.iter().any(|item| item.kind == MediaKind::Document));
    }

    #[tokio::test]
    async fn empty_storage_lists_nothing() {
        let storage = Storage::empty();
        assert!(storage.ranking.list_ranking(5).await.unwrap().is_empty());
        assert!(storage.media.list_media().await.unwrap().is_empty());
    }
}
