use std::sync::Arc;

use async_trait::async_trait;
use maestro_core::model::{MediaKind, ProgressState, RankingEntry};
use services::{MediaService, ProgressService, RankingService, RankingServiceError};
use storage::repository::{RankingRepository, Storage, StorageError};

#[test]
fn progress_flow_submit_then_retarget() {
    let mut progress = ProgressService::new(ProgressState::seeded());
    assert_eq!(progress.snapshot().remaining, 290);

    let accepted = progress.submit_daily("50").expect("numeric input");
    assert_eq!(accepted.total, 260);
    assert_eq!(accepted.remaining, 240);
    assert_eq!(
        progress.snapshot().history,
        vec![10, 45, 80, 120, 150, 180, 210, 260]
    );

    // Malformed input is reported and leaves the record alone.
    assert!(progress.submit_daily("abc").is_err());
    assert_eq!(progress.snapshot().history.len(), 8);

    assert_eq!(progress.set_target(200), 0);
    assert_eq!(progress.set_target(300), 40);
}

#[tokio::test]
async fn mock_storage_feeds_ranking_and_media() {
    let storage = Storage::mock();
    let ranking = RankingService::new(Arc::clone(&storage.ranking));
    let media = MediaService::new(Arc::clone(&storage.media));

    let rows = ranking.list_rows(3).await.expect("list rows");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2].rank, 3);
    assert_eq!(rows[2].name, "Park Seo-jun");

    let items = media.list_items().await.expect("list media");
    assert!(items.iter().any(|item| item.kind == MediaKind::Video));
}

struct FailingRanking;

#[async_trait]
impl RankingRepository for FailingRanking {
    async fn list_ranking(&self, _limit: u32) -> Result<Vec<RankingEntry>, StorageError> {
        Err(StorageError::Connection("offline".to_string()))
    }
}

#[tokio::test]
async fn ranking_surfaces_storage_errors() {
    let ranking = RankingService::new(Arc::new(FailingRanking));
    let err = ranking.list_rows(5).await.unwrap_err();
    assert!(matches!(
        err,
        RankingServiceError::Storage(StorageError::Connection(_))
    ));
}
