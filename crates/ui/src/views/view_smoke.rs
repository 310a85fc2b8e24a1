use std::sync::Arc;

use maestro_core::model::{ProgressState, RankingEntry};
use storage::repository::{RankingRepository, Storage, StorageError};

use super::ViewError;
use super::test_harness::{HarnessOptions, opening_tag, setup_view_harness};

async fn rendered(options: HarnessOptions) -> String {
    let mut harness = setup_view_harness(options);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    harness.render()
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_renders_seeded_charts() {
    let html = rendered(HarnessOptions::default()).await;

    assert!(html.contains("AP Growth Trend"), "missing trend title in {html}");
    assert!(html.contains("Goal Achievement By %"), "missing goal title in {html}");
    assert!(html.contains("Day 7"), "missing last day label in {html}");
    assert!(!html.contains("Day 8"), "unexpected extra day in {html}");
    assert!(html.contains("42%"), "missing achieved percent in {html}");
    assert!(html.contains("Remaining: 290 AP"), "missing remaining slice in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_reflects_configured_progress() {
    let progress = ProgressState::new(100, vec![25, 75]).expect("valid progress");
    let html = rendered(HarnessOptions {
        progress,
        ..HarnessOptions::default()
    })
    .await;

    assert!(html.contains("Day 2"), "missing day label in {html}");
    assert!(html.contains("Achieved: 75 AP"), "missing achieved slice in {html}");
    assert!(html.contains("Remaining: 25 AP"), "missing remaining slice in {html}");
    assert!(html.contains("75%"), "missing percent in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn user_region_is_shown_by_default() {
    let html = rendered(HarnessOptions::default()).await;

    assert!(!opening_tag(&html, "user-dashboard").contains("hidden"));
    assert!(opening_tag(&html, "admin-dashboard").contains("hidden"));
}

#[tokio::test(flavor = "current_thread")]
async fn admin_region_is_shown_when_starting_in_admin() {
    let html = rendered(HarnessOptions {
        start_in_admin: true,
        ..HarnessOptions::default()
    })
    .await;

    assert!(opening_tag(&html, "user-dashboard").contains("hidden"));
    assert!(!opening_tag(&html, "admin-dashboard").contains("hidden"));
}

#[tokio::test(flavor = "current_thread")]
async fn admin_panel_smoke_renders_ranking() {
    let html = rendered(HarnessOptions::default()).await;

    assert!(html.contains("Member Ranking"), "missing heading in {html}");
    assert!(html.contains("Kim Ji-soo"), "missing first member in {html}");
    assert!(html.contains("Song Hye-kyo"), "missing last member in {html}");
    assert!(html.contains("125%"), "missing percent in {html}");
    assert!(html.contains("goal-reached"), "missing goal marker in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn media_library_smoke_lists_items() {
    let html = rendered(HarnessOptions::default()).await;

    assert!(html.contains("Learning Library"), "missing heading in {html}");
    assert!(html.contains("AP Earning Guide"), "missing document in {html}");
    assert!(html.contains("media-video"), "missing video entry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn modal_starts_hidden_and_empty() {
    let html = rendered(HarnessOptions::default()).await;

    assert!(opening_tag(&html, "content-modal").contains("hidden"));
    assert!(!html.contains("Placeholder]"), "unexpected modal body in {html}");
}

struct FailingRanking;

#[async_trait::async_trait]
impl RankingRepository for FailingRanking {
    async fn list_ranking(&self, _limit: u32) -> Result<Vec<RankingEntry>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn admin_panel_smoke_renders_error_state() {
    let mut storage = Storage::mock();
    storage.ranking = Arc::new(FailingRanking);

    let html = rendered(HarnessOptions {
        storage,
        ..HarnessOptions::default()
    })
    .await;

    assert!(
        html.contains(ViewError::RankingUnavailable.message()),
        "missing error in {html}"
    );
    assert!(!html.contains("Kim Ji-soo"), "unexpected ranking in {html}");
}
