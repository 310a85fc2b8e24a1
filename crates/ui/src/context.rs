use std::sync::Arc;

use maestro_core::model::ProgressState;
use services::{MediaService, ProgressService, RankingService};

use crate::vm::DashboardVm;

pub trait UiApp: Send + Sync {
    fn initial_progress(&self) -> ProgressState;
    fn start_in_admin(&self) -> bool;
    fn slider_max(&self) -> u32;

    fn ranking(&self) -> Arc<RankingService>;
    fn media(&self) -> Arc<MediaService>;
}

#[derive(Clone)]
pub struct AppContext {
    initial_progress: ProgressState,
    start_in_admin: bool,
    slider_max: u32,

    ranking: Arc<RankingService>,
    media: Arc<MediaService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            initial_progress: app.initial_progress(),
            start_in_admin: app.start_in_admin(),
            slider_max: app.slider_max(),
            ranking: app.ranking(),
            media: app.media(),
        }
    }

    /// A fresh controller seeded with the configured progress record.
    #[must_use]
    pub fn dashboard_vm(&self) -> DashboardVm {
        DashboardVm::new(
            ProgressService::new(self.initial_progress.clone()),
            self.slider_max,
            self.start_in_admin,
        )
    }

    #[must_use]
    pub fn ranking(&self) -> Arc<RankingService> {
        Arc::clone(&self.ranking)
    }

    #[must_use]
    pub fn media(&self) -> Arc<MediaService> {
        Arc::clone(&self.media)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
