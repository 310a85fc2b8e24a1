use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use maestro_core::model::ProgressState;
use services::{MediaService, RankingService};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::DashboardView;

#[derive(Clone)]
struct TestApp {
    progress: ProgressState,
    start_in_admin: bool,
    ranking: Arc<RankingService>,
    media: Arc<MediaService>,
}

impl UiApp for TestApp {
    fn initial_progress(&self) -> ProgressState {
        self.progress.clone()
    }

    fn start_in_admin(&self) -> bool {
        self.start_in_admin
    }

    fn slider_max(&self) -> u32 {
        1000
    }

    fn ranking(&self) -> Arc<RankingService> {
        Arc::clone(&self.ranking)
    }

    fn media(&self) -> Arc<MediaService> {
        Arc::clone(&self.media)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { DashboardView {} }
}

pub struct HarnessOptions {
    pub progress: ProgressState,
    pub start_in_admin: bool,
    pub storage: Storage,
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self {
            progress: ProgressState::seeded(),
            start_in_admin: false,
            storage: Storage::mock(),
        }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(options: HarnessOptions) -> ViewHarness {
    let app = Arc::new(TestApp {
        progress: options.progress,
        start_in_admin: options.start_in_admin,
        ranking: Arc::new(RankingService::new(Arc::clone(&options.storage.ranking))),
        media: Arc::new(MediaService::new(Arc::clone(&options.storage.media))),
    });

    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { app });
    ViewHarness { dom }
}

/// Opening tag of the element carrying `id`, for class assertions.
pub fn opening_tag<'a>(html: &'a str, id: &str) -> &'a str {
    let marker = format!("id=\"{id}\"");
    let at = html
        .find(&marker)
        .unwrap_or_else(|| panic!("missing element #{id} in {html}"));
    let start = html[..at].rfind('<').expect("tag start");
    let end = at + html[at..].find('>').expect("tag end");
    &html[start..=end]
}
