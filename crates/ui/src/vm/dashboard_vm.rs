use maestro_core::model::{MediaKind, ProgressError};
use services::{ProgressService, ProgressSnapshot};
use tracing::debug;

use crate::charts::{ChartAdapter, ChartSurface};

/// Class that hides a dashboard region or the modal overlay.
pub const HIDDEN_CLASS: &str = "hidden";

/// The two mutually exclusive dashboard regions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    User,
    Admin,
}

/// Where a click on the modal overlay landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    Content,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Hidden,
    Open { kind: MediaKind, title: String },
}

/// Placeholder body of the media modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalVm {
    pub title: String,
    pub placeholder: String,
    pub note: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardIntent {
    SliderInput(String),
    DailyInputChanged(String),
    SubmitDaily,
    DismissNotice,
    ToggleAdmin(bool),
    OpenModal { kind: MediaKind, title: String },
    CloseModal,
    OverlayClick(ClickTarget),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardOutcome {
    Updated,
    Ignored,
    /// The daily value did not parse; nothing changed.
    Rejected(ProgressError),
}

/// Dashboard controller: the one place user interactions change state.
///
/// Owns the progress record (through `ProgressService`) and both charts, so every
/// mutation and the redraw it implies happen in the same synchronous call.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardVm {
    progress: ProgressService,
    charts: ChartAdapter,
    slider_max: u32,
    target_label: String,
    daily_input: String,
    notice: Option<String>,
    admin_mode: bool,
    modal: ModalState,
}

impl DashboardVm {
    #[must_use]
    pub fn new(progress: ProgressService, slider_max: u32, start_in_admin: bool) -> Self {
        let snapshot = progress.snapshot();
        let mut charts = ChartAdapter::new();
        charts.init_trend(ChartSurface::TREND, &snapshot.history);
        charts.init_or_refresh_goal(
            Some(ChartSurface::GOAL),
            snapshot.current_total,
            snapshot.remaining,
        );

        Self {
            progress,
            charts,
            slider_max,
            target_label: snapshot.target_ap.to_string(),
            daily_input: String::new(),
            notice: None,
            admin_mode: start_in_admin,
            modal: ModalState::Hidden,
        }
    }

    pub fn apply(&mut self, intent: DashboardIntent) -> DashboardOutcome {
        match intent {
            DashboardIntent::SliderInput(raw) => self.on_slider(&raw),
            DashboardIntent::DailyInputChanged(value) => {
                self.daily_input = value;
                DashboardOutcome::Updated
            }
            DashboardIntent::SubmitDaily => self.on_submit(),
            DashboardIntent::DismissNotice => {
                self.notice = None;
                DashboardOutcome::Updated
            }
            DashboardIntent::ToggleAdmin(checked) => {
                debug!(admin = checked, "admin view toggled");
                self.admin_mode = checked;
                DashboardOutcome::Updated
            }
            DashboardIntent::OpenModal { kind, title } => {
                debug!(kind = kind.tag(), %title, "modal opened");
                self.modal = ModalState::Open { kind, title };
                DashboardOutcome::Updated
            }
            DashboardIntent::CloseModal => self.close_modal(),
            DashboardIntent::OverlayClick(target) => {
                if target == ClickTarget::Backdrop {
                    self.close_modal()
                } else {
                    DashboardOutcome::Ignored
                }
            }
        }
    }

    fn on_slider(&mut self, raw: &str) -> DashboardOutcome {
        let Ok(target) = raw.trim().parse::<u32>() else {
            debug!(raw, "slider value ignored");
            return DashboardOutcome::Ignored;
        };
        self.target_label = target.to_string();
        let remaining = self.progress.set_target(target);
        self.charts.init_or_refresh_goal(
            None,
            self.progress.state().current_total(),
            remaining,
        );
        DashboardOutcome::Updated
    }

    fn on_submit(&mut self) -> DashboardOutcome {
        match self.progress.submit_daily(&self.daily_input) {
            Ok(submission) => {
                self.daily_input.clear();
                self.notice = Some(format!("Updated! Added {} AP.", submission.increment));
                self.refresh_charts();
                DashboardOutcome::Updated
            }
            Err(err) => DashboardOutcome::Rejected(err),
        }
    }

    fn close_modal(&mut self) -> DashboardOutcome {
        self.modal = ModalState::Hidden;
        DashboardOutcome::Updated
    }

    fn refresh_charts(&mut self) {
        let state = self.progress.state();
        self.charts.refresh_trend(state.history());
        self.charts
            .init_or_refresh_goal(None, state.current_total(), state.remaining());
    }

    #[must_use]
    pub fn snapshot(&self) -> ProgressSnapshot {
        self.progress.snapshot()
    }

    #[must_use]
    pub fn charts(&self) -> &ChartAdapter {
        &self.charts
    }

    #[must_use]
    pub fn slider_max(&self) -> u32 {
        self.slider_max
    }

    #[must_use]
    pub fn target_label(&self) -> &str {
        &self.target_label
    }

    #[must_use]
    pub fn daily_input(&self) -> &str {
        &self.daily_input
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    #[must_use]
    pub fn admin_mode(&self) -> bool {
        self.admin_mode
    }

    #[must_use]
    pub fn is_visible(&self, region: Region) -> bool {
        match region {
            Region::User => !self.admin_mode,
            Region::Admin => self.admin_mode,
        }
    }

    /// Extra class for a region: exactly one of the two is hidden at any time.
    #[must_use]
    pub fn region_class(&self, region: Region) -> &'static str {
        if self.is_visible(region) {
            ""
        } else {
            HIDDEN_CLASS
        }
    }

    #[must_use]
    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    #[must_use]
    pub fn modal_view(&self) -> Option<ModalVm> {
        match &self.modal {
            ModalState::Hidden => None,
            ModalState::Open { kind, title } => Some(ModalVm {
                title: title.clone(),
                placeholder: format!("[{} Placeholder]", kind.viewer_label()),
                note: "Content would load here.",
            }),
        }
    }
}
