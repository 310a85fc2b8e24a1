mod admin;
mod charts;
mod dashboard;
mod media;
mod modal;
mod progress;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use admin::AdminPanel;
pub use charts::{GoalChart, TrendChart};
pub use dashboard::DashboardView;
pub use media::MediaLibrary;
pub use modal::ContentModal;
pub use progress::ProgressPanel;
pub use state::{ViewError, ViewState, view_state_from_resource};
