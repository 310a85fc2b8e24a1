use dioxus::prelude::*;

/// Load failures a panel can report. The cause stays in the service log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    RankingUnavailable,
    MediaUnavailable,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::RankingUnavailable => "Ranking is unavailable right now. Please try again.",
            Self::MediaUnavailable => "The learning library could not be loaded.",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

/// Snapshot of a `use_resource` handle. A resource that finished without a value
/// reports `fallback`.
#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
    fallback: ViewError,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(fallback),
        },
    }
}
