use maestro_core::model::{ProgressError, ProgressState};
use tracing::{debug, info};

/// Result of an accepted daily submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySubmission {
    pub increment: i64,
    pub total: i64,
    pub remaining: i64,
}

/// Read-only copy of the progress record, with derived values filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub target_ap: u32,
    pub daily_ap: i64,
    pub history: Vec<i64>,
    pub current_total: i64,
    pub remaining: i64,
}

/// Sole writer of the session's `ProgressState`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressService {
    state: ProgressState,
}

impl ProgressService {
    #[must_use]
    pub fn new(state: ProgressState) -> Self {
        Self { state }
    }

    #[must_use]
    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    #[must_use]
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            target_ap: self.state.target_ap(),
            daily_ap: self.state.daily_ap(),
            history: self.state.history().to_vec(),
            current_total: self.state.current_total(),
            remaining: self.state.remaining(),
        }
    }

    /// Replace the goal and return the new distance to it.
    pub fn set_target(&mut self, target_ap: u32) -> i64 {
        self.state.set_target(target_ap);
        debug!(target_ap, remaining = self.state.remaining(), "target updated");
        self.state.remaining()
    }

    /// Record the value typed into the daily field.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::NotANumber` when `raw` holds no integer. Nothing is
    /// recorded in that case.
    pub fn submit_daily(&mut self, raw: &str) -> Result<DailySubmission, ProgressError> {
        let total = self.state.record_daily_input(raw).inspect_err(|err| {
            debug!(%err, "daily submission discarded");
        })?;
        let submission = DailySubmission {
            increment: self.state.daily_ap(),
            total,
            remaining: self.state.remaining(),
        };
        info!(
            increment = submission.increment,
            total = submission.total,
            remaining = submission.remaining,
            "daily AP recorded"
        );
        Ok(submission)
    }
}
