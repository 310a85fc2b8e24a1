use thiserror::Error;

use super::input::parse_ap_input;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("progress history cannot be empty")]
    EmptyHistory,

    #[error("daily AP value is not a number: {raw:?}")]
    NotANumber { raw: String },
}

//
// ─── SEED ──────────────────────────────────────────────────────────────────────
//

/// Goal used when nothing else is configured.
pub const SEED_TARGET_AP: u32 = 500;

/// Cumulative totals the dashboard starts with.
pub const SEED_HISTORY: [i64; 7] = [10, 45, 80, 120, 150, 180, 210];

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// In-memory progress record for one session.
///
/// `history` holds cumulative AP totals, one per recorded day. It is never empty;
/// its last element is the current total. The distance to the goal is derived on
/// every read and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressState {
    target_ap: u32,
    daily_ap: i64,
    history: Vec<i64>,
}

impl ProgressState {
    /// Creates a progress record from a goal and a seed history.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::EmptyHistory` if `history` has no entries.
    pub fn new(target_ap: u32, history: Vec<i64>) -> Result<Self, ProgressError> {
        if history.is_empty() {
            return Err(ProgressError::EmptyHistory);
        }
        Ok(Self {
            target_ap,
            daily_ap: 0,
            history,
        })
    }

    /// The record the dashboard boots with: goal 500 and a week of mock history.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            target_ap: SEED_TARGET_AP,
            daily_ap: 0,
            history: SEED_HISTORY.to_vec(),
        }
    }

    #[must_use]
    pub fn target_ap(&self) -> u32 {
        self.target_ap
    }

    /// Last submitted daily increment, `0` before the first submission.
    #[must_use]
    pub fn daily_ap(&self) -> i64 {
        self.daily_ap
    }

    #[must_use]
    pub fn history(&self) -> &[i64] {
        &self.history
    }

    /// Replaces the goal. Range checks belong to the caller.
    pub fn set_target(&mut self, value: u32) {
        self.target_ap = value;
    }

    #[must_use]
    pub fn current_total(&self) -> i64 {
        // Constructors reject empty histories and nothing removes entries.
        self.history.last().copied().unwrap_or_default()
    }

    /// AP still missing to reach the goal, clamped at zero.
    #[must_use]
    pub fn remaining(&self) -> i64 {
        i64::from(self.target_ap)
            .saturating_sub(self.current_total())
            .max(0)
    }

    /// Appends `current_total + increment` to the history and returns the new total.
    ///
    /// Negative increments are accepted.
    pub fn record_daily(&mut self, increment: i64) -> i64 {
        let total = self.current_total().saturating_add(increment);
        self.daily_ap = increment;
        self.history.push(total);
        total
    }

    /// Parses free-text input and records it.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::NotANumber` when `raw` holds no integer; the record
    /// is left untouched in that case.
    pub fn record_daily_input(&mut self, raw: &str) -> Result<i64, ProgressError> {
        let increment = parse_ap_input(raw)?;
        Ok(self.record_daily(increment))
    }
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::seeded()
    }
}
