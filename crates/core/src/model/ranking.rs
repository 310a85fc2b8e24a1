use serde::{Deserialize, Serialize};

/// One member's standing on the admin leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub name: String,
    pub total_ap: i64,
    pub percent_of_goal: u32,
}

impl RankingEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, total_ap: i64, percent_of_goal: u32) -> Self {
        Self {
            name: name.into(),
            total_ap,
            percent_of_goal,
        }
    }

    /// True once the member reached (or passed) their goal.
    #[must_use]
    pub fn goal_reached(&self) -> bool {
        self.percent_of_goal >= 100
    }
}
