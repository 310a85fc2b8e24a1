use std::sync::Arc;

use maestro_core::model::RankingEntry;
use storage::repository::RankingRepository;

use crate::error::RankingServiceError;

/// A leaderboard entry with its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingRow {
    /// 1-based position in source order.
    pub rank: u32,
    pub name: String,
    pub total_ap: i64,
    pub percent_of_goal: u32,
    pub goal_reached: bool,
}

impl RankingRow {
    #[must_use]
    pub fn from_entry(rank: u32, entry: RankingEntry) -> Self {
        let goal_reached = entry.goal_reached();
        Self {
            rank,
            goal_reached,
            name: entry.name,
            total_ap: entry.total_ap,
            percent_of_goal: entry.percent_of_goal,
        }
    }
}

/// Reads the leaderboard for the admin panel.
#[derive(Clone)]
pub struct RankingService {
    ranking: Arc<dyn RankingRepository>,
}

impl RankingService {
    #[must_use]
    pub fn new(ranking: Arc<dyn RankingRepository>) -> Self {
        Self { ranking }
    }

    /// List up to `limit` ranked rows.
    ///
    /// # Errors
    ///
    /// Returns `RankingServiceError::Storage` if the repository fails.
    pub async fn list_rows(&self, limit: u32) -> Result<Vec<RankingRow>, RankingServiceError> {
        let entries = self.ranking.list_ranking(limit).await?;
        Ok((1..)
            .zip(entries)
            .map(|(rank, entry)| RankingRow::from_entry(rank, entry))
            .collect())
    }
}
