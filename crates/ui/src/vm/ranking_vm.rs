use services::RankingRow;

/// UI-ready leaderboard row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankingRowVm {
    pub rank: u32,
    pub name: String,
    pub total_ap: String,
    pub percent: String,
    pub goal_reached: bool,
}

#[must_use]
pub fn map_ranking_rows(rows: &[RankingRow]) -> Vec<RankingRowVm> {
    rows.iter()
        .map(|row| RankingRowVm {
            rank: row.rank,
            name: row.name.clone(),
            total_ap: row.total_ap.to_string(),
            percent: format!("{}%", row.percent_of_goal),
            goal_reached: row.goal_reached,
        })
        .collect()
}
