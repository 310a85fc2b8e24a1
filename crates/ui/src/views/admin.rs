use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{RankingRowVm, map_ranking_rows};

const RANKING_LIMIT: u32 = 10;

fn row_class(goal_reached: bool) -> &'static str {
    if goal_reached { "goal-reached" } else { "" }
}

/// Leaderboard shown instead of the personal dashboard in admin mode.
#[component]
pub fn AdminPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let ranking = ctx.ranking();

    let resource = use_resource(move || {
        let ranking = ranking.clone();
        async move {
            let rows = ranking
                .list_rows(RANKING_LIMIT)
                .await
                .map_err(|_| ViewError::RankingUnavailable)?;
            Ok::<_, ViewError>(map_ranking_rows(&rows))
        }
    });

    let state = view_state_from_resource(resource, ViewError::RankingUnavailable);

    rsx! {
        section { class: "card ranking-card",
            h2 { "Member Ranking" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(rows) => rsx! {
                    RankingTable { rows }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn RankingTable(rows: Vec<RankingRowVm>) -> Element {
    rsx! {
        table { class: "ranking-table",
            thead {
                tr {
                    th { "Rank" }
                    th { "Name" }
                    th { "Total AP" }
                    th { "Goal %" }
                }
            }
            tbody { id: "ranking-list",
                if rows.is_empty() {
                    tr {
                        td { colspan: "4", "No members ranked yet." }
                    }
                }
                for row in rows {
                    tr { key: "{row.rank}", class: row_class(row.goal_reached),
                        td { "{row.rank}" }
                        td { "{row.name}" }
                        td { class: "ap-cell", "{row.total_ap}" }
                        td { "{row.percent}" }
                    }
                }
            }
        }
    }
}
