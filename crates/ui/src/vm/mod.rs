mod dashboard_vm;
mod ranking_vm;

pub use dashboard_vm::{
    ClickTarget, DashboardIntent, DashboardOutcome, DashboardVm, HIDDEN_CLASS, ModalState,
    ModalVm, Region,
};
pub use ranking_vm::{RankingRowVm, map_ranking_rows};
