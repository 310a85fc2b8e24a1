//! Palette and captions shared by both charts.

pub const ACCENT_GOLD: &str = "#D4AF37";
pub const ACHIEVED_COLOR: &str = ACCENT_GOLD;
pub const REMAINING_COLOR: &str = "rgba(255, 255, 255, 0.1)";
pub const TITLE_COLOR: &str = "#F7E7CE";
pub const LEGEND_COLOR: &str = "white";
pub const AXIS_TEXT_COLOR: &str = "rgba(255, 255, 255, 0.7)";
pub const GRID_COLOR: &str = "rgba(255, 255, 255, 0.1)";

pub const TREND_TITLE: &str = "AP Growth Trend";
pub const TREND_DATASET_LABEL: &str = "Cumulative AP";
pub const GOAL_TITLE: &str = "Goal Achievement By %";
