mod adapter;
mod geometry;
mod style;

pub use adapter::{ChartAdapter, ChartSlot, ChartSurface, DoughnutChart, GoalSlice, LineChart};
pub use geometry::{ArcSegment, Point, doughnut_arcs, line_points, percent_of, polyline_attr};
pub use style::{
    ACHIEVED_COLOR, ACCENT_GOLD, AXIS_TEXT_COLOR, GOAL_TITLE, GRID_COLOR, LEGEND_COLOR,
    REMAINING_COLOR, TITLE_COLOR, TREND_DATASET_LABEL, TREND_TITLE,
};
