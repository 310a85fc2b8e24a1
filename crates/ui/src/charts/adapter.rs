use tracing::{debug, warn};

use super::geometry::{Point, line_points, percent_of};
use super::style::{
    ACHIEVED_COLOR, GOAL_TITLE, REMAINING_COLOR, TREND_DATASET_LABEL, TREND_TITLE,
};

/// Named drawing region a chart is created on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSurface {
    pub id: &'static str,
    pub width: f32,
    pub height: f32,
}

impl ChartSurface {
    pub const TREND: Self = Self::new("growth-chart", 600.0, 300.0);
    pub const GOAL: Self = Self::new("goal-pie-chart", 240.0, 240.0);

    #[must_use]
    pub const fn new(id: &'static str, width: f32, height: f32) -> Self {
        Self { id, width, height }
    }
}

//
// ─── SLOT ──────────────────────────────────────────────────────────────────────
//

/// A chart that is created lazily, the first time a surface is available.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSlot<C> {
    Uninitialized,
    Ready(C),
}

impl<C> Default for ChartSlot<C> {
    fn default() -> Self {
        Self::Uninitialized
    }
}

impl<C> ChartSlot<C> {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    #[must_use]
    pub fn get(&self) -> Option<&C> {
        match self {
            Self::Ready(chart) => Some(chart),
            Self::Uninitialized => None,
        }
    }

    pub fn get_mut(&mut self) -> Option<&mut C> {
        match self {
            Self::Ready(chart) => Some(chart),
            Self::Uninitialized => None,
        }
    }

    /// Move to `Ready` by running `init`, unless the chart already exists.
    ///
    /// Returns `true` when this call created the chart.
    pub fn ensure_ready(&mut self, init: impl FnOnce() -> C) -> bool {
        match self {
            Self::Ready(_) => false,
            Self::Uninitialized => {
                *self = Self::Ready(init());
                true
            }
        }
    }
}

//
// ─── TREND ─────────────────────────────────────────────────────────────────────
//

/// Cumulative AP line, one point per recorded day.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    surface: ChartSurface,
    labels: Vec<String>,
    data: Vec<i64>,
}

impl LineChart {
    #[must_use]
    pub fn new(surface: ChartSurface, history: &[i64]) -> Self {
        let mut chart = Self {
            surface,
            labels: Vec::new(),
            data: Vec::new(),
        };
        chart.set_series(history);
        chart
    }

    /// Replace labels and data with `Day 1..Day N` and `history`.
    pub fn set_series(&mut self, history: &[i64]) {
        self.labels = (1..=history.len()).map(|day| format!("Day {day}")).collect();
        self.data = history.to_vec();
    }

    #[must_use]
    pub fn surface(&self) -> ChartSurface {
        self.surface
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        TREND_TITLE
    }

    #[must_use]
    pub fn dataset_label(&self) -> &'static str {
        TREND_DATASET_LABEL
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn data(&self) -> &[i64] {
        &self.data
    }

    #[must_use]
    pub fn points(&self, pad: f32) -> Vec<Point> {
        line_points(&self.data, self.surface.width, self.surface.height, pad)
    }
}

//
// ─── GOAL ──────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalSlice {
    pub label: &'static str,
    pub value: i64,
    pub color: &'static str,
}

/// Achieved-versus-remaining doughnut.
#[derive(Debug, Clone, PartialEq)]
pub struct DoughnutChart {
    surface: ChartSurface,
    slices: [GoalSlice; 2],
}

impl DoughnutChart {
    #[must_use]
    pub fn new(surface: ChartSurface, total: i64, remaining: i64) -> Self {
        Self {
            surface,
            slices: Self::split(total, remaining),
        }
    }

    /// Values are taken as given; callers clamp `remaining`.
    pub fn set_split(&mut self, total: i64, remaining: i64) {
        self.slices = Self::split(total, remaining);
    }

    fn split(total: i64, remaining: i64) -> [GoalSlice; 2] {
        [
            GoalSlice {
                label: "Achieved",
                value: total,
                color: ACHIEVED_COLOR,
            },
            GoalSlice {
                label: "Remaining",
                value: remaining,
                color: REMAINING_COLOR,
            },
        ]
    }

    #[must_use]
    pub fn surface(&self) -> ChartSurface {
        self.surface
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        GOAL_TITLE
    }

    #[must_use]
    pub fn slices(&self) -> &[GoalSlice; 2] {
        &self.slices
    }

    #[must_use]
    pub fn achieved_percent(&self) -> u32 {
        percent_of(self.slices[0].value, self.slices[1].value)
    }
}

//
// ─── ADAPTER ───────────────────────────────────────────────────────────────────
//

/// Owns both dashboard charts and the only way to change what they show.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartAdapter {
    trend: ChartSlot<LineChart>,
    goal: ChartSlot<DoughnutChart>,
}

impl ChartAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn trend(&self) -> Option<&LineChart> {
        self.trend.get()
    }

    #[must_use]
    pub fn goal(&self) -> Option<&DoughnutChart> {
        self.goal.get()
    }

    pub fn init_trend(&mut self, surface: ChartSurface, history: &[i64]) {
        if !self.trend.ensure_ready(|| LineChart::new(surface, history)) {
            self.refresh_trend(history);
        }
    }

    pub fn refresh_trend(&mut self, history: &[i64]) {
        match self.trend.get_mut() {
            Some(chart) => chart.set_series(history),
            None => warn!("trend chart refreshed before it was created"),
        }
    }

    /// Update the goal chart, creating it on `surface` if it does not exist yet.
    ///
    /// Without a surface an uncreated chart stays uncreated.
    pub fn init_or_refresh_goal(
        &mut self,
        surface: Option<ChartSurface>,
        total: i64,
        remaining: i64,
    ) {
        if let Some(chart) = self.goal.get_mut() {
            chart.set_split(total, remaining);
            return;
        }
        match surface {
            Some(surface) => {
                self.goal
                    .ensure_ready(|| DoughnutChart::new(surface, total, remaining));
            }
            None => debug!("goal chart has no surface yet"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HISTORY: [i64; 7] = [10, 45, 80, 120, 150, 180, 210];

    #[test]
    fn ensure_ready_initializes_once() {
        let mut slot: ChartSlot<u32> = ChartSlot::Uninitialized;
        let mut calls = 0;
        assert!(slot.ensure_ready(|| {
            calls += 1;
            1
        }));
        assert!(!slot.ensure_ready(|| {
            calls += 1;
            100
        }));
        assert_eq!(calls, 1);
        assert_eq!(slot, ChartSlot::Ready(1));
    }

    #[test]
    fn init_trend_labels_days() {
        let mut adapter = ChartAdapter::new();
        adapter.init_trend(ChartSurface::TREND, &HISTORY);

        let trend = adapter.trend().unwrap();
        assert_eq!(trend.labels().first().map(String::as_str), Some("Day 1"));
        assert_eq!(trend.labels().last().map(String::as_str), Some("Day 7"));
        assert_eq!(trend.data(), &HISTORY);
        assert_eq!(trend.title(), "AP Growth Trend");
    }

    #[test]
    fn refresh_trend_is_idempotent() {
        let mut adapter = ChartAdapter::new();
        adapter.init_trend(ChartSurface::TREND, &HISTORY);
        let longer = [10, 45, 80, 120, 150, 180, 210, 260];

        adapter.refresh_trend(&longer);
        let once = adapter.clone();
        adapter.refresh_trend(&longer);

        assert_eq!(adapter, once);
        assert_eq!(adapter.trend().unwrap().labels().len(), 8);
    }

    #[test]
    fn init_trend_again_refreshes_the_existing_chart() {
        let mut adapter = ChartAdapter::new();
        adapter.init_trend(ChartSurface::TREND, &HISTORY);

        let other = ChartSurface::new("elsewhere", 10.0, 10.0);
        adapter.init_trend(other, &[5, 15]);

        let trend = adapter.trend().unwrap();
        assert_eq!(trend.surface(), ChartSurface::TREND);
        assert_eq!(trend.data(), &[5, 15]);
        assert_eq!(trend.labels().len(), 2);
    }

    #[test]
    fn refresh_trend_before_init_is_a_no_op() {
        let mut adapter = ChartAdapter::new();
        adapter.refresh_trend(&HISTORY);
        assert!(adapter.trend().is_none());
    }

    #[test]
    fn goal_needs_a_surface_to_be_created() {
        let mut adapter = ChartAdapter::new();
        adapter.init_or_refresh_goal(None, 210, 290);
        assert!(adapter.goal().is_none());

        adapter.init_or_refresh_goal(Some(ChartSurface::GOAL), 210, 290);
        let goal = adapter.goal().unwrap();
        assert_eq!(goal.slices()[0].value, 210);
        assert_eq!(goal.slices()[1].value, 290);
        assert_eq!(goal.achieved_percent(), 42);
    }

    #[test]
    fn goal_refresh_reuses_existing_chart() {
        let mut adapter = ChartAdapter::new();
        adapter.init_or_refresh_goal(Some(ChartSurface::GOAL), 210, 290);

        let other = ChartSurface::new("elsewhere", 10.0, 10.0);
        adapter.init_or_refresh_goal(Some(other), 260, 240);

        let goal = adapter.goal().unwrap();
        assert_eq!(goal.surface(), ChartSurface::GOAL);
        assert_eq!(goal.slices()[0].value, 260);
        assert_eq!(goal.slices()[1].label, "Remaining");
        assert_eq!(goal.slices()[1].value, 240);
    }
}
