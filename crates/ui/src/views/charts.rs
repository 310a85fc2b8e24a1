use dioxus::prelude::*;

use crate::charts::{
    ACCENT_GOLD, AXIS_TEXT_COLOR, DoughnutChart, GRID_COLOR, LEGEND_COLOR, LineChart,
    TITLE_COLOR, doughnut_arcs, polyline_attr,
};

const TREND_PAD: f32 = 28.0;
const GRID_LINES: u8 = 4;
const RING_STROKE: f32 = 28.0;

#[derive(Clone, Debug, PartialEq)]
struct Marker {
    x: String,
    y: String,
    label: String,
    value: i64,
}

#[derive(Clone, Debug, PartialEq)]
struct RingSegment {
    label: &'static str,
    value: i64,
    color: &'static str,
    dasharray: String,
    dashoffset: String,
}

#[component]
pub fn TrendChart(chart: LineChart) -> Element {
    let surface = chart.surface();
    let (width, height) = (surface.width, surface.height);
    let title = chart.title();
    let dataset_label = chart.dataset_label();

    let points = chart.points(TREND_PAD);
    let trace = polyline_attr(&points);
    let baseline = height - TREND_PAD;
    let area = match (points.first(), points.last()) {
        (Some(first), Some(last)) => format!(
            "{trace} {:.1},{baseline:.1} {:.1},{baseline:.1}",
            last.x, first.x
        ),
        _ => String::new(),
    };
    let grid_rows: Vec<String> = (0..=GRID_LINES)
        .map(|step| {
            let y = TREND_PAD + (height - 2.0 * TREND_PAD) * f32::from(step) / f32::from(GRID_LINES);
            format!("{y:.1}")
        })
        .collect();
    let markers: Vec<Marker> = points
        .iter()
        .zip(chart.labels())
        .zip(chart.data())
        .map(|((point, label), value)| Marker {
            x: format!("{:.1}", point.x),
            y: format!("{:.1}", point.y),
            label: label.clone(),
            value: *value,
        })
        .collect();
    let grid_right = format!("{:.1}", width - TREND_PAD);
    let label_y = format!("{:.1}", height - 8.0);
    let view_box = format!("0 0 {width} {height}");

    rsx! {
        figure { class: "chart chart-trend", id: surface.id,
            figcaption { class: "chart-title", color: TITLE_COLOR, "{title}" }
            svg { class: "chart-svg", view_box: "{view_box}", width: "100%",
                for (idx, y) in grid_rows.iter().enumerate() {
                    line {
                        key: "{idx}",
                        x1: "{TREND_PAD}",
                        y1: "{y}",
                        x2: "{grid_right}",
                        y2: "{y}",
                        stroke: GRID_COLOR,
                        stroke_width: "1",
                    }
                }
                polygon { points: "{area}", fill: ACCENT_GOLD, fill_opacity: "0.2" }
                polyline {
                    points: "{trace}",
                    fill: "none",
                    stroke: ACCENT_GOLD,
                    stroke_width: "2",
                    stroke_linejoin: "round",
                    stroke_linecap: "round",
                }
                for marker in markers {
                    g { key: "{marker.label}", class: "trend-point",
                        circle { cx: "{marker.x}", cy: "{marker.y}", r: "3", fill: ACCENT_GOLD }
                        text {
                            x: "{marker.x}",
                            y: "{label_y}",
                            fill: AXIS_TEXT_COLOR,
                            font_size: "10",
                            text_anchor: "middle",
                            "{marker.label}"
                        }
                    }
                }
            }
            p { class: "chart-legend",
                span { class: "legend-swatch", background: ACCENT_GOLD }
                span { color: LEGEND_COLOR, "{dataset_label}" }
            }
        }
    }
}

#[component]
pub fn GoalChart(chart: DoughnutChart) -> Element {
    let surface = chart.surface();
    let size = surface.width.min(surface.height);
    let center = size / 2.0;
    let radius = (size - RING_STROKE) / 2.0;
    let title = chart.title();
    let percent = chart.achieved_percent();

    let values: Vec<i64> = chart.slices().iter().map(|slice| slice.value).collect();
    let segments: Vec<RingSegment> = chart
        .slices()
        .iter()
        .zip(doughnut_arcs(&values, radius))
        .map(|(slice, arc)| RingSegment {
            label: slice.label,
            value: slice.value,
            color: slice.color,
            dasharray: arc.dasharray(),
            dashoffset: arc.dashoffset(),
        })
        .collect();
    let legend = segments.clone();
    let transform = format!("rotate(-90 {center} {center})");
    let view_box = format!("0 0 {size} {size}");

    rsx! {
        figure { class: "chart chart-goal", id: surface.id,
            figcaption { class: "chart-title", color: TITLE_COLOR, "{title}" }
            svg { class: "chart-svg", view_box: "{view_box}", width: "{size}", height: "{size}",
                g { transform: "{transform}",
                    for segment in segments {
                        circle {
                            key: "{segment.label}",
                            cx: "{center}",
                            cy: "{center}",
                            r: "{radius}",
                            fill: "none",
                            stroke: segment.color,
                            stroke_width: "{RING_STROKE}",
                            stroke_dasharray: "{segment.dasharray}",
                            stroke_dashoffset: "{segment.dashoffset}",
                        }
                    }
                }
                text {
                    x: "{center}",
                    y: "{center}",
                    fill: TITLE_COLOR,
                    font_size: "28",
                    text_anchor: "middle",
                    dominant_baseline: "middle",
                    "{percent}%"
                }
            }
            ul { class: "chart-legend",
                for segment in legend {
                    li { key: "{segment.label}",
                        span { class: "legend-swatch", background: segment.color }
                        span { color: LEGEND_COLOR, "{segment.label}: {segment.value} AP" }
                    }
                }
            }
        }
    }
}
