//! Pure layout math for the SVG charts.

use std::f32::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Scale `values` into a `width` x `height` box with `pad` on every side.
///
/// The lowest value sits on the bottom edge and the highest on the top edge. A flat
/// series is drawn on the bottom edge; a single value is centered horizontally.
#[must_use]
pub fn line_points(values: &[i64], width: f32, height: f32, pad: f32) -> Vec<Point> {
    let inner_w = (width - 2.0 * pad).max(0.0);
    let inner_h = (height - 2.0 * pad).max(0.0);
    let Some((&min, &max)) = values.iter().min().zip(values.iter().max()) else {
        return Vec::new();
    };
    // Saturated totals can span more than `i64::MAX`, so offsets are taken in f64.
    #[allow(clippy::cast_precision_loss)]
    let range = (max as f64 - min as f64).max(1.0);

    let steps = values.len().saturating_sub(1);
    values
        .iter()
        .enumerate()
        .map(|(idx, &value)| {
            #[allow(clippy::cast_precision_loss)]
            let x = if steps == 0 {
                width / 2.0
            } else {
                pad + (idx as f32 / steps as f32) * inner_w
            };
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            let share = ((value as f64 - min as f64) / range) as f32;
            let y = height - pad - share * inner_h;
            Point { x, y }
        })
        .collect()
}

/// Format points for an SVG `points` attribute.
#[must_use]
pub fn polyline_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One ring segment drawn with `stroke-dasharray` on a full circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    pub dash: f32,
    pub gap: f32,
    /// Negative offset that starts this segment where the previous one ended.
    pub offset: f32,
}

impl ArcSegment {
    #[must_use]
    pub fn dasharray(&self) -> String {
        format!("{:.2} {:.2}", self.dash, self.gap)
    }

    #[must_use]
    pub fn dashoffset(&self) -> String {
        format!("{:.2}", self.offset)
    }
}

/// Split a ring of `radius` into segments proportional to `values`.
///
/// Negative values count as zero. When every value is zero the ring is empty.
#[must_use]
pub fn doughnut_arcs(values: &[i64], radius: f32) -> Vec<ArcSegment> {
    let circumference = 2.0 * PI * radius;
    let total = values
        .iter()
        .fold(0_i64, |acc, v| acc.saturating_add((*v).max(0)));
    let mut consumed = 0.0_f32;

    values
        .iter()
        .map(|&value| {
            #[allow(clippy::cast_precision_loss)]
            let share = if total > 0 {
                value.max(0) as f32 / total as f32
            } else {
                0.0
            };
            let dash = circumference * share;
            let segment = ArcSegment {
                dash,
                gap: circumference - dash,
                offset: -consumed,
            };
            consumed += dash;
            segment
        })
        .collect()
}

/// Whole-number percentage of `part` in `part + rest`, `0` for an empty total.
#[must_use]
pub fn percent_of(part: i64, rest: i64) -> u32 {
    let part = i128::from(part.max(0));
    let total = part + i128::from(rest.max(0));
    if total == 0 {
        return 0;
    }
    u32::try_from(part * 100 / total).unwrap_or(100)
}
