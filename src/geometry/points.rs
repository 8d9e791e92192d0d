// Scatter points and bars.

use serde::{Deserialize, Serialize};

use crate::aggregate::platform::PlatformSummary;
use crate::aggregate::scatter::ScatterPoint;

pub const MISINFORMATION_COLOR: &str = "#ffd02f";
pub const VERIFIED_COLOR: &str = "#f5f5f5";

/// Scale applied to a point while the pointer hovers over it.
pub const HOVER_SCALE: f64 = 1.5;

const POINT_ENGAGEMENT_STEP: f64 = 5_000.0;
const POINT_MAX_GROWTH: f64 = 2.0;
const POINT_BASE_SIZE: f64 = 0.5;

/// Renderable scatter point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    pub position: [f64; 3],
    pub size: f64,
    pub color: String,
}

/// Bar height for an engagement chart.
///
/// `value / max * scale + base_offset`. A bar of value 0 is still
/// `base_offset` tall, and a set whose maximum is 0 gets flat base bars.
pub fn bar_height(value: f64, max: f64, scale: f64, base_offset: f64) -> f64 {
    if max <= 0.0 {
        return base_offset;
    }
    value / max * scale + base_offset
}

/// Bar heights for per-platform mean engagement, in summary order.
pub fn engagement_bars(
    stats: &[PlatformSummary],
    scale: f64,
    base_offset: f64,
) -> Vec<(String, f64)> {
    let max = stats
        .iter()
        .map(|s| s.avg_engagement)
        .fold(0.0_f64, f64::max);

    stats
        .iter()
        .map(|s| {
            (
                s.platform.clone(),
                bar_height(s.avg_engagement, max, scale, base_offset),
            )
        })
        .collect()
}

/// Sphere scale for a point: grows with engagement, capped at 2.5.
pub fn point_size(engagement: u64) -> f64 {
    (engagement as f64 / POINT_ENGAGEMENT_STEP).min(POINT_MAX_GROWTH) + POINT_BASE_SIZE
}

pub fn point_scale(size: f64, hovered: bool) -> f64 {
    if hovered {
        size * HOVER_SCALE
    } else {
        size
    }
}

pub fn point_color(is_misinformation: bool) -> &'static str {
    if is_misinformation {
        MISINFORMATION_COLOR
    } else {
        VERIFIED_COLOR
    }
}

pub fn scatter_geometry(points: &[ScatterPoint]) -> Vec<PointGeometry> {
    points
        .iter()
        .map(|p| PointGeometry {
            position: [p.x, p.y, p.z],
            size: point_size(p.engagement),
            color: point_color(p.is_misinformation).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_value_bar_is_still_visible() {
        assert!((bar_height(0.0, 100.0, 3.0, 0.2) - 0.2).abs() < f64::EPSILON);
        assert!((bar_height(100.0, 100.0, 3.0, 0.2) - 3.2).abs() < f64::EPSILON);
        assert!((bar_height(5.0, 0.0, 3.0, 0.2) - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn point_size_caps_growth() {
        assert!((point_size(0) - 0.5).abs() < f64::EPSILON);
        assert!((point_size(5_000) - 1.5).abs() < f64::EPSILON);
        assert!((point_size(1_000_000) - 2.5).abs() < f64::EPSILON);
        assert!((point_scale(2.0, true) - 3.0).abs() < f64::EPSILON);
    }
}
