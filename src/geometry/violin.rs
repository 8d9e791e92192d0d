// Violin shapes — mirrored outlines built from density profiles.
//
// The outline runs up the right side (bins ascending) and back down the
// left side (bins descending). A renderer closes the path and extrudes it
// with `ExtrudeSettings`.

use serde::{Deserialize, Serialize};

use crate::aggregate::density::DensityProfile;

pub const VIOLIN_HEIGHT: f64 = 3.0;
pub const VIOLIN_HALF_WIDTH: f64 = 0.5;

/// Horizontal distance between neighbouring violins.
const VIOLIN_SPACING: f64 = 2.0;

/// Offset of the violin group within the scene.
const GROUP_OFFSET: [f64; 3] = [-3.0, -1.5, 0.0];

/// Fill colors, assigned to platforms in list order and cycled.
pub const PLATFORM_COLORS: [&str; 4] = ["#ffd02f", "#ffcb0f", "#ffcf54", "#ffe291"];

/// How the planar outline is turned into a solid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtrudeSettings {
    pub steps: u32,
    pub depth: f64,
    pub bevel_enabled: bool,
    pub bevel_thickness: f64,
    pub bevel_size: f64,
    pub bevel_segments: u32,
}

impl Default for ExtrudeSettings {
    fn default() -> Self {
        Self {
            steps: 1,
            depth: 0.3,
            bevel_enabled: true,
            bevel_thickness: 0.05,
            bevel_size: 0.05,
            bevel_segments: 3,
        }
    }
}

/// Everything a renderer needs to draw one platform's violin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolinGeometry {
    pub platform: String,
    /// Closed outline as `[x, y]` pairs
    pub outline: Vec<[f64; 2]>,
    pub extrude: ExtrudeSettings,
    /// Height of the mean marker within the violin
    pub mean_line_y: f64,
    pub mean_label: String,
    /// Scene position of the violin's base
    pub position: [f64; 3],
    pub color: String,
}

/// Build the outline for a density array.
///
/// Point `i` on the right side sits at `(density[i] * half_width,
/// i / bins * height)`; the left side mirrors it in reverse order.
pub fn violin_outline(density: &[f64], half_width: f64, height: f64) -> Vec<[f64; 2]> {
    let bins = density.len();
    if bins == 0 {
        return Vec::new();
    }

    let y = |i: usize| i as f64 / bins as f64 * height;

    let right = density
        .iter()
        .enumerate()
        .map(|(i, d)| [d * half_width, y(i)]);
    let left = density
        .iter()
        .enumerate()
        .rev()
        .map(|(i, d)| [-d * half_width, y(i)]);

    right.chain(left).collect()
}

/// Lay out one violin per profile, left to right in profile order.
pub fn violin_geometry(profiles: &[DensityProfile]) -> Vec<ViolinGeometry> {
    profiles
        .iter()
        .enumerate()
        .map(|(index, profile)| ViolinGeometry {
            platform: profile.platform.clone(),
            outline: violin_outline(&profile.density, VIOLIN_HALF_WIDTH, VIOLIN_HEIGHT),
            extrude: ExtrudeSettings::default(),
            mean_line_y: profile.mean / 100.0 * VIOLIN_HEIGHT,
            mean_label: format!("{:.1}%", profile.mean),
            position: [
                GROUP_OFFSET[0] + index as f64 * VIOLIN_SPACING,
                GROUP_OFFSET[1],
                GROUP_OFFSET[2],
            ],
            color: PLATFORM_COLORS[index % PLATFORM_COLORS.len()].to_string(),
        })
        .collect()
}
