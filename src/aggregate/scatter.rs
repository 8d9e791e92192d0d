// Scatter sample — the first N rows mapped into 3D chart space.
//
// x and y are fixed affine maps of toxicity and engagement. z carries no
// data: it is uniform jitter in [-1, 1] that spreads the point cloud in
// depth. The jitter comes from an injected RNG so callers choose between
// fresh randomness on every call and a reproducible seeded sample.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::dataset::Row;

/// Hard ceiling on the number of sampled rows. A configured or requested
/// limit can only lower it.
pub const MAX_SCATTER_LIMIT: usize = 200;

pub const DEFAULT_SCATTER_LIMIT: usize = MAX_SCATTER_LIMIT;

/// Engagement that maps to the top of the nominal y range.
const ENGAGEMENT_SCALE: f64 = 10_000.0;

/// Where the z-jitter comes from.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Jitter {
    /// Fresh thread-local randomness per call. Two calls on the same rows
    /// give the same x and y but different z.
    #[default]
    Random,
    /// A `StdRng` seeded with this value per call. Repeated calls give
    /// identical points.
    Seeded(u64),
}

/// One sampled row in chart space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterPoint {
    pub platform: String,
    pub engagement: u64,
    pub toxicity: f64,
    pub is_misinformation: bool,
    /// Toxicity mapped from [0, 1] to [-2, 2]
    pub x: f64,
    /// Engagement mapped so 0 → -1 and 10,000 → 2. Not clamped.
    pub y: f64,
    /// Cosmetic depth jitter in [-1, 1]
    pub z: f64,
}

/// Map the first `min(rows.len(), limit, 200)` rows into chart space,
/// drawing z-jitter from `rng`.
pub fn scatter_data<R: Rng>(rows: &[Row], limit: usize, rng: &mut R) -> Vec<ScatterPoint> {
    rows.iter()
        .take(limit.min(MAX_SCATTER_LIMIT))
        .map(|r| ScatterPoint {
            platform: r.platform.clone(),
            engagement: r.engagement,
            toxicity: r.toxicity_score,
            is_misinformation: r.is_misinformation,
            x: toxicity_to_x(r.toxicity_score),
            y: engagement_to_y(r.engagement),
            z: (rng.random::<f64>() - 0.5) * 2.0,
        })
        .collect()
}

/// Build the scatter sample using the configured jitter source.
pub fn scatter_with_jitter(rows: &[Row], limit: usize, jitter: &Jitter) -> Vec<ScatterPoint> {
    match jitter {
        Jitter::Random => scatter_data(rows, limit, &mut rand::rng()),
        Jitter::Seeded(seed) => scatter_data(rows, limit, &mut StdRng::seed_from_u64(*seed)),
    }
}

pub fn toxicity_to_x(toxicity: f64) -> f64 {
    toxicity * 4.0 - 2.0
}

pub fn engagement_to_y(engagement: u64) -> f64 {
    (engagement as f64 / ENGAGEMENT_SCALE) * 3.0 - 1.0
}
