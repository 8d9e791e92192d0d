// Toxicity density profiles — the normalized histograms behind the
// violin chart.
//
// Each platform's toxicity scores are scaled to percent and counted into
// 20 equal-width bins over [0, 100]. Bins are then divided by the tallest
// bin so every non-empty profile peaks at exactly 1.0.

use serde::{Deserialize, Serialize};

use crate::dataset::Row;

/// Number of bins in every density profile.
pub const DENSITY_BINS: usize = 20;

/// Upper bound of the toxicity-percent range the bins span.
const PERCENT_RANGE: f64 = 100.0;

/// Normalized toxicity histogram for one platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityProfile {
    pub platform: String,
    /// Bin heights, each 0.0-1.0. The tallest bin is 1.0 unless the
    /// platform has no rows, in which case every bin is 0.0.
    pub density: Vec<f64>,
    /// Mean toxicity in percent (0-100)
    pub mean: f64,
}

/// Build one density profile per platform, in list order.
pub fn toxicity_distribution(rows: &[Row], platforms: &[String]) -> Vec<DensityProfile> {
    platforms
        .iter()
        .map(|platform| {
            let values: Vec<f64> = rows
                .iter()
                .filter(|r| &r.platform == platform)
                .map(|r| r.toxicity_score * PERCENT_RANGE)
                .collect();
            density_profile(platform, &values, DENSITY_BINS)
        })
        .collect()
}

/// Build a density profile from toxicity-percent values.
pub fn density_profile(platform: &str, values: &[f64], bins: usize) -> DensityProfile {
    let counts = bin_counts(values, bins);
    let max = counts.iter().copied().max().unwrap_or(0);

    let density = counts
        .iter()
        .map(|&c| if max == 0 { 0.0 } else { c as f64 / max as f64 })
        .collect();

    let mean = if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    };

    DensityProfile {
        platform: platform.to_string(),
        density,
        mean,
    }
}

/// Index of the bin a toxicity-percent value falls into. Values at or
/// above 100 land in the last bin; negatives land in the first.
pub fn bin_index(value: f64, bins: usize) -> usize {
    if bins == 0 {
        return 0;
    }
    let raw = (value / PERCENT_RANGE * bins as f64).floor();
    (raw.max(0.0) as usize).min(bins - 1)
}

fn bin_counts(values: &[f64], bins: usize) -> Vec<usize> {
    let mut counts = vec![0usize; bins];
    if bins == 0 {
        return counts;
    }
    for &v in values {
        counts[bin_index(v, bins)] += 1;
    }
    counts
}
