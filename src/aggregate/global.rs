// Dataset-wide summary.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::dataset::Row;

/// Totals over the whole row set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSummary {
    pub total_posts: usize,
    pub misinformation_count: usize,
    pub avg_toxicity: f64,
    pub avg_engagement: f64,
    /// Number of distinct platform values present in the data. Unlike the
    /// per-platform list, this reflects what was actually observed.
    pub platforms: usize,
}

pub fn total_stats(rows: &[Row]) -> GlobalSummary {
    if rows.is_empty() {
        return GlobalSummary::default();
    }

    let n = rows.len() as f64;
    let toxicity: f64 = rows.iter().map(|r| r.toxicity_score).sum();
    let engagement: f64 = rows.iter().map(|r| r.engagement as f64).sum();
    let platforms: HashSet<&str> = rows.iter().map(|r| r.platform.as_str()).collect();

    GlobalSummary {
        total_posts: rows.len(),
        misinformation_count: rows.iter().filter(|r| r.is_misinformation).count(),
        avg_toxicity: toxicity / n,
        avg_engagement: engagement / n,
        platforms: platforms.len(),
    }
}
