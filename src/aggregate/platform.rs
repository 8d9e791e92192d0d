// Per-platform summaries.
//
// One summary per configured platform, always in list order, so the
// dashboard layout gets a stable number of entries no matter which
// platforms actually appear in the data.

use serde::{Deserialize, Serialize};

use crate::dataset::Row;

/// Aggregate statistics for one platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSummary {
    pub platform: String,
    pub total_posts: usize,
    pub avg_engagement: f64,
    /// Mean toxicity score (0.0-1.0)
    pub avg_toxicity: f64,
    /// Percentage (0-100) of posts flagged as misinformation
    pub misinformation_rate: f64,
    pub avg_sentiment: f64,
}

impl PlatformSummary {
    /// The summary reported for a platform with no rows.
    pub fn empty(platform: &str) -> Self {
        Self {
            platform: platform.to_string(),
            total_posts: 0,
            avg_engagement: 0.0,
            avg_toxicity: 0.0,
            misinformation_rate: 0.0,
            avg_sentiment: 0.0,
        }
    }
}

/// Compute one summary per platform in `platforms`, in that order.
pub fn platform_stats(rows: &[Row], platforms: &[String]) -> Vec<PlatformSummary> {
    platforms
        .iter()
        .map(|platform| summarize_platform(rows, platform))
        .collect()
}

/// Summarize the rows belonging to a single platform.
pub fn summarize_platform(rows: &[Row], platform: &str) -> PlatformSummary {
    let subset: Vec<&Row> = rows.iter().filter(|r| r.platform == platform).collect();
    let total = subset.len();
    if total == 0 {
        return PlatformSummary::empty(platform);
    }

    let n = total as f64;
    let engagement: f64 = subset.iter().map(|r| r.engagement as f64).sum();
    let toxicity: f64 = subset.iter().map(|r| r.toxicity_score).sum();
    let sentiment: f64 = subset.iter().map(|r| r.sentiment_score).sum();
    let flagged = subset.iter().filter(|r| r.is_misinformation).count();

    PlatformSummary {
        platform: platform.to_string(),
        total_posts: total,
        avg_engagement: engagement / n,
        avg_toxicity: toxicity / n,
        misinformation_rate: flagged as f64 / n * 100.0,
        avg_sentiment: sentiment / n,
    }
}
