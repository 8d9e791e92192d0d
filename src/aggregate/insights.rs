// Key findings — the headline numbers shown next to the charts.

use serde::{Deserialize, Serialize};

use super::global::GlobalSummary;
use super::platform::PlatformSummary;
use super::scatter::ScatterPoint;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    /// Percentage (0-100) of all posts flagged as misinformation
    pub misinformation_share: f64,
    pub misinformation_count: usize,
    /// Mean toxicity in percent (0-100)
    pub avg_toxicity_percent: f64,
    /// Number of platforms charted (the configured list, not the observed set)
    pub platforms_charted: usize,
    /// Scatter sample points flagged as misinformation
    pub scatter_misinformation: usize,
    /// Scatter sample points not flagged
    pub scatter_verified: usize,
}

pub fn insights(
    global: &GlobalSummary,
    platforms: &[PlatformSummary],
    scatter: &[ScatterPoint],
) -> Insights {
    let misinformation_share = if global.total_posts > 0 {
        global.misinformation_count as f64 / global.total_posts as f64 * 100.0
    } else {
        0.0
    };
    let scatter_misinformation = scatter.iter().filter(|p| p.is_misinformation).count();

    Insights {
        misinformation_share,
        misinformation_count: global.misinformation_count,
        avg_toxicity_percent: global.avg_toxicity * 100.0,
        platforms_charted: platforms.len(),
        scatter_misinformation,
        scatter_verified: scatter.len() - scatter_misinformation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_posts_means_zero_share() {
        let result = insights(&GlobalSummary::default(), &[], &[]);
        assert_eq!(result.misinformation_share, 0.0);
        assert_eq!(result.scatter_verified, 0);
    }
}
