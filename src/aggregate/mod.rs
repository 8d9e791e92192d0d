// Aggregation engine — pure functions over the in-memory row set.
//
// Every query takes the rows (and, where needed, the configured platform
// list) explicitly and returns freshly built values. Nothing is cached or
// mutated in place: callers recompute wholesale whenever the rows change.

pub mod density;
pub mod global;
pub mod insights;
pub mod platform;
pub mod scatter;

use serde::{Deserialize, Serialize};

use crate::dataset::Row;

use density::DensityProfile;
use global::GlobalSummary;
use insights::Insights;
use platform::PlatformSummary;
use scatter::{Jitter, ScatterPoint};

/// Platforms charted when none are configured.
pub const DEFAULT_PLATFORMS: &[&str] = &["Reddit", "Twitter", "Facebook", "Telegram"];

/// Parameters shared by the aggregation queries.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateConfig {
    /// Fixed, ordered platform list. Per-platform outputs always have one
    /// entry per item here, whether or not the data mentions it.
    pub platforms: Vec<String>,
    /// Maximum number of rows in the scatter sample
    pub scatter_limit: usize,
    pub jitter: Jitter,
}

impl Default for AggregateConfig {
    fn default() -> Self {
        Self {
            platforms: DEFAULT_PLATFORMS.iter().map(|p| p.to_string()).collect(),
            scatter_limit: scatter::DEFAULT_SCATTER_LIMIT,
            jitter: Jitter::Random,
        }
    }
}

/// Every derived view of the row set, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub overview: GlobalSummary,
    pub platforms: Vec<PlatformSummary>,
    pub toxicity: Vec<DensityProfile>,
    pub scatter: Vec<ScatterPoint>,
    pub insights: Insights,
}

pub fn snapshot(rows: &[Row], config: &AggregateConfig) -> Snapshot {
    let overview = global::total_stats(rows);
    let platforms = platform::platform_stats(rows, &config.platforms);
    let toxicity = density::toxicity_distribution(rows, &config.platforms);
    let scatter = scatter::scatter_with_jitter(rows, config.scatter_limit, &config.jitter);
    let insights = insights::insights(&overview, &platforms, &scatter);

    Snapshot {
        overview,
        platforms,
        toxicity,
        scatter,
        insights,
    }
}
