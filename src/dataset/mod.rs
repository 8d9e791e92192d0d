// Dataset — the record source, ingestion, and the load-once session state.
//
// `Dataset` is the in-memory row set plus its load status. Every query
// goes through it so consumers never see a missing value: while the
// dataset is loading (or failed to load) the row set is empty and every
// aggregate comes back zero-valued.

pub mod error;
pub mod models;
pub mod normalize;
pub mod session;
pub mod source;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info};

use crate::aggregate::density::DensityProfile;
use crate::aggregate::global::GlobalSummary;
use crate::aggregate::platform::PlatformSummary;
use crate::aggregate::scatter::ScatterPoint;
use crate::aggregate::{self, AggregateConfig, Snapshot};

pub use error::LoadError;
pub use models::{RawRow, Row, Scalar};
pub use source::RecordSource;

/// Where the dataset is in its load-once lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

/// The session's row set and its load status.
#[derive(Debug, Clone)]
pub struct Dataset {
    status: LoadStatus,
    rows: Vec<Row>,
    source: String,
    /// Rows the record source produced before normalization dropped any.
    raw_count: usize,
    loaded_at: Option<DateTime<Utc>>,
}

impl Dataset {
    /// A dataset whose load hasn't finished yet.
    pub fn pending(source: &str) -> Self {
        Self {
            status: LoadStatus::Loading,
            rows: Vec::new(),
            source: source.to_string(),
            raw_count: 0,
            loaded_at: None,
        }
    }

    /// A ready dataset built directly from rows.
    pub fn from_rows(source: &str, rows: Vec<Row>) -> Self {
        Self {
            status: LoadStatus::Ready,
            raw_count: rows.len(),
            rows,
            source: source.to_string(),
            loaded_at: Some(Utc::now()),
        }
    }

    /// Load the dataset from a record source.
    ///
    /// Never fails: a load error is recorded in the status and the row set
    /// stays empty.
    pub async fn load(source: &dyn RecordSource) -> Self {
        let mut dataset = Self::pending(&source.describe());
        match source.load_records().await {
            Ok(raw) => dataset.finish(&raw),
            Err(e) => dataset.fail(&e),
        }
        dataset
    }

    /// Record a successful load.
    pub fn finish(&mut self, raw: &[RawRow]) {
        self.rows = normalize::normalize(raw);
        self.raw_count = raw.len();
        self.status = LoadStatus::Ready;
        self.loaded_at = Some(Utc::now());
        info!(
            source = %self.source,
            rows = self.rows.len(),
            dropped = self.dropped_count(),
            "Dataset loaded"
        );
    }

    /// Record a failed load.
    pub fn fail(&mut self, e: &LoadError) {
        error!(source = %self.source, error = %e, "Dataset load failed");
        self.rows.clear();
        self.status = LoadStatus::Failed(e.to_string());
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    pub fn dropped_count(&self) -> usize {
        self.raw_count.saturating_sub(self.rows.len())
    }

    pub fn platform_stats(&self, config: &AggregateConfig) -> Vec<PlatformSummary> {
        aggregate::platform::platform_stats(&self.rows, &config.platforms)
    }

    pub fn toxicity_distribution(&self, config: &AggregateConfig) -> Vec<DensityProfile> {
        aggregate::density::toxicity_distribution(&self.rows, &config.platforms)
    }

    pub fn scatter_data(&self, config: &AggregateConfig) -> Vec<ScatterPoint> {
        aggregate::scatter::scatter_with_jitter(&self.rows, config.scatter_limit, &config.jitter)
    }

    pub fn total_stats(&self) -> GlobalSummary {
        aggregate::global::total_stats(&self.rows)
    }

    pub fn snapshot(&self, config: &AggregateConfig) -> Snapshot {
        aggregate::snapshot(&self.rows, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSource;

    #[async_trait::async_trait]
    impl RecordSource for FailingSource {
        async fn load_records(&self) -> Result<Vec<RawRow>, LoadError> {
            Err(LoadError::Status {
                url: "https://example.invalid/data.csv".to_string(),
                status: 404,
            })
        }

        fn describe(&self) -> String {
            "https://example.invalid/data.csv".to_string()
        }
    }

    struct StaticSource(Vec<RawRow>);

    #[async_trait::async_trait]
    impl RecordSource for StaticSource {
        async fn load_records(&self) -> Result<Vec<RawRow>, LoadError> {
            Ok(self.0.clone())
        }

        fn describe(&self) -> String {
            "memory".to_string()
        }
    }

    #[test]
    fn pending_dataset_reports_loading_with_zero_defaults() {
        let dataset = Dataset::pending("memory");
        let config = AggregateConfig::default();
        assert!(dataset.loading());
        assert!(dataset.error().is_none());
        assert_eq!(dataset.total_stats().total_posts, 0);
        assert_eq!(dataset.platform_stats(&config).len(), 4);
        assert!(dataset.scatter_data(&config).is_empty());
    }

    #[tokio::test]
    async fn failed_load_records_error() {
        let dataset = Dataset::load(&FailingSource).await;
        assert!(!dataset.loading());
        let message = dataset.error().unwrap();
        assert!(message.contains("404"), "unexpected message: {message}");
        assert!(dataset.rows().is_empty());
    }

    #[tokio::test]
    async fn successful_load_normalizes_rows() {
        let raw = vec![
            RawRow::new(vec![
                ("id".to_string(), Scalar::Int(1)),
                ("platform".to_string(), Scalar::Text("Reddit".to_string())),
            ]),
            RawRow::new(vec![
                ("id".to_string(), Scalar::Empty),
                ("platform".to_string(), Scalar::Text("Reddit".to_string())),
            ]),
        ];
        let dataset = Dataset::load(&StaticSource(raw)).await;
        assert_eq!(dataset.status(), &LoadStatus::Ready);
        assert_eq!(dataset.rows().len(), 1);
        assert_eq!(dataset.dropped_count(), 1);
        assert!(dataset.loaded_at().is_some());
    }
}
