use std::env;
use std::path::Path;

use anyhow::{Context, Result};

use crate::aggregate::scatter::{Jitter, DEFAULT_SCATTER_LIMIT, MAX_SCATTER_LIMIT};
use crate::aggregate::{AggregateConfig, DEFAULT_PLATFORMS};
use crate::dataset::source::{self, RecordSource};

/// Dataset location used when MISINFO_DATASET is unset.
pub const DEFAULT_DATASET: &str = "./data/misinformation_dataset.csv";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// setting has a default, so an empty environment still gives a working
/// configuration pointed at the bundled dataset path.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path or http(s) URL of the dataset file
    pub dataset: String,
    /// Field delimiter of the dataset file (MISINFO_DELIMITER, default ',')
    pub delimiter: u8,
    /// Platform list, scatter limit and jitter source for the queries
    pub aggregate: AggregateConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: DEFAULT_DATASET.to_string(),
            delimiter: b',',
            aggregate: AggregateConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let dataset = env::var("MISINFO_DATASET").unwrap_or_else(|_| DEFAULT_DATASET.to_string());

        let delimiter = match env::var("MISINFO_DELIMITER") {
            Ok(raw) => parse_delimiter(&raw)?,
            Err(_) => b',',
        };

        let platforms = match env::var("MISINFO_PLATFORMS") {
            Ok(raw) => parse_platforms(&raw)?,
            Err(_) => DEFAULT_PLATFORMS.iter().map(|p| p.to_string()).collect(),
        };

        let scatter_limit = match env::var("MISINFO_SCATTER_LIMIT") {
            Ok(raw) => parse_scatter_limit(&raw)?,
            Err(_) => DEFAULT_SCATTER_LIMIT,
        };

        // Unset means fresh jitter on every scatter query.
        let jitter = match env::var("MISINFO_JITTER_SEED") {
            Ok(raw) => Jitter::Seeded(
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("MISINFO_JITTER_SEED is not a number: {raw}"))?,
            ),
            Err(_) => Jitter::Random,
        };

        Ok(Self {
            dataset,
            delimiter,
            aggregate: AggregateConfig {
                platforms,
                scatter_limit,
                jitter,
            },
        })
    }

    /// Check that a local dataset file exists before trying to load it.
    /// Remote datasets are only checked when fetched.
    pub fn require_dataset(&self) -> Result<()> {
        if !source::is_remote(&self.dataset) && !Path::new(&self.dataset).exists() {
            anyhow::bail!(
                "Dataset not found at {}\n\
                 Set MISINFO_DATASET to a CSV path or URL in your .env file.",
                self.dataset
            );
        }
        Ok(())
    }

    /// Build the record source for the configured dataset location.
    pub fn record_source(&self) -> Result<Box<dyn RecordSource>> {
        source::source_for(&self.dataset, self.delimiter)
            .with_context(|| format!("Failed to set up record source for {}", self.dataset))
    }
}

/// Parse a comma-separated platform list, trimming names and dropping
/// blanks. Order is preserved; duplicates are removed.
pub fn parse_platforms(raw: &str) -> Result<Vec<String>> {
    let mut platforms: Vec<String> = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        if !platforms.iter().any(|p| p == name) {
            platforms.push(name.to_string());
        }
    }
    if platforms.is_empty() {
        anyhow::bail!("MISINFO_PLATFORMS is set but lists no platforms");
    }
    Ok(platforms)
}

/// Parse the scatter sample size. Values above the 200-point ceiling are
/// rejected rather than silently lowered.
pub fn parse_scatter_limit(raw: &str) -> Result<usize> {
    let limit = raw
        .trim()
        .parse::<usize>()
        .with_context(|| format!("MISINFO_SCATTER_LIMIT is not a count: {raw}"))?;
    if limit > MAX_SCATTER_LIMIT {
        anyhow::bail!("MISINFO_SCATTER_LIMIT must be at most {MAX_SCATTER_LIMIT}, got {limit}");
    }
    Ok(limit)
}

/// Parse a single-byte delimiter. `\t` and `tab` are accepted for TSV.
pub fn parse_delimiter(raw: &str) -> Result<u8> {
    match raw {
        "\\t" | "tab" | "\t" => Ok(b'\t'),
        s if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        _ => anyhow::bail!("MISINFO_DELIMITER must be a single ASCII character, got {raw:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platforms_keep_order_and_drop_duplicates() {
        let platforms = parse_platforms(" Telegram, Reddit,,Telegram ,Gab").unwrap();
        assert_eq!(platforms, vec!["Telegram", "Reddit", "Gab"]);
    }

    #[test]
    fn empty_platform_list_is_rejected() {
        assert!(parse_platforms(" , ").is_err());
    }

    #[test]
    fn scatter_limit_cannot_exceed_ceiling() {
        assert_eq!(parse_scatter_limit(" 50 ").unwrap(), 50);
        assert_eq!(parse_scatter_limit("200").unwrap(), 200);
        let err = parse_scatter_limit("500").unwrap_err();
        assert!(err.to_string().contains("at most 200"));
        assert!(parse_scatter_limit("lots").is_err());
    }

    #[test]
    fn delimiters() {
        assert_eq!(parse_delimiter(",").unwrap(), b',');
        assert_eq!(parse_delimiter(";").unwrap(), b';');
        assert_eq!(parse_delimiter("tab").unwrap(), b'\t');
        assert!(parse_delimiter("::").is_err());
        assert!(parse_delimiter("é").is_err());
    }

    #[test]
    fn missing_local_dataset_is_reported() {
        let config = Config {
            dataset: "/nonexistent/misinfo-atlas.csv".to_string(),
            ..Config::default()
        };
        let err = config.require_dataset().unwrap_err();
        assert!(err.to_string().contains("Dataset not found"));
    }

    #[test]
    fn remote_dataset_skips_existence_check() {
        let config = Config {
            dataset: "https://example.com/data.csv".to_string(),
            ..Config::default()
        };
        assert!(config.require_dataset().is_ok());
    }
}
