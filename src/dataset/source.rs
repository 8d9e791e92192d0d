// Record source — the swap-ready abstraction over where the dataset lives.
//
// The dataset is a delimited text file with a header row. It can sit on
// local disk or behind a static URL; both decode through the same
// `decode_delimited` function so cell typing is identical either way.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, info};

use super::error::LoadError;
use super::models::{RawRow, Scalar};

/// Trait for loading the raw dataset. Implementations are async because
/// the remote variant performs an HTTP fetch.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch and decode every record. Called once per session.
    async fn load_records(&self) -> Result<Vec<RawRow>, LoadError>;

    /// Human-readable location, used in status output and logs.
    fn describe(&self) -> String;
}

/// Decode delimited text into raw rows.
///
/// The first record is the header. Short records are padded with empty
/// cells, cells past the last header are ignored, and records where every
/// cell is blank are skipped.
pub fn decode_delimited(bytes: &[u8], delimiter: u8) -> Result<Vec<RawRow>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let fields: Vec<(String, Scalar)> = headers
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let value = record.get(i).map(Scalar::parse).unwrap_or(Scalar::Empty);
                (name.clone(), value)
            })
            .collect();

        let row = RawRow::new(fields);
        if !row.is_blank() {
            rows.push(row);
        }
    }

    debug!(columns = headers.len(), rows = rows.len(), "Decoded delimited text");
    Ok(rows)
}

/// Dataset stored on the local filesystem.
pub struct FileSource {
    pub path: PathBuf,
    pub delimiter: u8,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>, delimiter: u8) -> Self {
        Self {
            path: path.into(),
            delimiter,
        }
    }
}

#[async_trait]
impl RecordSource for FileSource {
    async fn load_records(&self) -> Result<Vec<RawRow>, LoadError> {
        info!(path = %self.path.display(), "Reading dataset file");
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.display().to_string(),
                source,
            })?;
        decode_delimited(&bytes, self.delimiter)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Dataset served as a static asset over HTTP(S).
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
    delimiter: u8,
}

impl HttpSource {
    pub fn new(url: &str, delimiter: u8) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("misinfo-atlas/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
            delimiter,
        })
    }
}

#[async_trait]
impl RecordSource for HttpSource {
    async fn load_records(&self) -> Result<Vec<RawRow>, LoadError> {
        info!(url = %self.url, "Fetching dataset");
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status: response.status().as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        decode_delimited(&bytes, self.delimiter)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Whether a dataset location should be fetched over HTTP.
pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Pick the record source for a dataset location: HTTP for URLs, the
/// filesystem for everything else.
pub fn source_for(location: &str, delimiter: u8) -> Result<Box<dyn RecordSource>, LoadError> {
    if is_remote(location) {
        Ok(Box::new(HttpSource::new(location, delimiter)?))
    } else {
        Ok(Box::new(FileSource::new(location, delimiter)))
    }
}
