use thiserror::Error;

/// Failure to fetch or decode the dataset as a whole.
///
/// Individual malformed rows never produce one of these; they are dropped
/// during normalization.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("dataset fetch from {url} returned {status}")]
    Status { url: String, status: u16 },

    #[error("decode error: {0}")]
    Decode(#[from] csv::Error),
}
