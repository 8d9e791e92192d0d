// Shared session — the dataset behind a lock, loaded exactly once in the
// background.
//
// The web server hands out `Arc<Session>` to every handler. A single
// background task performs the load and writes the result; after that the
// dataset is only ever read.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use super::source::RecordSource;
use super::Dataset;

pub struct Session {
    dataset: RwLock<Dataset>,
    started: AtomicBool,
}

impl Session {
    /// A session whose dataset is still pending.
    pub fn new(source: &str) -> Arc<Self> {
        Arc::new(Self {
            dataset: RwLock::new(Dataset::pending(source)),
            started: AtomicBool::new(false),
        })
    }

    /// A session around an already-loaded dataset. No load will run.
    pub fn ready(dataset: Dataset) -> Arc<Self> {
        Arc::new(Self {
            dataset: RwLock::new(dataset),
            started: AtomicBool::new(true),
        })
    }

    /// Start the one and only load in a background tokio task.
    ///
    /// Returns false (and does nothing) if a load was already started.
    pub fn start_load(self: &Arc<Self>, source: Box<dyn RecordSource>) -> bool {
        if self.started.swap(true, Ordering::SeqCst) {
            warn!("Dataset load already started, ignoring second request");
            return false;
        }

        let session = Arc::clone(self);
        tokio::spawn(async move {
            info!(source = %source.describe(), "Loading dataset in background");
            let loaded = Dataset::load(source.as_ref()).await;
            *session.dataset.write().await = loaded;
        });
        true
    }

    /// Read access to the current dataset.
    pub async fn read(&self) -> tokio::sync::RwLockReadGuard<'_, Dataset> {
        self.dataset.read().await
    }
}
