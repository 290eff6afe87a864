// DoctorDirectory - app/load.rs
//
// Load lifecycle management. Runs the one directory fetch on a background
// thread and reports to the owning thread via an mpsc channel.
//
// Architecture:
//   - `LoadManager` lives on the owning thread; `run_load` runs on a worker.
//   - Exactly one `Finished` message is sent per load. A failed fetch still
//     finishes, carrying an empty store.
//   - No retries and no cancellation: one attempt per session.

use crate::core::store::RecordStore;
use crate::platform::fetch::{self, DataSource};
use std::sync::mpsc;
use std::time::{Duration, Instant};

/// Messages sent from the load worker to the owning thread.
#[derive(Debug)]
pub enum LoadProgress {
    /// The fetch has begun.
    Started { source: String },

    /// The fetch resolved. `store` is empty on any failure.
    Finished { store: RecordStore },
}

/// Manages the directory load on a background thread.
pub struct LoadManager {
    /// Channel receiver for the owner to poll progress messages.
    progress_rx: Option<mpsc::Receiver<LoadProgress>>,
}

impl LoadManager {
    pub fn new() -> Self {
        Self { progress_rx: None }
    }

    /// Start loading from `source`.
    ///
    /// Spawns a background thread immediately; progress is sent over the
    /// channel. Calling this again while a load is pending is ignored.
    pub fn start_load(&mut self, source: DataSource, timeout: Duration) {
        if self.progress_rx.is_some() {
            tracing::warn!("Directory load already started; ignoring second request");
            return;
        }

        let (tx, rx) = mpsc::channel();
        self.progress_rx = Some(rx);

        std::thread::spawn(move || {
            run_load(source, timeout, tx);
        });

        tracing::info!("Directory load started");
    }

    /// Poll for progress messages without blocking. Returns all pending messages.
    pub fn poll_progress(&self) -> Vec<LoadProgress> {
        let mut messages = Vec::new();
        if let Some(ref rx) = self.progress_rx {
            while let Ok(msg) = rx.try_recv() {
                messages.push(msg);
            }
        }
        messages
    }

    /// Block until the next progress message arrives.
    ///
    /// Returns `None` if no load was started or the worker has gone away.
    pub fn wait_progress(&self) -> Option<LoadProgress> {
        self.progress_rx.as_ref()?.recv().ok()
    }
}

impl Default for LoadManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Worker body: fetch, decode, build the store, report.
fn run_load(source: DataSource, timeout: Duration, tx: mpsc::Sender<LoadProgress>) {
    let started = Instant::now();

    if tx
        .send(LoadProgress::Started {
            source: source.to_string(),
        })
        .is_err()
    {
        return; // Receiver dropped; nobody is waiting for the directory.
    }

    let store = RecordStore::from_outcome(fetch::fetch_payload(&source, timeout));

    tracing::info!(
        records = store.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Directory load finished"
    );

    let _ = tx.send(LoadProgress::Finished { store });
}
