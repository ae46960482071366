//! Delivery of dropped files from other threads or tasks.
//!
//! Drop notifications can arrive asynchronously and interleaved. They are
//! queued here and applied to the pairing map only when the session owner
//! drains the inbox, so the map is never mutated concurrently.

use std::path::PathBuf;
use tokio::sync::mpsc;

/// Clonable handle for reporting dropped files.
#[derive(Debug, Clone)]
pub struct DropSender {
    tx: mpsc::UnboundedSender<PathBuf>,
}

impl DropSender {
    /// Queue a dropped path. Returns `false` if the session is gone.
    pub fn send(&self, path: impl Into<PathBuf>) -> bool {
        self.tx.send(path.into()).is_ok()
    }
}

/// Receiving side, owned by the session.
#[derive(Debug)]
pub struct DropInbox {
    tx: mpsc::UnboundedSender<PathBuf>,
    rx: mpsc::UnboundedReceiver<PathBuf>,
}

impl DropInbox {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }

    pub fn sender(&self) -> DropSender {
        DropSender {
            tx: self.tx.clone(),
        }
    }

    /// Take everything queued so far, in arrival order, without blocking.
    pub fn drain(&mut self) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        while let Ok(path) = self.rx.try_recv() {
            paths.push(path);
        }
        paths
    }
}

impl Default for DropInbox {
    fn default() -> Self {
        Self::new()
    }
}
