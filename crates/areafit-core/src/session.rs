//! Session state: the pairing map, the latest run and the run history.
//!
//! The session is owned by a single controller. Front-ends render a
//! [`SessionSnapshot`] instead of holding state of their own.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::config::Config;
use crate::error::SaveError;
use crate::inbox::{DropInbox, DropSender};
use crate::pairing::PairingMap;
use crate::pipeline::ImageChecker;
use crate::types::{
    Classification, ClassificationResult, FileReference, HistoryEntry, PairView, SessionSnapshot,
};

pub struct Session {
    pairs: PairingMap,
    checker: ImageChecker,
    inbox: DropInbox,
    latest: HashMap<FileReference, ClassificationResult>,
    history: Vec<HistoryEntry>,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            pairs: PairingMap::new(config.pairing.clone()),
            checker: ImageChecker::new(config),
            inbox: DropInbox::new(),
            latest: HashMap::new(),
            history: Vec::new(),
        }
    }

    /// Add a dropped file. Returns the base name it was paired under.
    pub fn add_reference(&mut self, path: impl Into<PathBuf>) -> String {
        let reference = FileReference::new(path);
        let base_name = self.pairs.resolve(reference);
        tracing::debug!("Added {:?}", base_name);
        base_name
    }

    /// Handle for delivering drops from other threads or tasks.
    pub fn drop_sender(&self) -> DropSender {
        self.inbox.sender()
    }

    /// Apply all queued drops. Returns how many were applied.
    pub fn drain_drops(&mut self) -> usize {
        let paths = self.inbox.drain();
        let count = paths.len();
        for path in paths {
            self.add_reference(path);
        }
        count
    }

    /// Check every original in the pairing map and record the run.
    ///
    /// Queued drops are applied first. Files are processed one at a time;
    /// a failure on one file does not affect the others.
    pub fn check_and_resize(&mut self) -> &HistoryEntry {
        self.check_and_resize_with(|_| {})
    }

    /// Like [`Session::check_and_resize`], calling `on_result` as each file finishes.
    pub fn check_and_resize_with(
        &mut self,
        mut on_result: impl FnMut(&ClassificationResult),
    ) -> &HistoryEntry {
        self.drain_drops();

        let timestamp = Utc::now();
        let results: Vec<ClassificationResult> = self
            .pairs
            .originals()
            .map(|(base_name, original)| {
                let result = self.checker.classify(original, base_name);
                on_result(&result);
                result
            })
            .collect();

        self.latest = results
            .iter()
            .map(|r| (r.original.clone(), r.clone()))
            .collect();

        let entry = HistoryEntry {
            run: self.history.len() + 1,
            timestamp,
            results,
        };
        tracing::info!(
            "Run {}: {} checked, {} resized, {} failed",
            entry.run,
            entry.results.len(),
            entry.count(|c| c.resized_path().is_some()),
            entry.count(|c| matches!(c, Classification::Failed { .. }))
        );

        self.history.push(entry);
        &self.history[self.history.len() - 1]
    }

    /// Pairs merged with the latest result for each original.
    pub fn snapshot(&self) -> SessionSnapshot {
        let pairs = self
            .pairs
            .iter()
            .map(|(base_name, pair)| PairView {
                base_name: base_name.clone(),
                pair: pair.clone(),
                result: pair
                    .original
                    .as_ref()
                    .and_then(|o| self.latest.get(o))
                    .cloned(),
            })
            .collect();

        SessionSnapshot {
            pairs,
            runs: self.history.len(),
        }
    }

    /// All runs, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn pairs(&self) -> &PairingMap {
        &self.pairs
    }

    /// Directory resized outputs are written to.
    pub fn output_dir(&self) -> &Path {
        self.checker.output_dir()
    }

    /// Forget all dropped files. History is kept.
    pub fn clear_pairs(&mut self) {
        self.pairs.clear();
        self.latest.clear();
    }

    /// Copy a resized output to `destination`.
    ///
    /// If `destination` is an existing directory the file keeps its name.
    /// Session state is not touched either way.
    pub fn save_resized(
        &self,
        result: &ClassificationResult,
        destination: &Path,
    ) -> Result<PathBuf, SaveError> {
        let from = result
            .classification
            .resized_path()
            .ok_or_else(|| SaveError::NothingToSave(result.original.path().to_path_buf()))?;

        let to = match (destination.is_dir(), from.file_name()) {
            (true, Some(name)) => destination.join(name),
            _ => destination.to_path_buf(),
        };

        std::fs::copy(from, &to).map_err(|source| SaveError::SaveDestination {
            from: from.to_path_buf(),
            to: to.clone(),
            source,
        })?;
        tracing::info!("Saved {:?}", to);
        Ok(to)
    }
}
