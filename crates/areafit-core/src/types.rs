//! Core data types: dropped file references, pairs, classification results
//! and the run history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// An immutable handle to a dropped file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileReference(PathBuf);

impl FileReference {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// The final path component, as shown to the user.
    pub fn display_name(&self) -> String {
        self.0
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.0.to_string_lossy().into_owned())
    }
}

impl From<PathBuf> for FileReference {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl From<&Path> for FileReference {
    fn from(path: &Path) -> Self {
        Self(path.to_path_buf())
    }
}

/// Which side of a pair a dropped file fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Original,
    Focused,
}

/// An original image and its focused counterpart, either of which may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<FileReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub focused: Option<FileReference>,
}

impl Pair {
    /// Place a reference at the given role, replacing any earlier one.
    ///
    /// Returns the reference that was replaced.
    pub fn set(&mut self, role: Role, reference: FileReference) -> Option<FileReference> {
        let slot = match role {
            Role::Original => &mut self.original,
            Role::Focused => &mut self.focused,
        };
        slot.replace(reference)
    }

    pub fn is_complete(&self) -> bool {
        self.original.is_some() && self.focused.is_some()
    }
}

/// Stage at which a file failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureStage {
    /// The source could not be read or decoded
    Decode,
    /// The resized output could not be encoded or written
    Write,
}

/// Outcome of checking one original image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Classification {
    /// Within the size policy; nothing written.
    Acceptable,
    /// Over the size policy; a resized PNG was written to `resized`.
    TooLarge {
        resized: PathBuf,
        resized_width: u32,
        resized_height: u32,
    },
    /// Processing this file failed.
    Failed { stage: FailureStage, message: String },
}

impl Classification {
    /// Short status label for display next to the file name.
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Acceptable => "OK",
            Classification::TooLarge { .. } => "Resized",
            Classification::Failed {
                stage: FailureStage::Decode,
                ..
            } => "Unreadable",
            Classification::Failed {
                stage: FailureStage::Write,
                ..
            } => "Save failed",
        }
    }

    /// Path of the resized output, if one was written.
    pub fn resized_path(&self) -> Option<&Path> {
        match self {
            Classification::TooLarge { resized, .. } => Some(resized),
            _ => None,
        }
    }
}

/// The result of checking one original within a processing run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// The original file that was checked
    pub original: FileReference,

    /// Base name the original is paired under
    pub base_name: String,

    /// Source dimensions, when the image decoded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    #[serde(flatten)]
    pub classification: Classification,
}

/// One processing run in the session history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// 1-based run number within the session
    pub run: usize,

    /// When the run was triggered
    pub timestamp: DateTime<Utc>,

    /// Results in processing order
    pub results: Vec<ClassificationResult>,
}

impl HistoryEntry {
    /// Count results matching a predicate on their classification.
    pub fn count(&self, f: impl Fn(&Classification) -> bool) -> usize {
        self.results.iter().filter(|r| f(&r.classification)).count()
    }
}

/// A pair merged with the latest result for its original, for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairView {
    pub base_name: String,

    #[serde(flatten)]
    pub pair: Pair,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ClassificationResult>,
}

/// An owned view of the session state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Pairs sorted by base name
    pub pairs: Vec<PairView>,

    /// Number of runs in the history
    pub runs: usize,
}
