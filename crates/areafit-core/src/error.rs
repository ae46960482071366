//! Error types for the areafit pipeline.
//!
//! Errors are organized by stage so that a per-file failure can be reported
//! next to the file it belongs to, with the path and the specific issue.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Per-file pipeline errors, organized by stage.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File exceeds size limit
    #[error("File too large: {path} ({size_mb}MB > {max_mb}MB)")]
    FileTooLarge {
        path: PathBuf,
        size_mb: u64,
        max_mb: u64,
    },

    /// Zero-byte file
    #[error("File is empty: {0}")]
    EmptyFile(PathBuf),

    /// Image decoding failed
    #[error("Decode error for {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// Unsupported image format
    #[error("Unsupported format for {path}: {format}")]
    UnsupportedFormat { path: PathBuf, format: String },

    /// Image dimensions exceed limit
    #[error("Image too large: {path} ({width}x{height} > {max_dim})")]
    ImageTooLarge {
        path: PathBuf,
        width: u32,
        height: u32,
        max_dim: u32,
    },

    /// PNG encoding of the resized buffer failed
    #[error("Encode error for {path}: {message}")]
    Encode { path: PathBuf, message: String },

    /// Writing the resized output failed
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    /// Whether this error happened while persisting output rather than
    /// while loading the source image.
    pub fn is_write_side(&self) -> bool {
        matches!(self, Self::Encode { .. } | Self::Write { .. })
    }
}

/// Errors from copying a resized output to a user-chosen destination.
#[derive(Error, Debug)]
pub enum SaveError {
    /// The result has no resized output to save
    #[error("Nothing to save for {0}: image was not resized")]
    NothingToSave(PathBuf),

    /// Copy to the destination failed
    #[error("Failed to save {from} to {to}: {source}")]
    SaveDestination {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
