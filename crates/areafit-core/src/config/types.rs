//! Sub-configuration structs with their defaults.

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How an image is judged and resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizePolicy {
    /// Keep images up to `max_pixel_area`; scale larger ones down proportionally.
    #[default]
    ThresholdPreserveAspect,
    /// Always resize to `target_width` x `target_height`, ignoring aspect ratio.
    FixedTarget,
}

impl std::fmt::Display for ResizePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResizePolicy::ThresholdPreserveAspect => write!(f, "threshold-preserve-aspect"),
            ResizePolicy::FixedTarget => write!(f, "fixed-target"),
        }
    }
}

/// Resampling filter used for the single-pass resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleFilter {
    Nearest,
    /// Bilinear
    Triangle,
    /// Bicubic
    #[default]
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ResampleFilter> for FilterType {
    fn from(filter: ResampleFilter) -> Self {
        match filter {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Triangle => FilterType::Triangle,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Resize settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeConfig {
    /// Classification policy
    pub policy: ResizePolicy,

    /// Largest acceptable width * height in pixels (threshold policy)
    pub max_pixel_area: u64,

    /// Output width for the fixed-target policy
    pub target_width: u32,

    /// Output height for the fixed-target policy
    pub target_height: u32,

    /// Resampling filter
    pub filter: ResampleFilter,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            policy: ResizePolicy::ThresholdPreserveAspect,
            max_pixel_area: 750_000,
            target_width: 800,
            target_height: 600,
            filter: ResampleFilter::CatmullRom,
        }
    }
}

/// Settings for associating originals with their focused counterparts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PairingConfig {
    /// Drop the file extension when deriving a base name ("cat.png" -> "cat")
    pub strip_extension: bool,

    /// Case-insensitive prefix marking a focused file, trailing space included
    pub focused_prefix: String,
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self {
            strip_extension: true,
            focused_prefix: "Focused ".to_string(),
        }
    }
}

/// Where resized outputs are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for resized PNGs. Defaults to `<system temp>/areafit`.
    pub temp_dir: Option<PathBuf>,
}

/// Resource limits to protect against problematic inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum file size in megabytes
    pub max_file_size_mb: u64,

    /// Maximum image dimension (width or height)
    pub max_image_dimension: u32,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: 100,
            max_image_dimension: 20_000,
        }
    }
}

/// Input discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Extensions picked up when a directory is dropped
    pub supported_formats: Vec<String>,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            supported_formats: vec![
                "jpg".to_string(),
                "jpeg".to_string(),
                "png".to_string(),
                "webp".to_string(),
                "gif".to_string(),
                "bmp".to_string(),
                "tif".to_string(),
                "tiff".to_string(),
            ],
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
