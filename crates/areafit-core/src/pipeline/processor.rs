//! Classification of a single original: validate, decode, size check,
//! resize and persist.

use std::path::Path;

use crate::config::Config;
use crate::error::PipelineError;
use crate::types::{Classification, ClassificationResult, FailureStage, FileReference};

use super::decode::{DecodedImage, ImageDecoder};
use super::persist::PngWriter;
use super::resize::{ImageResizer, ResizeDecision};
use super::validate::Validator;

/// Runs originals through the resize pipeline.
pub struct ImageChecker {
    validator: Validator,
    decoder: ImageDecoder,
    resizer: ImageResizer,
    writer: PngWriter,
}

impl ImageChecker {
    pub fn new(config: &Config) -> Self {
        Self {
            validator: Validator::new(config.limits.clone()),
            decoder: ImageDecoder::new(config.limits.clone()),
            resizer: ImageResizer::new(config.resize.clone()),
            writer: PngWriter::new(config.temp_dir()),
        }
    }

    /// Directory resized outputs are written to.
    pub fn output_dir(&self) -> &Path {
        self.writer.dir()
    }

    /// Classify one original. Never fails: problems are reported in the result.
    pub fn classify(&self, original: &FileReference, base_name: &str) -> ClassificationResult {
        let start = std::time::Instant::now();
        let path = original.path();

        let decoded = match self.load(path) {
            Ok(decoded) => decoded,
            Err(e) => {
                tracing::warn!("Failed: {:?} - {}", path, e);
                return ClassificationResult {
                    original: original.clone(),
                    base_name: base_name.to_string(),
                    width: None,
                    height: None,
                    classification: failure(&e),
                };
            }
        };

        let classification = match self.resizer.plan(decoded.width, decoded.height) {
            ResizeDecision::Keep => Classification::Acceptable,
            ResizeDecision::Resize { width, height } => {
                let resized = self.resizer.resize(&decoded.image, width, height);
                match self.writer.write(&resized, base_name) {
                    Ok(resized) => Classification::TooLarge {
                        resized,
                        resized_width: width,
                        resized_height: height,
                    },
                    Err(e) => {
                        tracing::warn!("Failed: {:?} - {}", path, e);
                        failure(&e)
                    }
                }
            }
        };

        tracing::debug!(
            "Checked {:?} in {:?} ({:?} {}x{}, {} px): {}",
            original.display_name(),
            start.elapsed(),
            decoded.format,
            decoded.width,
            decoded.height,
            decoded.area(),
            classification.label()
        );

        ClassificationResult {
            original: original.clone(),
            base_name: base_name.to_string(),
            width: Some(decoded.width),
            height: Some(decoded.height),
            classification,
        }
    }

    fn load(&self, path: &Path) -> Result<DecodedImage, PipelineError> {
        self.validator.validate(path)?;
        self.decoder.decode(path)
    }
}

fn failure(error: &PipelineError) -> Classification {
    let stage = if error.is_write_side() {
        FailureStage::Write
    } else {
        FailureStage::Decode
    };
    Classification::Failed {
        stage,
        message: error.to_string(),
    }
}
