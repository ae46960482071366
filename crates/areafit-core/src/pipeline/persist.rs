//! PNG encoding of resized images into the temp directory.

use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::error::PipelineError;

/// Writes resized images as RGBA8 PNGs named after their base name.
#[derive(Debug, Clone)]
pub struct PngWriter {
    dir: PathBuf,
}

impl PngWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Destination for a base name. Repeated runs on the same name reuse it.
    pub fn output_path(&self, base_name: &str) -> PathBuf {
        let stem = Path::new(base_name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| base_name.to_string());
        self.dir.join(format!("{stem}.png"))
    }

    /// Encode and write, overwriting any earlier output for this base name.
    pub fn write(&self, image: &DynamicImage, base_name: &str) -> Result<PathBuf, PipelineError> {
        let path = self.output_path(base_name);
        let bytes = Self::encode(image, &path)?;

        std::fs::create_dir_all(&self.dir).map_err(|source| PipelineError::Write {
            path: self.dir.clone(),
            source,
        })?;
        std::fs::write(&path, bytes).map_err(|source| PipelineError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::debug!("Wrote {:?}", path);
        Ok(path)
    }

    fn encode(image: &DynamicImage, path: &Path) -> Result<Vec<u8>, PipelineError> {
        let rgba = DynamicImage::ImageRgba8(image.to_rgba8());
        let mut buffer = Cursor::new(Vec::new());
        rgba.write_to(&mut buffer, ImageFormat::Png)
            .map_err(|e| PipelineError::Encode {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(buffer.into_inner())
    }
}
