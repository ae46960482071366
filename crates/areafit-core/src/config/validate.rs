//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resize.max_pixel_area == 0 {
            return Err(ConfigError::ValidationError(
                "resize.max_pixel_area must be > 0".into(),
            ));
        }
        if self.resize.target_width == 0 || self.resize.target_height == 0 {
            return Err(ConfigError::ValidationError(
                "resize.target_width and resize.target_height must be > 0".into(),
            ));
        }
        if self.pairing.focused_prefix.is_empty() {
            return Err(ConfigError::ValidationError(
                "pairing.focused_prefix must not be empty".into(),
            ));
        }
        if self.limits.max_file_size_mb == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_file_size_mb must be > 0".into(),
            ));
        }
        if self.limits.max_image_dimension == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_image_dimension must be > 0".into(),
            ));
        }
        Ok(())
    }
}
