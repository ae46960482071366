//! Size policy decisions and the single-pass resample.

use image::DynamicImage;

use crate::config::{ResizeConfig, ResizePolicy};

/// What the size policy says to do with an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeDecision {
    /// The image is within policy as-is.
    Keep,
    /// The image must be resampled to these dimensions.
    Resize { width: u32, height: u32 },
}

/// Scale `width` x `height` down so its area is at most `max_area`,
/// keeping the aspect ratio.
///
/// Each side is `round(side * sqrt(max_area / area))`, never below 1, so the
/// result may exceed `max_area` by at most one pixel row and column. When the
/// area is only just over the budget and rounding would hand back the source
/// size, both sides are floored instead so the image still shrinks.
pub fn proportional_dimensions(width: u32, height: u32, max_area: u64) -> (u32, u32) {
    let area = u64::from(width) * u64::from(height);
    if area <= max_area {
        return (width, height);
    }
    let scale = (max_area as f64 / area as f64).sqrt();
    let rounded = |side: u32| ((f64::from(side) * scale).round() as u32).max(1);
    let dims = (rounded(width), rounded(height));
    if dims != (width, height) {
        return dims;
    }
    let floored = |side: u32| ((f64::from(side) * scale).floor() as u32).max(1);
    (floored(width), floored(height))
}

/// Applies the configured resize policy.
#[derive(Debug, Clone)]
pub struct ImageResizer {
    config: ResizeConfig,
}

impl ImageResizer {
    pub fn new(config: ResizeConfig) -> Self {
        Self { config }
    }

    /// Decide whether an image of the given size needs resizing.
    pub fn plan(&self, width: u32, height: u32) -> ResizeDecision {
        match self.config.policy {
            ResizePolicy::ThresholdPreserveAspect => {
                let area = u64::from(width) * u64::from(height);
                if area <= self.config.max_pixel_area {
                    return ResizeDecision::Keep;
                }
                let (new_width, new_height) =
                    proportional_dimensions(width, height, self.config.max_pixel_area);
                ResizeDecision::Resize {
                    width: new_width,
                    height: new_height,
                }
            }
            ResizePolicy::FixedTarget => {
                let target = (self.config.target_width, self.config.target_height);
                if target == (width, height) {
                    ResizeDecision::Keep
                } else {
                    ResizeDecision::Resize {
                        width: target.0,
                        height: target.1,
                    }
                }
            }
        }
    }

    /// Resample to exactly `width` x `height`.
    pub fn resize(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        image.resize_exact(width, height, self.config.filter.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn threshold(max_pixel_area: u64) -> ImageResizer {
        ImageResizer::new(ResizeConfig {
            max_pixel_area,
            ..ResizeConfig::default()
        })
    }

    #[test]
    fn test_scenario_1000x900_at_300k() {
        assert_eq!(proportional_dimensions(1000, 900, 300_000), (577, 520));
        assert_eq!(
            threshold(300_000).plan(1000, 900),
            ResizeDecision::Resize {
                width: 577,
                height: 520
            }
        );
    }

    #[test]
    fn test_scenario_800x600_at_750k_is_kept() {
        assert_eq!(threshold(750_000).plan(800, 600), ResizeDecision::Keep);
    }

    #[test]
    fn test_area_exactly_at_threshold_is_kept() {
        assert_eq!(threshold(480_000).plan(800, 600), ResizeDecision::Keep);
        assert!(matches!(
            threshold(479_999).plan(800, 600),
            ResizeDecision::Resize { .. }
        ));
    }

    #[test]
    fn test_just_over_threshold_still_shrinks() {
        assert_eq!(proportional_dimensions(800, 600, 479_999), (799, 599));
        assert_eq!(
            threshold(749_999).plan(1000, 750),
            ResizeDecision::Resize {
                width: 999,
                height: 749
            }
        );
        for (w, h, max) in [(800, 600, 479_999), (1000, 750, 749_999), (3, 3, 8)] {
            let (nw, nh) = proportional_dimensions(w, h, max);
            assert!(u64::from(nw) * u64::from(nh) <= max, "{w}x{h} -> {nw}x{nh}");
        }
    }

    #[test]
    fn test_proportional_bounds_and_aspect() {
        let cases = [
            (1000, 900, 300_000),
            (4000, 3000, 750_000),
            (6000, 1000, 750_000),
            (1234, 5678, 300_000),
            (10_000, 10_000, 1_000_000),
            (3001, 17, 10_000),
        ];
        for (w, h, max) in cases {
            let (nw, nh) = proportional_dimensions(w, h, max);
            let shrunk_area = u64::from(nw.saturating_sub(1)) * u64::from(nh.saturating_sub(1));
            assert!(shrunk_area <= max, "{w}x{h} -> {nw}x{nh} over {max}");

            let original_ratio = f64::from(w) / f64::from(h);
            let new_ratio = f64::from(nw) / f64::from(nh);
            // One pixel of rounding on the short side bounds the ratio drift.
            let tolerance = original_ratio / f64::from(nh.min(nw)) + 1e-9;
            assert!(
                (new_ratio - original_ratio).abs() <= tolerance * 2.0,
                "{w}x{h} -> {nw}x{nh} ratio drifted"
            );
        }
    }

    #[test]
    fn test_sides_never_round_to_zero() {
        let (w, h) = proportional_dimensions(100_000, 1, 100);
        assert_eq!(h, 1);
        assert!(w >= 1);
    }

    #[test]
    fn test_fixed_target_ignores_aspect() {
        let resizer = ImageResizer::new(ResizeConfig {
            policy: ResizePolicy::FixedTarget,
            target_width: 800,
            target_height: 600,
            ..ResizeConfig::default()
        });
        assert_eq!(
            resizer.plan(300, 300),
            ResizeDecision::Resize {
                width: 800,
                height: 600
            }
        );
        assert_eq!(resizer.plan(800, 600), ResizeDecision::Keep);
    }

    #[test]
    fn test_resize_exact_dimensions() {
        let resizer = threshold(100);
        let image = DynamicImage::new_rgb8(30, 20);
        let resized = resizer.resize(&image, 12, 8);
        assert_eq!((resized.width(), resized.height()), (12, 8));
    }
}
