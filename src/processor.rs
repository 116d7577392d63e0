//! Frame processor: the fixed three-stage RGBA → gray → Canny → RGBA
//! transform.
//!
//! - Grayscale conversion and the edge detector itself are delegated to
//!   `image` / `imageproc`; this module owns validation, marshalling, and
//!   the log side effects.
//! - Thresholds default to [`DEFAULT_LOW_THRESHOLD`] /
//!   [`DEFAULT_HIGH_THRESHOLD`] and are validated once at processor
//!   construction, keeping the delegate's internal assertions unreachable.
//! - Each call owns its working buffers; the processor holds no mutable
//!   state and can be shared freely across threads.

use std::time::Instant;

use image::DynamicImage;
use imageproc::edges::canny;
use log::info;
use serde::Deserialize;

use crate::error::FrameError;
use crate::frame::RgbaFrame;

/// Default low hysteresis threshold for the Canny detector.
pub const DEFAULT_LOW_THRESHOLD: f32 = 80.0;
/// Default high hysteresis threshold for the Canny detector.
pub const DEFAULT_HIGH_THRESHOLD: f32 = 160.0;

/// Hysteresis thresholds controlling edge sensitivity.
///
/// Gradient magnitudes above `high_threshold` seed edges; pixels between
/// the two thresholds are kept only when connected to a seeded edge.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct CannyOptions {
    pub low_threshold: f32,
    pub high_threshold: f32,
}

impl Default for CannyOptions {
    fn default() -> Self {
        Self {
            low_threshold: DEFAULT_LOW_THRESHOLD,
            high_threshold: DEFAULT_HIGH_THRESHOLD,
        }
    }
}

impl CannyOptions {
    fn validate(&self) -> Result<(), FrameError> {
        let ok = self.low_threshold.is_finite()
            && self.high_threshold.is_finite()
            && self.low_threshold >= 0.0
            && self.low_threshold <= self.high_threshold;
        if ok {
            Ok(())
        } else {
            Err(FrameError::InvalidThresholds {
                low: self.low_threshold,
                high: self.high_threshold,
            })
        }
    }
}

/// Stateless edge-map renderer over validated RGBA frames.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameProcessor {
    options: CannyOptions,
}

impl FrameProcessor {
    /// Build a processor with the given thresholds, rejecting non-finite,
    /// negative, or inverted pairs.
    pub fn new(options: CannyOptions) -> Result<Self, FrameError> {
        options.validate()?;
        Ok(Self { options })
    }

    /// The thresholds this processor applies
    pub fn options(&self) -> &CannyOptions {
        &self.options
    }

    /// Render the edge map of one frame.
    ///
    /// Returns a freshly allocated buffer of the same length and layout as
    /// the input: per pixel, the three color channels carry the binary edge
    /// value (0 or 255) and alpha is 255.
    pub fn process(&self, frame: RgbaFrame<'_>) -> Result<Vec<u8>, FrameError> {
        let (width, height) = (frame.width(), frame.height());
        info!(
            "processing frame: {width}x{height}, len={}",
            frame.data().len()
        );
        let start = Instant::now();

        let rgba = image::RgbaImage::from_raw(width, height, frame.data().to_vec())
            .ok_or(FrameError::DimensionOverflow { width, height })?;

        let gray = DynamicImage::ImageRgba8(rgba).into_luma8();
        let edges = canny(&gray, self.options.low_threshold, self.options.high_threshold);
        let out = DynamicImage::ImageLuma8(edges).into_rgba8().into_raw();

        info!(
            "frame processed, output len={} ({:.3} ms)",
            out.len(),
            start.elapsed().as_secs_f64() * 1e3
        );
        Ok(out)
    }
}

/// Validate and process one frame with the default thresholds.
///
/// This mirrors the managed-runtime boundary contract: raw bytes plus two
/// dimensions in, raw bytes out.
pub fn process_frame(data: &[u8], width: u32, height: u32) -> Result<Vec<u8>, FrameError> {
    let frame = RgbaFrame::new(width, height, data)?;
    FrameProcessor::default().process(frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds_match_constants() {
        let opts = CannyOptions::default();
        assert_eq!(opts.low_threshold, DEFAULT_LOW_THRESHOLD);
        assert_eq!(opts.high_threshold, DEFAULT_HIGH_THRESHOLD);
        assert!(FrameProcessor::new(opts).is_ok());
    }

    #[test]
    fn inverted_thresholds_are_rejected() {
        let err = FrameProcessor::new(CannyOptions {
            low_threshold: 160.0,
            high_threshold: 80.0,
        })
        .unwrap_err();
        assert_eq!(
            err,
            FrameError::InvalidThresholds {
                low: 160.0,
                high: 80.0
            }
        );
    }

    #[test]
    fn non_finite_thresholds_are_rejected() {
        for bad in [f32::NAN, f32::INFINITY, -1.0] {
            let result = FrameProcessor::new(CannyOptions {
                low_threshold: bad,
                high_threshold: DEFAULT_HIGH_THRESHOLD,
            });
            assert!(result.is_err(), "low_threshold={bad} should be rejected");
        }
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let opts: CannyOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts.low_threshold, DEFAULT_LOW_THRESHOLD);
        assert_eq!(opts.high_threshold, DEFAULT_HIGH_THRESHOLD);

        let opts: CannyOptions = serde_json::from_str(r#"{"low_threshold": 40.0}"#).unwrap();
        assert_eq!(opts.low_threshold, 40.0);
        assert_eq!(opts.high_threshold, DEFAULT_HIGH_THRESHOLD);
    }
}
