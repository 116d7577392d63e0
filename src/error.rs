//! Error surface shared by frame validation and processing.
//!
//! All variants describe precondition failures: once a frame view has been
//! validated and the thresholds accepted, the conversion pipeline itself
//! cannot fail, so there is no catch-all "internal fault" variant.

/// Reasons why a frame cannot be processed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameError {
    /// Width or height is zero.
    EmptyDimensions { width: u32, height: u32 },
    /// Buffer length disagrees with the declared dimensions.
    LengthMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    /// `width * height * 4` does not fit in `usize`.
    DimensionOverflow { width: u32, height: u32 },
    /// Hysteresis thresholds rejected up front (non-finite, negative,
    /// or low above high).
    InvalidThresholds { low: f32, high: f32 },
}

impl std::fmt::Display for FrameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameError::EmptyDimensions { width, height } => {
                write!(f, "empty frame dimensions ({width}x{height})")
            }
            FrameError::LengthMismatch {
                width,
                height,
                expected,
                actual,
            } => write!(
                f,
                "buffer length {actual} does not match {width}x{height} RGBA frame (expected {expected})"
            ),
            FrameError::DimensionOverflow { width, height } => {
                write!(f, "frame dimensions {width}x{height} overflow the address space")
            }
            FrameError::InvalidThresholds { low, high } => {
                write!(f, "invalid hysteresis thresholds (low={low}, high={high})")
            }
        }
    }
}

impl std::error::Error for FrameError {}
