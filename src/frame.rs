//! Validated borrowed view over a caller-owned RGBA pixel buffer.
//!
//! The buffer is tightly packed, row-major, 4 bytes per pixel in
//! red/green/blue/alpha order. Construction checks that the length matches
//! the declared dimensions, so downstream code can index freely without
//! re-validating. The view never owns the bytes; the caller keeps them
//! alive for the duration of the call.

use crate::error::FrameError;

/// Bytes per pixel in interleaved RGBA layout.
pub const BYTES_PER_PIXEL: usize = 4;

/// Expected byte length of a tightly-packed RGBA buffer, or `None` on
/// address-space overflow.
pub fn expected_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(BYTES_PER_PIXEL)
}

/// Borrowed, validated RGBA frame view.
#[derive(Clone, Copy, Debug)]
pub struct RgbaFrame<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> RgbaFrame<'a> {
    /// Construct a view, checking `data.len() == width * height * 4` and
    /// that both dimensions are positive.
    pub fn new(width: u32, height: u32, data: &'a [u8]) -> Result<Self, FrameError> {
        if width == 0 || height == 0 {
            return Err(FrameError::EmptyDimensions { width, height });
        }
        let expected =
            expected_len(width, height).ok_or(FrameError::DimensionOverflow { width, height })?;
        if data.len() != expected {
            return Err(FrameError::LengthMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Frame width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The underlying interleaved RGBA bytes
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Total pixel count (`width * height`)
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
