#![doc = include_str!("../README.md")]

pub mod android;
pub mod error;
pub mod frame;
pub mod processor;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::FrameError;
pub use crate::frame::{expected_len, RgbaFrame, BYTES_PER_PIXEL};
pub use crate::processor::{
    process_frame, CannyOptions, FrameProcessor, DEFAULT_HIGH_THRESHOLD, DEFAULT_LOW_THRESHOLD,
};

/// Small prelude for quick experiments.
///
/// ```
/// use frame_edges::prelude::*;
///
/// let (w, h) = (32u32, 24u32);
/// let frame = vec![0u8; (w * h * 4) as usize];
/// let edges = process_frame(&frame, w, h).unwrap();
/// assert_eq!(edges.len(), frame.len());
/// ```
pub mod prelude {
    pub use crate::frame::RgbaFrame;
    pub use crate::{process_frame, CannyOptions, FrameError, FrameProcessor};
}
