//! JNI boundary for managed-runtime callers.
//!
//! Exports the symbol expected by the Kotlin side's
//! `com.example.flam.NativeLib.processFrame(ByteArray, Int, Int): ByteArray?`.
//! The input array is copied out of the JVM up front, so no raw view is
//! held across the pipeline and nothing needs releasing on the error paths.
//! Every failure kind collapses to a `null` return; the distinction is
//! visible only in the error log.

use jni::objects::{JByteArray, JClass};
use jni::sys::{jbyteArray, jint};
use jni::JNIEnv;
use log::error;

use crate::frame::RgbaFrame;
use crate::processor::FrameProcessor;

/// Process one RGBA frame for a JVM caller.
///
/// Returns a freshly allocated Java byte array holding the rendered edge
/// map, or `null` if the input could not be read or processed.
///
/// # Safety
/// Called by the JVM through JNI with a valid `env` for the current
/// thread; `input` is either `null` or a live `byte[]` reference.
#[no_mangle]
pub extern "system" fn Java_com_example_flam_NativeLib_processFrame(
    env: JNIEnv<'_>,
    _class: JClass<'_>,
    input: JByteArray<'_>,
    width: jint,
    height: jint,
) -> jbyteArray {
    if input.as_raw().is_null() {
        error!("processFrame: input array is null");
        return std::ptr::null_mut();
    }

    let data = match env.convert_byte_array(&input) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("processFrame: failed to read input array: {e}");
            return std::ptr::null_mut();
        }
    };

    let (Ok(width), Ok(height)) = (u32::try_from(width), u32::try_from(height)) else {
        error!("processFrame: non-positive dimensions {width}x{height}");
        return std::ptr::null_mut();
    };

    let result = RgbaFrame::new(width, height, &data)
        .and_then(|frame| FrameProcessor::default().process(frame));
    let bytes = match result {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("processFrame: {e}");
            return std::ptr::null_mut();
        }
    };

    match env.byte_array_from_slice(&bytes) {
        Ok(array) => array.into_raw(),
        Err(e) => {
            error!("processFrame: failed to allocate output array: {e}");
            std::ptr::null_mut()
        }
    }
}
