//! Raw RGBA pixel handles handed in by the embedding page.
//!
//! Decoding and loading belong to the host; the engine only validates the
//! buffer shape. A missing or rejected image degrades to a flat placeholder
//! so a failed asset never takes the whole scene down.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PixelDataError {
    #[error("pixel buffer length {actual} does not match {width}x{height} rgba ({expected})")]
    LengthMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("zero-sized image ({width}x{height})")]
    ZeroSized { width: u32, height: u32 },
}

/// Tightly packed RGBA8 pixels, row-major, no padding.
#[derive(Clone, Debug)]
pub struct PixelData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl PixelData {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, PixelDataError> {
        if width == 0 || height == 0 {
            return Err(PixelDataError::ZeroSized { width, height });
        }
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(PixelDataError::LengthMismatch {
                width,
                height,
                expected,
                actual: rgba.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// 1x1 flat-color stand-in used when an asset is missing or invalid.
    pub fn placeholder(rgba: [u8; 4]) -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: rgba.to_vec(),
        }
    }
}
