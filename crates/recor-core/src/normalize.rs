//! Image normalization for vision-model payloads.
//!
//! Captures come off the camera at full resolution; the vision call only
//! needs enough pixels to read the text. Downscaling and JPEG
//! re-encoding bound the network payload size and latency.

use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::GenericImageView;
use tracing::debug;

use crate::error::Result;

/// A normalized, re-encoded image ready for the vision payload.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    /// JPEG bytes.
    pub data: Vec<u8>,

    /// Declared mime type of `data`.
    pub mime_type: String,

    /// Final pixel dimensions (width, height).
    pub dimensions: (u32, u32),
}

/// Image normalizer for the model-based path.
pub struct ImageNormalizer {
    max_width: u32,
    jpeg_quality: u8,
}

impl ImageNormalizer {
    /// Create a normalizer with default settings.
    pub fn new() -> Self {
        Self {
            max_width: 1280,
            jpeg_quality: 80,
        }
    }

    /// Set the maximum pixel width.
    pub fn with_max_width(mut self, width: u32) -> Self {
        self.max_width = width;
        self
    }

    /// Set the JPEG re-encoding quality (1 - 100).
    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality;
        self
    }

    /// Load, downscale, and re-encode an image file.
    ///
    /// Images already within the width bound keep their dimensions but are
    /// still re-encoded at the configured quality.
    ///
    /// # Errors
    ///
    /// Decode and encode failures propagate as [`crate::RecorError::Image`];
    /// there is no fallback to the original bytes.
    pub fn normalize(&self, path: &Path) -> Result<EncodedImage> {
        let image = image::open(path)?;
        let (orig_width, orig_height) = image.dimensions();

        let image = if orig_width > self.max_width {
            let scale = self.max_width as f32 / orig_width as f32;
            let new_height = ((orig_height as f32 * scale) as u32).max(1);
            debug!(
                "downscaling {}x{} to {}x{}",
                orig_width, orig_height, self.max_width, new_height
            );
            image.resize_exact(self.max_width, new_height, FilterType::Lanczos3)
        } else {
            image
        };

        let dimensions = image.dimensions();
        let mut data = Vec::new();
        let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut data), self.jpeg_quality);
        image.to_rgb8().write_with_encoder(encoder)?;

        debug!("encoded {} byte jpeg payload", data.len());

        Ok(EncodedImage {
            data,
            mime_type: "image/jpeg".to_string(),
            dimensions,
        })
    }
}

impl Default for ImageNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
