//! Thumbnail rendering: decode, resample, encode.
//!
//! # Design Decisions
//!
//! - **Smallest side pinned**: the target size pins the *smaller* original
//!   dimension and lets the larger one scale freely. Landscape sources get
//!   height-pinned, portrait and square sources get width-pinned. Existing
//!   clients depend on this exact policy.
//!
//! - **Lenient size parsing**: a missing, non-numeric, zero, or negative
//!   `size` silently falls back to the default of 100. Malformed input is
//!   masked, not rejected.
//!
//! - **Fixed output format**: always JPEG at quality 85, regardless of the
//!   source format.

use std::path::Path;

use bytes::Bytes;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;

use crate::error::ThumbnailError;

/// Default length, in pixels, of the thumbnail's smaller dimension.
pub const DEFAULT_SMALLEST_SIDE: u32 = 100;

/// JPEG quality used for every encoded thumbnail.
pub const THUMBNAIL_JPEG_QUALITY: u8 = 85;

/// Parse a raw `size` query value.
///
/// Absent, non-numeric, zero, and negative values all yield
/// [`DEFAULT_SMALLEST_SIDE`].
pub fn effective_size(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|&v| v > 0)
        .map(|v| v.min(u32::MAX as i64) as u32)
        .unwrap_or(DEFAULT_SMALLEST_SIDE)
}

/// Compute `(width, height)` for a thumbnail of a `width` x `height` source.
///
/// If the source is wider than tall, the output height is pinned to
/// `smallest_side` and the width follows the aspect ratio; otherwise the
/// width is pinned. The derived dimension is rounded half-up and never
/// drops below 1.
pub fn target_dimensions(width: u32, height: u32, smallest_side: u32) -> (u32, u32) {
    if width > height {
        (derive(width, height, smallest_side), smallest_side)
    } else {
        (smallest_side, derive(height, width, smallest_side))
    }
}

/// Scale the free dimension from the pinned one, preserving aspect ratio.
fn derive(free: u32, pinned: u32, smallest_side: u32) -> u32 {
    if pinned == 0 {
        return 1;
    }
    let scaled = (smallest_side as f64) * (free as f64) / (pinned as f64) + 0.5;
    (scaled as u32).max(1)
}

/// Renders size-constrained JPEG thumbnails from on-disk images.
#[derive(Debug, Clone, Default)]
pub struct ThumbnailEngine {
    // Stateless; the struct exists so the HTTP layer has a seam for
    // future encoder settings.
}

impl ThumbnailEngine {
    /// Create a new thumbnail engine.
    pub fn new() -> Self {
        Self {}
    }

    /// Decode `source`, resample it so its smaller dimension equals
    /// `smallest_side`, and encode the result as JPEG.
    ///
    /// # Errors
    ///
    /// - [`ThumbnailError::Decode`] if the source is not a decodable image
    /// - [`ThumbnailError::Encode`] if JPEG encoding fails
    pub fn render(&self, source: &Path, smallest_side: u32) -> Result<Bytes, ThumbnailError> {
        let img = image::open(source).map_err(|e| ThumbnailError::Decode {
            path: source.to_path_buf(),
            message: e.to_string(),
        })?;

        let (target_width, target_height) =
            target_dimensions(img.width(), img.height(), smallest_side);

        let resized = img.resize_exact(target_width, target_height, FilterType::Lanczos3);

        // JPEG carries no alpha channel; flatten before encoding
        let rgb = resized.into_rgb8();

        let mut output = Vec::new();
        let mut encoder = JpegEncoder::new_with_quality(&mut output, THUMBNAIL_JPEG_QUALITY);
        encoder
            .encode_image(&rgb)
            .map_err(|e| ThumbnailError::Encode {
                path: source.to_path_buf(),
                message: e.to_string(),
            })?;

        Ok(Bytes::from(output))
    }
}
