//! Thumbnail pipeline.
//!
//! This module is the heart of picshelf. A thumbnail request flows through:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     ThumbnailEngine                          │
//! │  1. Decode source into raster  3. Lanczos resample          │
//! │  2. Compute target dimensions  4. Encode JPEG (quality 85)  │
//! └───────────────────────────┬─────────────────────────────────┘
//!                             │ encoded bytes
//!                             ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    ThumbnailArtifact                         │
//! │  5. Stage bytes in a uniquely named file next to the source │
//! │  6. Hand the file to the transport's file-serving layer     │
//! │  7. Remove the file on drop, on every exit path             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! All steps are synchronous and reentrant: no shared in-memory state, no
//! cross-request locks. Collision avoidance between concurrent requests
//! relies on the artifact's generated unique filename.

pub mod artifact;
pub mod engine;

pub use artifact::ThumbnailArtifact;
pub use engine::{
    effective_size, target_dimensions, ThumbnailEngine, DEFAULT_SMALLEST_SIDE,
    THUMBNAIL_JPEG_QUALITY,
};
