//! HTTP request handlers for the picshelf API.
//!
//! # Endpoints
//!
//! - `GET /` - List a directory of the library
//! - `GET /thumbnail` - Render and stream a thumbnail
//! - `GET /image` - Stream an original image
//! - `GET /health` - Health check endpoint
//!
//! Failures terminate the request with a bare status code; diagnostics go
//! to the process log, never to the response body. No failure is fatal to
//! the process.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::{Query, Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};
use tower_http::services::ServeFile;

use crate::error::{ImageServeError, ListError, ThumbnailError};
use crate::library::{is_allowed_image, list_directory, Listing, PathResolver};
use crate::thumb::{effective_size, ThumbnailArtifact, ThumbnailEngine};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state passed to all handlers via Axum's State extractor.
#[derive(Clone)]
pub struct AppState {
    /// Resolver holding the configured library root
    pub resolver: Arc<PathResolver>,

    /// The thumbnail rendering engine
    pub engine: ThumbnailEngine,
}

impl AppState {
    /// Create application state rooted at the given library directory.
    pub fn new(root: PathBuf) -> Self {
        Self {
            resolver: Arc::new(PathResolver::new(root)),
            engine: ThumbnailEngine::new(),
        }
    }
}

// =============================================================================
// Request Parameters
// =============================================================================

/// Query parameters for the listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListQueryParams {
    /// URL-encoded directory path; empty or absent falls back to the root
    #[serde(default)]
    pub path: Option<String>,
}

/// Query parameters for thumbnail requests.
#[derive(Debug, Deserialize)]
pub struct ThumbnailQueryParams {
    /// URL-encoded source image path (required)
    #[serde(default)]
    pub path: Option<String>,

    /// Requested smallest side in pixels. Kept as a raw string so
    /// non-numeric values fall back to the default instead of failing
    /// extraction.
    #[serde(default)]
    pub size: Option<String>,
}

/// Query parameters for raw image requests.
#[derive(Debug, Deserialize)]
pub struct ImageQueryParams {
    /// Image file path (required)
    #[serde(default)]
    pub path: Option<String>,
}

// =============================================================================
// Response Types
// =============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

// =============================================================================
// Error Mapping
// =============================================================================

/// Convert ListError to an HTTP response.
///
/// Any unreadable directory is the caller's fault: a bad or missing path.
impl IntoResponse for ListError {
    fn into_response(self) -> Response {
        warn!(status = 400, "Listing failed: {}", self);
        StatusCode::BAD_REQUEST.into_response()
    }
}

/// Convert ThumbnailError to an HTTP response.
///
/// - 4xx errors are logged at WARN level (client errors), 404 at DEBUG
/// - 5xx errors are logged at ERROR level (processing errors)
impl IntoResponse for ThumbnailError {
    fn into_response(self) -> Response {
        let status = match &self {
            ThumbnailError::MissingPath => StatusCode::BAD_REQUEST,
            ThumbnailError::SourceNotFound(_) => StatusCode::NOT_FOUND,
            ThumbnailError::Decode { .. }
            | ThumbnailError::Encode { .. }
            | ThumbnailError::Stage { .. }
            | ThumbnailError::Stream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(status = status.as_u16(), "Thumbnail failed: {}", self);
        } else if status == StatusCode::NOT_FOUND {
            debug!(status = status.as_u16(), "Thumbnail source missing: {}", self);
        } else {
            warn!(status = status.as_u16(), "Thumbnail rejected: {}", self);
        }

        status.into_response()
    }
}

/// Convert ImageServeError to an HTTP response.
///
/// Missing paths and disallowed extensions are both client errors on this
/// route (400, not 404), matching the listing route's status-code choice.
impl IntoResponse for ImageServeError {
    fn into_response(self) -> Response {
        let status = match &self {
            ImageServeError::NotFound(_) | ImageServeError::DisallowedExtension(_) => {
                StatusCode::BAD_REQUEST
            }
            ImageServeError::Stream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(status = status.as_u16(), "Image serve failed: {}", self);
        } else {
            warn!(status = status.as_u16(), "Image serve rejected: {}", self);
        }

        status.into_response()
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle directory listing requests.
///
/// # Endpoint
///
/// `GET /?path=<url-encoded dir>`
///
/// # Response
///
/// - `200 OK`: JSON `{"dirs": [FileEntry...], "files": [FileEntry...]}`
/// - `400 Bad Request`: the path cannot be read
pub async fn list_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQueryParams>,
) -> Result<Json<Listing>, ListError> {
    let path = state.resolver.resolve_or_root(query.path.as_deref().unwrap_or(""));
    let listing = list_directory(&path)?;
    Ok(Json(listing))
}

/// Handle thumbnail requests.
///
/// # Endpoint
///
/// `GET /thumbnail?path=<url-encoded image>&size=<pixels>`
///
/// # Query Parameters
///
/// - `path`: source image path (required)
/// - `size`: smallest side in pixels (optional, default 100; malformed
///   values silently fall back to the default)
///
/// # Response
///
/// - `200 OK`: JPEG bytes with `Content-Type: image/jpeg`
/// - `400 Bad Request`: missing or empty path
/// - `404 Not Found`: source image does not exist
/// - `500 Internal Server Error`: decode, encode, or artifact failure
///
/// The rendered thumbnail is staged as a uniquely named file next to the
/// source, streamed with file-serving semantics (conditional and range
/// requests supported), and removed when this handler returns. The
/// response body keeps its own open handle to the unlinked file.
pub async fn thumbnail_handler(
    State(state): State<AppState>,
    Query(query): Query<ThumbnailQueryParams>,
    request: Request,
) -> Result<Response, ThumbnailError> {
    let source = state
        .resolver
        .resolve_existing(query.path.as_deref().unwrap_or(""))?;

    let smallest_side = effective_size(query.size.as_deref());

    let data = state.engine.render(&source, smallest_side)?;

    let dir = source.parent().unwrap_or_else(|| Path::new("."));
    let artifact = ThumbnailArtifact::stage(dir, &data).map_err(|source| {
        ThumbnailError::Stage {
            dir: dir.to_path_buf(),
            source,
        }
    })?;

    let response = ServeFile::new(artifact.path())
        .try_call(request)
        .await
        .map_err(|source| ThumbnailError::Stream {
            path: artifact.path().to_path_buf(),
            source,
        })?;

    debug!(
        source = %source.display(),
        size = smallest_side,
        bytes = data.len(),
        "thumbnail served"
    );

    Ok(response.map(axum::body::Body::new))
}

/// Handle raw image requests.
///
/// # Endpoint
///
/// `GET /image?path=<image file>`
///
/// # Response
///
/// - `200 OK`: the file's bytes, untransformed
/// - `400 Bad Request`: missing/nonexistent path or extension not in the
///   allowlist (`jpg`, `jpeg`, `png`, case-insensitive)
pub async fn image_handler(
    Query(query): Query<ImageQueryParams>,
    request: Request,
) -> Result<Response, ImageServeError> {
    let raw = query.path.as_deref().unwrap_or("");
    let path = PathBuf::from(raw);

    if raw.is_empty() || !path.exists() {
        return Err(ImageServeError::NotFound(path));
    }
    if !is_allowed_image(&path) {
        return Err(ImageServeError::DisallowedExtension(path));
    }

    let response = ServeFile::new(&path)
        .try_call(request)
        .await
        .map_err(|source| ImageServeError::Stream {
            path: path.clone(),
            source,
        })?;

    debug!(path = %path.display(), "image served");

    Ok(response.map(axum::body::Body::new))
}

/// Handle health check requests.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// Tests
// =============================================================================
