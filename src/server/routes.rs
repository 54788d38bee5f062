//! Router configuration for picshelf.
//!
//! This module defines the HTTP routes and applies middleware for CORS and
//! request tracing.
//!
//! # Route Structure
//!
//! ```text
//! /            - Directory listing
//! /thumbnail   - Thumbnail rendering
//! /image       - Raw image streaming
//! /health      - Health check
//! ```
//!
//! # Example
//!
//! ```ignore
//! use picshelf::server::{create_router, AppState, RouterConfig};
//!
//! let state = AppState::new("/home/me/Pictures".into());
//! let config = RouterConfig::new()
//!     .with_cors_origins(vec!["https://gallery.local".to_string()]);
//!
//! let router = create_router(state, config);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:10000").await?;
//! axum::serve(listener, router).await?;
//! ```

use std::time::Duration;

use axum::{routing::get, Router};
use http::header::CONTENT_TYPE;
use http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{health_handler, image_handler, list_handler, thumbnail_handler, AppState};

// =============================================================================
// Router Configuration
// =============================================================================

/// Configuration for the HTTP router.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Allowed CORS origins (None = allow any origin)
    pub cors_origins: Option<Vec<String>>,

    /// Whether to enable request tracing
    pub enable_tracing: bool,
}

impl RouterConfig {
    /// Create a router configuration with defaults: CORS allows any
    /// origin and tracing is enabled.
    pub fn new() -> Self {
        Self {
            cors_origins: None,
            enable_tracing: true,
        }
    }

    /// Set specific allowed CORS origins.
    ///
    /// Pass an empty vec to disallow all cross-origin requests.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Router Builder
// =============================================================================

/// Create the main application router.
///
/// Builds the complete Axum router with the listing, thumbnail, image, and
/// health routes plus CORS and optional request tracing.
pub fn create_router(state: AppState, config: RouterConfig) -> Router {
    let cors = build_cors_layer(&config);

    let router = Router::new()
        .route("/", get(list_handler))
        .route("/thumbnail", get(thumbnail_handler))
        .route("/image", get(image_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(cors);

    if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// Build the CORS layer based on configuration.
fn build_cors_layer(config: &RouterConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(86400)); // 24 hours

    match &config.cors_origins {
        None => cors.allow_origin(Any),
        Some(origins) if origins.is_empty() => {
            // No origins allowed - this effectively disables CORS
            cors
        }
        Some(origins) => {
            let parsed_origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            cors.allow_origin(parsed_origins)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
