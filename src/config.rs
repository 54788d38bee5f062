//! Configuration management for picshelf.
//!
//! This module provides a flexible configuration system that supports:
//! - Command-line arguments via clap
//! - Environment variables with `PICSHELF_` prefix
//! - Sensible defaults for all optional settings
//!
//! # Environment Variables
//!
//! - `PICSHELF_HOST` - Server bind address (default: 0.0.0.0)
//! - `PICSHELF_PORT` - Server port (default: 10000)
//! - `PICSHELF_ROOT` - Image library root directory (required)
//! - `PICSHELF_CORS_ORIGINS` - Allowed CORS origins, comma-separated

use std::path::PathBuf;

use clap::Parser;

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_PORT: u16 = 10000;

// =============================================================================
// CLI Arguments
// =============================================================================

/// picshelf - A local image library server.
///
/// Serves directory listings, original images, and on-demand thumbnails
/// from a local directory tree over HTTP.
#[derive(Parser, Debug, Clone)]
#[command(name = "picshelf")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    // =========================================================================
    // Server Configuration
    // =========================================================================
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "PICSHELF_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "PICSHELF_PORT")]
    pub port: u16,

    // =========================================================================
    // Library Configuration
    // =========================================================================
    /// Root directory of the image library.
    ///
    /// Listing requests that omit `path` fall back to this directory.
    #[arg(long, env = "PICSHELF_ROOT")]
    pub root: PathBuf,

    // =========================================================================
    // CORS Configuration
    // =========================================================================
    /// Allowed CORS origins (comma-separated).
    ///
    /// If not specified, allows any origin.
    #[arg(long, env = "PICSHELF_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,

    // =========================================================================
    // Logging Configuration
    // =========================================================================
    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.root.as_os_str().is_empty() {
            return Err("Library root is required. Set --root or PICSHELF_ROOT".to_string());
        }

        if !self.root.is_dir() {
            return Err(format!(
                "Library root is not a directory: {}",
                self.root.display()
            ));
        }

        Ok(())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// Tests
// =============================================================================
