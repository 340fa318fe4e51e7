// SPDX-License-Identifier: MPL-2.0
//! Logging system initialization.
//!
//! Installs a `tracing` fmt subscriber writing to stderr. The level defaults
//! to INFO and can be changed through the `RUST_LOG` environment variable,
//! e.g. `RUST_LOG=iced_gallery=debug`.

use crate::error::{Error, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Builds the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initializes the global subscriber.
///
/// Fails if a global subscriber was already installed.
pub fn init() -> Result<()> {
    fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    tracing::info!("iced_gallery v{} started", env!("CARGO_PKG_VERSION"));
    Ok(())
}
