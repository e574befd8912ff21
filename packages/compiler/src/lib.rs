#![deny(clippy::all)]

/**
 * JSX i18n - message extraction
 *
 * Serializes JSX translation blocks into canonical message strings for a
 * translation catalog.
 */

pub mod config;
pub mod error;
pub mod i18n;
pub mod jsx;
pub mod logging;
pub mod parse_util;

// Re-exports
pub use config::ExtractorConfig;
pub use error::{ExtractionError, Result};
pub use i18n::{ExtractedMessage, MessageExtractor};

/// Crate version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
