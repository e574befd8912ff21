#![deny(clippy::all)]

/**
 * JSX i18n CLI
 *
 * Command line extraction of translation messages
 */
pub use jsx_i18n as compiler;

pub mod config;
pub mod extract_i18n;

/// CLI version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
