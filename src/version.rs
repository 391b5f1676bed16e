//! keydoc version information.
//!
//! Exposes the crate version as a single constant so the CLI (`--version`) and the startup log line
//! agree on the same value.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.
//! - Prefer this constant over repeating `env!("CARGO_PKG_VERSION")` in multiple places.

/// The keydoc version string (for example, `0.1.0`).
pub const KEYDOC_VERSION: &str = env!("CARGO_PKG_VERSION");
