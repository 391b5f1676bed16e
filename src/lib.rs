#![forbid(unsafe_code)]
//! keydoc: keyboard-shortcut documentation for editor command bundles
//!
//! Reads a bundle's command files (property lists), decodes each command's key-equivalent
//! into menu glyphs (`⇧⌘A`), pulls a description out of the command script, and renders
//! everything as an HTML table.
//!
//! ## Layout
//!
//! - `keycode`, `docstring`: pure decoding and extraction, no I/O
//! - `collector`: directory listing and plist conversion (the I/O boundary)
//! - `render`: HTML output
//! - `cli`: argument parsing and exit codes
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: Constant regex patterns use `.expect("INVARIANT: reason")`.

pub mod cli;
pub mod collector;
pub mod config;
pub mod docstring;
pub mod error;
pub mod keycode;
pub mod render;
pub mod version;

pub use collector::{CommandRecord, JsonFileConverter, PlistConverter, PlutilConverter, collect};
pub use config::DocConfig;
pub use error::KeydocError;
pub use keycode::{Glyph, GlyphSequence, decode};
pub use render::{render, write_html};
