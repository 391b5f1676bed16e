//! Generation settings
//!
//! Defaults reproduce the classic bundle help table, with HTML escaping turned on.

use std::path::PathBuf;

/// Name used for commands whose plist has no `name` field.
pub const DEFAULT_MISSING_NAME: &str = "NONAME";

/// Converter executable invoked once per command file.
pub const DEFAULT_CONVERTER: &str = "plutil";

/// Settings shared by collection and rendering
#[derive(Debug, Clone)]
pub struct DocConfig {
    /// Program used to turn a plist into JSON
    pub converter_program: PathBuf,
    /// Name substituted when a command has none
    pub missing_name: String,
    /// Escape `&`, `<`, `>` and quotes in table cells
    pub escape_html: bool,
    /// Append a table explaining each modifier glyph
    pub legend: bool,
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            converter_program: PathBuf::from(DEFAULT_CONVERTER),
            missing_name: DEFAULT_MISSING_NAME.to_string(),
            escape_html: true,
            legend: false,
        }
    }
}

impl DocConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the converter executable
    pub fn with_converter_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.converter_program = program.into();
        self
    }

    /// Set the placeholder for unnamed commands
    pub fn with_missing_name(mut self, name: impl Into<String>) -> Self {
        self.missing_name = name.into();
        self
    }

    /// Toggle escaping of cell contents
    pub fn with_escape_html(mut self, escape: bool) -> Self {
        self.escape_html = escape;
        self
    }

    /// Toggle the glyph legend
    pub fn with_legend(mut self, legend: bool) -> Self {
        self.legend = legend;
        self
    }
}
