//! HTML table rendering
//!
//! One header row, then one row per command that has a usable shortcut:
//!
//! ```text
//! <table><tr><th>Keys</th><th>Command</th><th>Comment</th></tr>
//! <tr><td>⌘A</td><td>Save As</td><td></td></tr>
//! </table>
//! ```
//!
//! Commands without a key-equivalent are left out. Output is plain UTF-8.

use std::io::{self, Write};

use crate::collector::CommandRecord;
use crate::config::DocConfig;
use crate::keycode::{self, Glyph};

const TABLE_HEADER: &str = "<table><tr><th>Keys</th><th>Command</th><th>Comment</th></tr>";
const TABLE_FOOTER: &str = "</table>";

/// Escape text for use inside an HTML element or attribute.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the table row for a record, or `None` when it has no displayable shortcut.
pub fn render_row(record: &CommandRecord, config: &DocConfig) -> Option<String> {
    if record.raw_key_combo.is_empty() {
        return None;
    }

    let glyphs = keycode::decode(&record.raw_key_combo);
    if glyphs.is_blank() {
        return None;
    }
    let keys = glyphs.to_string();

    let cell = |text: &str| {
        if config.escape_html {
            escape_html(text)
        } else {
            text.to_string()
        }
    };

    Some(format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
        cell(&keys),
        cell(&record.name),
        cell(&record.docstring)
    ))
}

/// Table explaining the fixed modifier and key glyphs.
pub fn render_legend() -> String {
    let mut out = String::from("<table><tr><th>Glyph</th><th>Key</th></tr>\n");
    for glyph in Glyph::LEGEND {
        out.push_str(&format!("<tr><td>{}</td><td>{}</td></tr>\n", glyph.as_str(), glyph.label()));
    }
    out.push_str(TABLE_FOOTER);
    out.push('\n');
    out
}

/// Render the full document as a string.
pub fn render(records: &[CommandRecord], config: &DocConfig) -> String {
    let mut out = String::new();
    out.push_str(TABLE_HEADER);
    out.push('\n');

    for row in records.iter().filter_map(|record| render_row(record, config)) {
        out.push_str(&row);
        out.push('\n');
    }

    out.push_str(TABLE_FOOTER);
    out.push('\n');

    if config.legend {
        out.push_str(&render_legend());
    }
    out
}

/// Render the document and write it as UTF-8 bytes.
pub fn write_html(records: &[CommandRecord], config: &DocConfig, mut writer: impl Write) -> io::Result<()> {
    writer.write_all(render(records, config).as_bytes())?;
    writer.flush()
}
