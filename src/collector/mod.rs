//! Command collection
//!
//! Walks a bundle's command directory and turns every enabled command file into a
//! [`CommandRecord`]. Entries are visited in file-name order so repeated runs over the same
//! directory produce the same table.
//!
//! Files the converter cannot handle, and commands marked `isDisabled`, are skipped without
//! failing the run. Only an unreadable directory or a missing converter aborts.

pub mod converter;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::config::DocConfig;
use crate::docstring;
use crate::error::KeydocError;

pub use converter::{JsonFileConverter, PlistConverter, PlutilConverter};

/// Subdirectory of a bundle that holds command files.
pub const COMMANDS_DIR: &str = "Commands";

/// One documented command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRecord {
    /// Key-equivalent as stored, possibly empty
    pub raw_key_combo: String,
    pub name: String,
    pub docstring: String,
}

/// Fields of a converted command file that matter here
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommandSource {
    #[serde(default)]
    key_equivalent: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    command: Option<String>,
    #[serde(default, deserialize_with = "deserialize_truthy")]
    is_disabled: bool,
}

fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(is_truthy(&value))
}

/// Loose truthiness: null, `false`, zero, and empty strings/arrays/objects are false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Use `path/Commands` when `path` is a bundle root, otherwise `path` itself.
pub fn resolve_commands_dir(path: &Path) -> PathBuf {
    let commands = path.join(COMMANDS_DIR);
    if commands.is_dir() {
        tracing::info!(dir = %commands.display(), "using bundle command directory");
        commands
    } else {
        path.to_path_buf()
    }
}

/// Collect a record for every enabled command in `dir`.
pub fn collect(dir: &Path, converter: &dyn PlistConverter, config: &DocConfig) -> Result<Vec<CommandRecord>, KeydocError> {
    let read_dir_error = |source| KeydocError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        paths.push(entry.map_err(read_dir_error)?.path());
    }
    paths.sort();

    let mut records = Vec::new();
    for path in paths {
        let Some(value) = converter.convert(&path)? else {
            continue;
        };
        if !value.is_object() || !is_truthy(&value) {
            tracing::debug!(path = %path.display(), "no command data");
            continue;
        }

        let source: CommandSource = match serde_json::from_value(value) {
            Ok(source) => source,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping malformed command");
                continue;
            }
        };
        if source.is_disabled {
            tracing::debug!(path = %path.display(), "skipping disabled command");
            continue;
        }

        records.push(CommandRecord {
            raw_key_combo: source.key_equivalent.unwrap_or_default(),
            name: source.name.unwrap_or_else(|| config.missing_name.clone()),
            docstring: docstring::extract(source.command.as_deref().unwrap_or_default()),
        });
    }

    Ok(records)
}
