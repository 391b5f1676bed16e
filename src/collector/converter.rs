//! Plist conversion boundary
//!
//! Command files are property lists, binary or XML. Rather than parsing them in-process, the
//! collector hands each path to a [`PlistConverter`] and works with the JSON it returns.
//!
//! - [`PlutilConverter`] shells out to `plutil -convert json <file> -o -` (macOS)
//! - [`JsonFileConverter`] reads files that are already JSON
//! - any `Fn(&Path) -> Result<Option<Value>, KeydocError>` closure also works, which keeps
//!   collector tests free of subprocesses

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::Value;

use crate::config::DEFAULT_CONVERTER;
use crate::error::KeydocError;

// ============================================================================
// Converter Interface
// ============================================================================

/// Turn one command file into structured data.
///
/// `Ok(None)` means the file could not be converted and should be skipped. `Err` is reserved
/// for problems that make every further conversion pointless, such as a missing converter
/// binary.
pub trait PlistConverter {
    fn convert(&self, path: &Path) -> Result<Option<Value>, KeydocError>;
}

impl<F> PlistConverter for F
where
    F: Fn(&Path) -> Result<Option<Value>, KeydocError>,
{
    fn convert(&self, path: &Path) -> Result<Option<Value>, KeydocError> {
        self(path)
    }
}

// ============================================================================
// plutil
// ============================================================================

/// Out-of-process conversion through `plutil` (or a compatible program).
///
/// One process per file, run to completion with no timeout.
#[derive(Debug, Clone)]
pub struct PlutilConverter {
    program: PathBuf,
}

impl Default for PlutilConverter {
    fn default() -> Self {
        Self::new(DEFAULT_CONVERTER)
    }
}

impl PlutilConverter {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl PlistConverter for PlutilConverter {
    fn convert(&self, path: &Path) -> Result<Option<Value>, KeydocError> {
        let output = Command::new(&self.program)
            .arg("-convert")
            .arg("json")
            .arg(path)
            .arg("-o")
            .arg("-")
            .output()
            .map_err(|source| KeydocError::ConverterUnavailable {
                program: self.program.clone(),
                source,
            })?;

        if !output.stderr.is_empty() || !output.status.success() {
            tracing::debug!(
                path = %path.display(),
                status = ?output.status.code(),
                stderr = %String::from_utf8_lossy(&output.stderr).trim_end(),
                "converter rejected file"
            );
            return Ok(None);
        }

        Ok(parse_json(path, &output.stdout))
    }
}

// ============================================================================
// Plain JSON
// ============================================================================

/// Reads command files that were exported as JSON ahead of time.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFileConverter;

impl PlistConverter for JsonFileConverter {
    fn convert(&self, path: &Path) -> Result<Option<Value>, KeydocError> {
        match fs::read(path) {
            Ok(bytes) => Ok(parse_json(path, &bytes)),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "cannot read command file");
                Ok(None)
            }
        }
    }
}

fn parse_json(path: &Path, bytes: &[u8]) -> Option<Value> {
    match serde_json::from_slice(bytes) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "converter output is not JSON");
            None
        }
    }
}
