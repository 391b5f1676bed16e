//! Library error type
//!
//! Only conditions that abort a run live here. Per-file problems (unparsable plist, disabled
//! command, unknown script language) are not errors: the affected record is skipped or left
//! with an empty field.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a documentation run
#[derive(Debug, Error)]
pub enum KeydocError {
    #[error("cannot read command directory '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("plist converter '{}' could not be started: {source}", .program.display())]
    ConverterUnavailable {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
