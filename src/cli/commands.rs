//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use crate::collector::{self, CommandRecord, JsonFileConverter, PlistConverter, PlutilConverter};
use crate::config::DocConfig;
use crate::render;
use crate::version::KEYDOC_VERSION;

use super::{Cli, CliError, CliResult, ExitCode};

/// Collect the commands under `cli.dir` and write the HTML table.
pub fn generate(cli: &Cli) -> CliResult<ExitCode> {
    let dir = collector::resolve_commands_dir(&cli.dir);
    let config = cli.doc_config();
    tracing::debug!(version = KEYDOC_VERSION, dir = %dir.display(), "generating shortcut table");

    let records = if cli.json {
        collect_records(&dir, &JsonFileConverter, &config)?
    } else {
        let converter = PlutilConverter::new(&config.converter_program);
        collect_records(&dir, &converter, &config)?
    };
    tracing::info!(commands = records.len(), "collected commands");

    match &cli.output {
        Some(path) => write_file(path, &records, &config)?,
        None => render::write_html(&records, &config, io::stdout().lock())
            .map_err(|e| CliError::failure(format!("Error writing output: {}", e)))?,
    }

    Ok(ExitCode::SUCCESS)
}

fn collect_records(dir: &Path, converter: &dyn PlistConverter, config: &DocConfig) -> CliResult<Vec<CommandRecord>> {
    collector::collect(dir, converter, config).map_err(|e| CliError::failure(format!("Error: {}", e)))
}

fn write_file(path: &Path, records: &[CommandRecord], config: &DocConfig) -> CliResult<()> {
    let file = File::create(path)
        .map_err(|e| CliError::failure(format!("Error creating '{}': {}", path.display(), e)))?;

    render::write_html(records, config, BufWriter::new(file))
        .map_err(|e| CliError::failure(format!("Error writing '{}': {}", path.display(), e)))
}
