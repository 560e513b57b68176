//! CLI command implementations
//!
//! Each command reads its JSON documents from files, runs one engine call
//! and produces the JSON `data` of the response. `run_command` wraps the
//! result in the response envelope on stdout.

use std::path::Path;

use serde_json::Value as Json;

use crate::cast::{self, CastOptions, Caster};
use crate::config::Config;
use crate::schema::SchemaLoader;
use crate::value::{Record, Value};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{read_document, write_error, write_response};

/// Run a CLI command, writing the response envelope to stdout
pub fn run_command(cmd: Command) -> CliResult<()> {
    let result = match cmd {
        Command::Cast {
            schema,
            input,
            merge,
            config,
        } => cast_command(&schema, &input, merge.as_deref(), config.as_deref()),
        Command::Update { old, new } => update_command(&old, &new),
        Command::Dump { input } => dump_command(&input),
    };

    match result {
        Ok(data) => write_response(data),
        Err(e) => {
            write_error(e.code_str(), e.message())?;
            Err(e)
        }
    }
}

/// Cast the document at `input_path` against the schema at `schema_path`.
///
/// Named shapes come from the configured `shapes_dir`. The optional merge
/// document supplies per-field override values.
pub fn cast_command(
    schema_path: &Path,
    input_path: &Path,
    merge_path: Option<&Path>,
    config_path: Option<&Path>,
) -> CliResult<Json> {
    let config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.apply()?;

    let registry = config.shape_registry()?;
    let schema = SchemaLoader::from_file(schema_path)?;
    let input = Value::from(read_document(input_path)?);

    let options = match merge_path {
        Some(path) => CastOptions::with_merge(read_record(path)?),
        None => CastOptions::default(),
    };

    let output = Caster::new(&registry).cast(&input, &schema, &options)?;
    Ok(output.to_json())
}

/// Merge the partial document at `new_path` into the output at `old_path`.
pub fn update_command(old_path: &Path, new_path: &Path) -> CliResult<Json> {
    let old = read_record(old_path)?;
    let new = read_record(new_path)?;
    Ok(cast::update(&old, &new).to_json())
}

/// Render the output at `input_path` as plain, key-sorted JSON.
pub fn dump_command(input_path: &Path) -> CliResult<Json> {
    let output = read_record(input_path)?;
    Ok(cast::dump(&output)?.to_json())
}

fn read_record(path: &Path) -> CliResult<Record> {
    Record::from_json(read_document(path)?).ok_or_else(|| {
        CliError::invalid_input(format!("'{}' must contain a JSON object", path.display()))
    })
}
