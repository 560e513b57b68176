//! CLI module for schemacast
//!
//! Provides command-line interface for:
//! - cast: Cast a JSON document against a schema document
//! - update: Merge a partial document into a previous output
//! - dump: Render an output as plain, key-sorted JSON

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{cast_command, dump_command, run_command, update_command};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{error_response, ok_response, read_document, write_error, write_response};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}
