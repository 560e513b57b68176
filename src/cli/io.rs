//! JSON I/O handling for CLI
//!
//! - Input: JSON documents read from files
//! - Output: single JSON object via stdout
//! - UTF-8 only

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde_json::Value;

use super::errors::{CliError, CliResult};

/// Read a JSON document from a file
pub fn read_document(path: &Path) -> CliResult<Value> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::io_error(format!("Failed to read '{}': {}", path.display(), e)))?;

    if content.trim().is_empty() {
        return Err(CliError::invalid_input(format!(
            "'{}' is empty",
            path.display()
        )));
    }

    serde_json::from_str(&content).map_err(|e| {
        CliError::invalid_input(format!("Invalid JSON in '{}': {}", path.display(), e))
    })
}

/// Build the success envelope
pub fn ok_response(data: Value) -> Value {
    serde_json::json!({
        "status": "ok",
        "data": data
    })
}

/// Build the error envelope
pub fn error_response(code: &str, message: &str) -> Value {
    serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    })
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    write_json(&ok_response(data))
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    write_json(&error_response(code, message))
}

fn write_json(response: &Value) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
