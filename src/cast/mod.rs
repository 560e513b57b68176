//! Cast engine
//!
//! Converts untyped input into schema-shaped, ordered output, merges partial
//! input into a previous output, and renders output back into plain form.
//!
//! # Design Principles
//!
//! - All-or-nothing: the first fatal error aborts the call, no partial output
//! - Deterministic: cast output follows schema declaration order, dump
//!   output is sorted by key
//! - Pure: no I/O, no shared mutable state; inputs are never mutated
//! - Caller-supplied transforms run unguarded; their panics propagate
//!
//! # Usage
//!
//! ```
//! use schemacast::cast::{self, CastOptions};
//! use schemacast::schema::{FieldSpec, Schema};
//! use schemacast::value::{Record, Value};
//!
//! let schema = Schema::new()
//!     .field("id", FieldSpec::integer().required())
//!     .field("archived", FieldSpec::boolean().default(false));
//!
//! let input = Value::from(serde_json::json!({"id": "42"}));
//! let output = cast::cast(&input, &schema, &CastOptions::default()).unwrap();
//! assert_eq!(
//!     output,
//!     Record::from([("id", Value::Int(42)), ("archived", Value::Bool(false))])
//! );
//! ```

mod caster;
mod dispatcher;
mod dump;
mod errors;
mod policy;
mod resolver;
mod update;

pub use caster::{CastOptions, Caster};
pub use errors::{CastError, CastResult};
pub use resolver::{resolve, resolve_path};
pub use update::update_value;

use crate::observability::{Event, Logger, Severity};
use crate::schema::{CastType, Schema};
use crate::value::{Dumpable, Record, Updatable, Value};

/// Casts `input` against `schema` with no named shapes available.
pub fn cast(input: &Value, schema: &Schema, options: &CastOptions) -> CastResult<Record> {
    Caster::standalone().cast(input, schema, options)
}

/// Casts a bare value against a single type.
pub fn cast_value(raw: &Value, cast_type: &CastType) -> CastResult<Value> {
    Caster::standalone().cast_value(raw, cast_type)
}

/// Merges `new` into `old`, returning the merged output.
pub fn update(old: &Record, new: &Record) -> Record {
    let merged = old.updated(new);
    if Logger::enabled(Severity::Trace) {
        let keys = new.len().to_string();
        Logger::trace(Event::UpdateComplete.as_str(), &[("keys", keys.as_str())]);
    }
    merged
}

/// Renders `output` into a plain, key-sorted record.
pub fn dump(output: &Record) -> CastResult<Record> {
    let result = output.dump();
    match &result {
        Ok(plain) if Logger::enabled(Severity::Trace) => {
            let keys = plain.len().to_string();
            Logger::trace(Event::DumpComplete.as_str(), &[("keys", keys.as_str())]);
        }
        Err(e) if Logger::enabled(Severity::Trace) => {
            let reason = e.to_string();
            Logger::trace(
                Event::DumpFailed.as_str(),
                &[("code", e.code()), ("reason", reason.as_str())],
            );
        }
        _ => {}
    }
    result
}
