//! Field resolution policy
//!
//! For one field: resolve and cast the raw value; on failure fall back to
//! the call's override, then the field default; with no fallback, decide
//! between a fatal error and omitting the field.
//!
//! Nested-schema fields are mandatory even when not marked `required`,
//! while primitive, array and shape fields are optional by default.

use super::caster::{CastOptions, Caster};
use super::errors::{CastError, CastResult};
use super::resolver;
use crate::observability::{Event, Logger, Severity};
use crate::schema::{FieldSpec, KeySpec};
use crate::value::{Castable, Key, Record, Value};

impl Caster<'_> {
    /// Resolves one field into `output`.
    pub(super) fn resolve_field(
        &self,
        container: &dyn Castable,
        name: &str,
        field: &FieldSpec,
        options: &CastOptions,
        output: &mut Record,
    ) -> CastResult<()> {
        let default_key;
        let key_spec = match &field.from {
            Some(spec) => spec,
            None => {
                default_key = KeySpec::Key(Key::string(name));
                &default_key
            }
        };

        let reason = match resolver::resolve_and_cast(container, key_spec, &mut |raw| {
            self.dispatch(raw, &field.cast_type, name, field)
        }) {
            Ok(value) => {
                output.push(name, apply_transform(field, value));
                return Ok(());
            }
            Err(reason) => reason,
        };

        let fallback = match options.merge.get(name) {
            Some(value) => Some(("merge", value)),
            None => field.default.as_ref().map(|value| ("default", value)),
        };

        if let Some((source, value)) = fallback {
            trace_field(Event::FieldFallback, name, source, &reason);
            output.push(name, apply_transform(field, value.clone()));
            return Ok(());
        }

        if field.cast_type.is_nested() || field.required {
            return Err(CastError::required(name, reason));
        }

        trace_field(Event::FieldOmitted, name, "none", &reason);
        Ok(())
    }
}

/// Applies the field transform. Array values are transformed element by
/// element when the field is array-typed.
fn apply_transform(field: &FieldSpec, value: Value) -> Value {
    let Some(transform) = &field.transform else {
        return value;
    };
    match value {
        Value::Array(items) if field.cast_type.is_array() => {
            Value::Array(items.into_iter().map(|item| transform.apply(item)).collect())
        }
        other => transform.apply(other),
    }
}

fn trace_field(event: Event, name: &str, source: &str, reason: &CastError) {
    if Logger::enabled(Severity::Trace) {
        let reason = reason.to_string();
        Logger::trace(
            event.as_str(),
            &[("field", name), ("reason", reason.as_str()), ("source", source)],
        );
    }
}
