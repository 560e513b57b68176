//! Cast orchestration
//!
//! Drives every field of a schema, in declaration order, through the field
//! resolution policy and collects the results into an ordered record. The
//! first fatal error anywhere, including inside nested recursion, aborts the
//! call; a partial record is never returned.

use super::errors::{CastError, CastResult};
use crate::observability::{Event, Logger, Severity};
use crate::schema::{CastType, FieldSpec, Primitive, Schema, ShapeRegistry};
use crate::value::{Castable, Record, Value};

/// Per-call options.
#[derive(Debug, Clone, Default)]
pub struct CastOptions {
    /// Final, already-typed values used when a field fails to cast.
    /// They take precedence over defaults and are not cast again.
    pub merge: Record,
}

impl CastOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_merge(merge: Record) -> Self {
        Self { merge }
    }
}

static NO_SHAPES: ShapeRegistry = ShapeRegistry::new();

/// Field options used when a bare value is cast without a field around it.
pub(super) static BARE_FIELD: FieldSpec = FieldSpec {
    cast_type: CastType::Primitive(Primitive::Any),
    from: None,
    default: None,
    required: false,
    transform: None,
    valid: None,
};

/// Schema-driven caster.
///
/// Holds only a reference to the shape registry; every call is
/// self-contained, so one caster can serve any number of calls.
#[derive(Debug, Clone, Copy)]
pub struct Caster<'a> {
    pub(super) shapes: &'a ShapeRegistry,
}

impl<'a> Caster<'a> {
    /// Creates a caster that resolves named types against `shapes`.
    pub fn new(shapes: &'a ShapeRegistry) -> Self {
        Self { shapes }
    }

    /// Creates a caster with no named shapes.
    pub fn standalone() -> Caster<'static> {
        Caster { shapes: &NO_SHAPES }
    }

    /// Casts `input` against `schema`.
    ///
    /// # Errors
    ///
    /// Returns `CastError` if the input is not a container, or if any field
    /// fails fatally per the field resolution policy.
    pub fn cast(
        &self,
        input: &Value,
        schema: &Schema,
        options: &CastOptions,
    ) -> CastResult<Record> {
        let tracing = Logger::enabled(Severity::Trace);
        if tracing {
            let fields = schema.len().to_string();
            Logger::trace(Event::CastStart.as_str(), &[("fields", fields.as_str())]);
        }

        let result = match input.as_container() {
            Some(container) => self.cast_container(container, schema, options),
            None => Err(CastError::invalid("record or map", input.describe())),
        };

        if tracing {
            match &result {
                Ok(output) => {
                    let fields = output.len().to_string();
                    Logger::trace(Event::CastComplete.as_str(), &[("fields", fields.as_str())]);
                }
                Err(e) => {
                    let reason = e.to_string();
                    Logger::trace(
                        Event::CastFailed.as_str(),
                        &[("code", e.code()), ("reason", reason.as_str())],
                    );
                }
            }
        }
        result
    }

    /// Casts a container against `schema` without the entry-point checks.
    pub fn cast_container(
        &self,
        container: &dyn Castable,
        schema: &Schema,
        options: &CastOptions,
    ) -> CastResult<Record> {
        let mut output = Record::with_capacity(schema.len());
        for (name, field) in schema.fields() {
            self.resolve_field(container, name, field, options, &mut output)?;
        }
        Ok(output)
    }

    /// Casts a bare value against a single type.
    pub fn cast_value(&self, raw: &Value, cast_type: &CastType) -> CastResult<Value> {
        self.dispatch(raw, cast_type, "", &BARE_FIELD)
    }
}
