//! Sort-spec converter
//!
//! Accepted forms:
//! - `"field"` (ascending)
//! - `"-field"` (descending)
//! - `"field:asc"` / `"field:desc"`
//! - `["field", "desc"]`
//!
//! Dumps as `"field:direction"`.

use super::Converter;
use crate::cast::{CastError, CastResult};
use crate::schema::FieldSpec;
use crate::value::{SortDirection, SortSpec, Value};

pub struct SortConverter;

impl SortConverter {
    fn parse_text(text: &str) -> Option<SortSpec> {
        let text = text.trim();
        if let Some(field) = text.strip_prefix('-') {
            return Self::named(field, SortDirection::Desc);
        }
        match text.split_once(':') {
            Some((field, direction)) => Self::named(field, SortDirection::parse(direction)?),
            None => Self::named(text, SortDirection::Asc),
        }
    }

    fn named(field: &str, direction: SortDirection) -> Option<SortSpec> {
        let field = field.trim();
        if field.is_empty() {
            return None;
        }
        Some(SortSpec {
            field: field.to_string(),
            direction,
        })
    }
}

impl Converter for SortConverter {
    fn cast(&self, raw: &Value, _field: &FieldSpec) -> CastResult<Value> {
        let parsed = match raw {
            Value::Sort(spec) => Some(spec.clone()),
            Value::Str(s) | Value::Symbol(s) => Self::parse_text(s),
            Value::Array(parts) => match parts.as_slice() {
                [field, direction] => match (field.canonical_text(), direction.canonical_text()) {
                    (Some(f), Some(d)) => {
                        SortDirection::parse(&d).and_then(|dir| Self::named(&f, dir))
                    }
                    _ => None,
                },
                _ => None,
            },
            _ => None,
        };
        parsed
            .map(Value::Sort)
            .ok_or_else(|| CastError::invalid("sort spec", raw.describe()))
    }

    fn dump(&self, value: &Value) -> CastResult<Value> {
        match value {
            Value::Sort(spec) => Ok(Value::Str(spec.to_string())),
            other => Ok(other.clone()),
        }
    }
}
