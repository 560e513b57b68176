//! Enumeration converter
//!
//! The raw value must match one of the field's allowed values by canonical
//! text; the matching allowed value is returned, so `"open"` cast against
//! `[:open, :closed]` yields the symbol.

use super::Converter;
use crate::cast::{CastError, CastResult};
use crate::schema::FieldSpec;
use crate::value::Value;

pub struct EnumConverter;

impl Converter for EnumConverter {
    fn cast(&self, raw: &Value, field: &FieldSpec) -> CastResult<Value> {
        let valid = field.valid.as_deref().ok_or_else(|| {
            CastError::invalid("enumeration with allowed values", "no allowed values declared")
        })?;
        let text = raw
            .canonical_text()
            .ok_or_else(|| CastError::invalid("enumeration member", raw.describe()))?;

        valid
            .iter()
            .find(|candidate| candidate.canonical_text().as_deref() == Some(text.as_str()))
            .cloned()
            .ok_or_else(|| {
                let allowed: Vec<String> = valid.iter().filter_map(Value::canonical_text).collect();
                CastError::invalid(format!("one of [{}]", allowed.join(", ")), raw.describe())
            })
    }

    fn dump(&self, value: &Value) -> CastResult<Value> {
        match value {
            Value::Symbol(s) => Ok(Value::Str(s.clone())),
            other => Ok(other.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_field() -> FieldSpec {
        FieldSpec::enumeration([Value::Symbol("open".into()), Value::Symbol("closed".into())])
    }

    #[test]
    fn test_member_returns_allowed_value() {
        let out = EnumConverter.cast(&Value::from("open"), &status_field());
        assert_eq!(out, Ok(Value::Symbol("open".into())));
    }

    #[test]
    fn test_non_member_rejected() {
        let err = EnumConverter
            .cast(&Value::from("pending"), &status_field())
            .unwrap_err();
        assert!(err.to_string().contains("one of [open, closed]"));
    }

    #[test]
    fn test_numeric_members() {
        let field = FieldSpec::enumeration([Value::Int(1), Value::Int(2)]);
        assert_eq!(EnumConverter.cast(&Value::from("2"), &field), Ok(Value::Int(2)));
    }

    #[test]
    fn test_missing_valid_list() {
        let field = FieldSpec::new(crate::schema::Primitive::Enumeration);
        assert!(EnumConverter.cast(&Value::from("open"), &field).is_err());
    }
}
