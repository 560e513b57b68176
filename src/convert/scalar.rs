//! Scalar converters: boolean, integer, float, string, symbol, any

use super::Converter;
use crate::cast::{CastError, CastResult};
use crate::schema::FieldSpec;
use crate::value::Value;

/// Boolean converter.
///
/// Accepts booleans, `1`/`0`, and the strings `true`/`false`/`1`/`0`/`yes`/`no`
/// in any case.
pub struct BoolConverter;

impl Converter for BoolConverter {
    fn cast(&self, raw: &Value, _field: &FieldSpec) -> CastResult<Value> {
        match raw {
            Value::Bool(b) => Ok(Value::Bool(*b)),
            Value::Int(1) => Ok(Value::Bool(true)),
            Value::Int(0) => Ok(Value::Bool(false)),
            Value::Str(s) | Value::Symbol(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(Value::Bool(true)),
                "false" | "0" | "no" => Ok(Value::Bool(false)),
                _ => Err(CastError::invalid("boolean", raw.describe())),
            },
            _ => Err(CastError::invalid("boolean", raw.describe())),
        }
    }
}

/// Integer converter.
///
/// Accepts integers, integral floats within range, and decimal strings.
pub struct IntConverter;

impl Converter for IntConverter {
    fn cast(&self, raw: &Value, _field: &FieldSpec) -> CastResult<Value> {
        match raw {
            Value::Int(i) => Ok(Value::Int(*i)),
            Value::Float(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                Ok(Value::Int(*f as i64))
            }
            Value::Str(s) => s
                .trim()
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| CastError::invalid("integer", raw.describe())),
            _ => Err(CastError::invalid("integer", raw.describe())),
        }
    }
}

/// Float converter.
///
/// Accepts floats, integers and numeric strings. Non-finite values are
/// rejected on cast and on dump.
pub struct FloatConverter;

impl Converter for FloatConverter {
    fn cast(&self, raw: &Value, _field: &FieldSpec) -> CastResult<Value> {
        let parsed = match raw {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            Value::Str(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        match parsed {
            Some(f) if f.is_finite() => Ok(Value::Float(f)),
            _ => Err(CastError::invalid("float", raw.describe())),
        }
    }

    fn dump(&self, value: &Value) -> CastResult<Value> {
        match value {
            Value::Float(f) if !f.is_finite() => {
                Err(CastError::invalid("finite float", value.describe()))
            }
            other => Ok(other.clone()),
        }
    }
}

/// String converter.
///
/// Accepts strings, symbols, numbers and booleans, rendered as text.
pub struct StringConverter;

impl Converter for StringConverter {
    fn cast(&self, raw: &Value, _field: &FieldSpec) -> CastResult<Value> {
        match raw {
            Value::Str(_) | Value::Symbol(_) | Value::Int(_) | Value::Float(_) | Value::Bool(_) => {
                Ok(Value::Str(raw.canonical_text().unwrap_or_default()))
            }
            _ => Err(CastError::invalid("string", raw.describe())),
        }
    }
}

/// Symbolic-name converter.
///
/// Accepts symbols and non-empty strings. Dumps as a string.
pub struct SymbolConverter;

impl Converter for SymbolConverter {
    fn cast(&self, raw: &Value, _field: &FieldSpec) -> CastResult<Value> {
        match raw {
            Value::Symbol(s) => Ok(Value::Symbol(s.clone())),
            Value::Str(s) if !s.trim().is_empty() => Ok(Value::Symbol(s.trim().to_string())),
            _ => Err(CastError::invalid("symbol", raw.describe())),
        }
    }

    fn dump(&self, value: &Value) -> CastResult<Value> {
        match value {
            Value::Symbol(s) => Ok(Value::Str(s.clone())),
            other => Ok(other.clone()),
        }
    }
}

/// Pass-through converter; no validation.
pub struct AnyConverter;

impl Converter for AnyConverter {
    fn cast(&self, raw: &Value, _field: &FieldSpec) -> CastResult<Value> {
        Ok(raw.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Primitive;

    fn field() -> FieldSpec {
        FieldSpec::new(Primitive::Any)
    }

    #[test]
    fn test_bool_cast() {
        let c = BoolConverter;
        assert_eq!(c.cast(&Value::from("true"), &field()), Ok(Value::Bool(true)));
        assert_eq!(c.cast(&Value::from(" No "), &field()), Ok(Value::Bool(false)));
        assert_eq!(c.cast(&Value::Int(1), &field()), Ok(Value::Bool(true)));
        assert!(c.cast(&Value::Int(2), &field()).is_err());
        assert!(c.cast(&Value::from("maybe"), &field()).is_err());
    }

    #[test]
    fn test_int_cast() {
        let c = IntConverter;
        assert_eq!(c.cast(&Value::Int(1), &field()), Ok(Value::Int(1)));
        assert_eq!(c.cast(&Value::from(" 42 "), &field()), Ok(Value::Int(42)));
        assert_eq!(c.cast(&Value::Float(3.0), &field()), Ok(Value::Int(3)));
        assert!(c.cast(&Value::Float(3.5), &field()).is_err());
        assert!(c.cast(&Value::from("not-a-number"), &field()).is_err());
        assert!(c.cast(&Value::Bool(true), &field()).is_err());
    }

    #[test]
    fn test_float_cast_and_dump() {
        let c = FloatConverter;
        assert_eq!(c.cast(&Value::Int(2), &field()), Ok(Value::Float(2.0)));
        assert_eq!(c.cast(&Value::from("1.25"), &field()), Ok(Value::Float(1.25)));
        assert!(c.cast(&Value::from("NaN"), &field()).is_err());
        assert!(c.dump(&Value::Float(f64::INFINITY)).is_err());
        assert_eq!(c.dump(&Value::Float(0.5)), Ok(Value::Float(0.5)));
    }

    #[test]
    fn test_string_cast() {
        let c = StringConverter;
        assert_eq!(c.cast(&Value::Int(7), &field()), Ok(Value::from("7")));
        assert_eq!(c.cast(&Value::Symbol("a".into()), &field()), Ok(Value::from("a")));
        assert!(c.cast(&Value::Array(vec![]), &field()).is_err());
        assert!(c.cast(&Value::Null, &field()).is_err());
    }

    #[test]
    fn test_symbol_cast_and_dump() {
        let c = SymbolConverter;
        assert_eq!(c.cast(&Value::from("admin"), &field()), Ok(Value::Symbol("admin".into())));
        assert!(c.cast(&Value::from("  "), &field()).is_err());
        assert_eq!(c.dump(&Value::Symbol("admin".into())), Ok(Value::from("admin")));
    }
}
