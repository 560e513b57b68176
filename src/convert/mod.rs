//! Leaf converters
//!
//! One converter per primitive type. Each parses a raw value into its typed
//! form (`cast`), renders a typed value back into plain form (`dump`) and
//! merges two leaf values (`update`, replacement unless overridden).
//!
//! Converters are stateless and independent of each other.

mod enumeration;
mod scalar;
mod sort;
mod temporal;

pub use enumeration::EnumConverter;
pub use scalar::{
    AnyConverter, BoolConverter, FloatConverter, IntConverter, StringConverter, SymbolConverter,
};
pub use sort::SortConverter;
pub use temporal::{DateConverter, DateTimeConverter};

use crate::cast::CastResult;
use crate::schema::{FieldSpec, Primitive};
use crate::value::Value;

/// Leaf converter contract.
pub trait Converter: Sync {
    /// Parses `raw` into the converter's type. `field` carries type-specific
    /// options such as `valid`.
    fn cast(&self, raw: &Value, field: &FieldSpec) -> CastResult<Value>;

    /// Renders a typed value as a plain value.
    fn dump(&self, value: &Value) -> CastResult<Value> {
        Ok(value.clone())
    }

    /// Merges a new leaf into an old one.
    fn update(&self, _old: &Value, new: &Value) -> Value {
        new.clone()
    }
}

/// Returns the converter for a primitive type.
pub fn converter_for(primitive: Primitive) -> &'static dyn Converter {
    match primitive {
        Primitive::Boolean => &BoolConverter,
        Primitive::Integer => &IntConverter,
        Primitive::String => &StringConverter,
        Primitive::Float => &FloatConverter,
        Primitive::Symbol => &SymbolConverter,
        Primitive::Sort => &SortConverter,
        Primitive::Enumeration => &EnumConverter,
        Primitive::Date => &DateConverter,
        Primitive::DateTime => &DateTimeConverter,
        Primitive::Any => &AnyConverter,
    }
}

/// Primitive type a typed leaf value belongs to.
fn primitive_of(value: &Value) -> Primitive {
    match value {
        Value::Bool(_) => Primitive::Boolean,
        Value::Int(_) => Primitive::Integer,
        Value::Float(_) => Primitive::Float,
        Value::Str(_) => Primitive::String,
        Value::Symbol(_) => Primitive::Symbol,
        Value::Date(_) => Primitive::Date,
        Value::DateTime(_) => Primitive::DateTime,
        Value::Sort(_) => Primitive::Sort,
        Value::Null | Value::Array(_) | Value::Record(_) | Value::Map(_) => Primitive::Any,
    }
}

/// Dumps a leaf value through the converter of its own type.
pub fn leaf_dump(value: &Value) -> CastResult<Value> {
    converter_for(primitive_of(value)).dump(value)
}

/// Updates a leaf value through the converter of the old value's type.
pub fn leaf_update(old: &Value, new: &Value) -> Value {
    converter_for(primitive_of(old)).update(old, new)
}
