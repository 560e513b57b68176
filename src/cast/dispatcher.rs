//! Type dispatch
//!
//! Routes a resolved raw value to the converter for its declared type:
//! a primitive leaf converter, a nested schema, an array element type, or a
//! named shape from the registry.

use super::caster::{CastOptions, Caster};
use super::errors::{CastError, CastResult};
use crate::convert;
use crate::schema::{CastType, FieldSpec};
use crate::value::Value;

impl Caster<'_> {
    /// Casts `raw` to `cast_type`.
    ///
    /// `field_name` attributes nested failures; `field` carries converter
    /// options such as the allowed values of an enumeration.
    pub(super) fn dispatch(
        &self,
        raw: &Value,
        cast_type: &CastType,
        field_name: &str,
        field: &FieldSpec,
    ) -> CastResult<Value> {
        match cast_type {
            CastType::Primitive(primitive) => convert::converter_for(*primitive).cast(raw, field),
            CastType::Nested(schema) => {
                let container = raw.as_container().ok_or_else(|| {
                    CastError::nested(field_name, CastError::invalid("record or map", raw.describe()))
                })?;
                // Overrides belong to the call that received them
                self.cast_container(container, schema, &CastOptions::default())
                    .map(Value::Record)
                    .map_err(|e| CastError::nested(field_name, e))
            }
            CastType::Array(element_type) => {
                let items = raw
                    .as_array()
                    .ok_or_else(|| CastError::invalid("array", raw.describe()))?;
                items
                    .iter()
                    .map(|item| self.dispatch(item, element_type, field_name, field))
                    .collect::<CastResult<Vec<_>>>()
                    .map(Value::Array)
                    .map_err(CastError::array_element)
            }
            CastType::Named(name) => {
                if !self.shapes.is_shape(name) {
                    return Err(CastError::UnknownCastType(name.clone()));
                }
                self.shapes
                    .cast(name, raw)
                    .map(Value::Record)
                    .map_err(|e| CastError::shape(name.as_str(), e))
            }
        }
    }
}
