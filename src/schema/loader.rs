//! Schema loader for JSON schema documents
//!
//! Document layout:
//!
//! ```json
//! {
//!   "fields": [
//!     { "name": "id", "type": "integer", "required": true },
//!     { "name": "total", "type": "float", "from": ["order", "total"], "default": 0 },
//!     { "name": "email", "type": "string", "from": { "any": ["email", "mail"] } },
//!     { "name": "tags", "type": { "array": "string" } },
//!     { "name": "address", "type": { "fields": [ { "name": "city", "type": "string" } ] } }
//!   ]
//! }
//! ```
//!
//! Field order in the document is the output order of a cast. Transforms
//! cannot be declared in documents; attach them programmatically.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::errors::{SchemaError, SchemaResult};
use super::types::{CastType, FieldSpec, KeySpec, Schema};
use crate::value::{Key, Value};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SchemaDoc {
    fields: Vec<FieldDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldDoc {
    name: String,
    #[serde(rename = "type")]
    cast_type: TypeDoc,
    #[serde(default)]
    from: Option<FromDoc>,
    #[serde(default)]
    default: Option<serde_json::Value>,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    valid: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TypeDoc {
    Tag(String),
    Array { array: Box<TypeDoc> },
    Nested { fields: Vec<FieldDoc> },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FromDoc {
    Key(String),
    Path(Vec<String>),
    Any { any: Vec<FromDoc> },
}

/// Parses schema documents into `Schema` values.
pub struct SchemaLoader;

impl SchemaLoader {
    /// Parses a schema from JSON text.
    pub fn from_str(origin: &str, content: &str) -> SchemaResult<Schema> {
        let doc: SchemaDoc = serde_json::from_str(content)
            .map_err(|e| SchemaError::malformed(origin, format!("Invalid JSON: {}", e)))?;
        Self::build(origin, doc.fields)
    }

    /// Parses a schema from an already-decoded JSON value.
    pub fn from_json(origin: &str, json: serde_json::Value) -> SchemaResult<Schema> {
        let doc: SchemaDoc = serde_json::from_value(json)
            .map_err(|e| SchemaError::malformed(origin, e.to_string()))?;
        Self::build(origin, doc.fields)
    }

    /// Reads and parses a schema file.
    pub fn from_file(path: &Path) -> SchemaResult<Schema> {
        let origin = path.display().to_string();
        let content =
            fs::read_to_string(path).map_err(|e| SchemaError::io(&origin, e.to_string()))?;
        Self::from_str(&origin, &content)
    }

    fn build(origin: &str, fields: Vec<FieldDoc>) -> SchemaResult<Schema> {
        let mut schema = Schema::new();
        for field in fields {
            if field.name.is_empty() {
                return Err(SchemaError::malformed(origin, "field name must not be empty"));
            }
            if schema.get(&field.name).is_some() {
                return Err(SchemaError::malformed(
                    origin,
                    format!("duplicate field '{}'", field.name),
                ));
            }
            let name = field.name.clone();
            schema.push(name, Self::build_field(origin, field)?);
        }
        Ok(schema)
    }

    fn build_field(origin: &str, field: FieldDoc) -> SchemaResult<FieldSpec> {
        let mut spec = FieldSpec::new(Self::build_type(origin, field.cast_type)?);
        spec.from = field
            .from
            .map(|f| Self::build_key_spec(origin, f))
            .transpose()?;
        spec.default = field.default.map(Value::from);
        spec.required = field.required;
        spec.valid = field
            .valid
            .map(|vals| vals.into_iter().map(Value::from).collect());
        Ok(spec)
    }

    fn build_type(origin: &str, doc: TypeDoc) -> SchemaResult<CastType> {
        match doc {
            TypeDoc::Tag(tag) => Ok(CastType::from_tag(&tag)),
            TypeDoc::Array { array } => {
                Ok(CastType::Array(Box::new(Self::build_type(origin, *array)?)))
            }
            TypeDoc::Nested { fields } => Ok(CastType::Nested(Self::build(origin, fields)?)),
        }
    }

    fn build_key_spec(origin: &str, doc: FromDoc) -> SchemaResult<KeySpec> {
        match doc {
            FromDoc::Key(key) => Ok(KeySpec::Key(Key::Str(key))),
            FromDoc::Path(keys) => {
                if keys.is_empty() {
                    return Err(SchemaError::malformed(origin, "source path must not be empty"));
                }
                Ok(KeySpec::path(keys))
            }
            FromDoc::Any { any } => any
                .into_iter()
                .map(|candidate| Self::build_key_spec(origin, candidate))
                .collect::<SchemaResult<Vec<_>>>()
                .map(KeySpec::Alternatives),
        }
    }
}
