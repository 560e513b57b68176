//! Schema type definitions
//!
//! Supported cast types:
//! - Primitive leaf types (boolean, integer, string, float, symbol, sort,
//!   enumeration, date, datetime, any)
//! - Nested schema, cast recursively into a nested record
//! - Array of any cast type, cast element-wise
//! - Named type, resolved against the shape registry

use std::fmt;
use std::sync::Arc;

use crate::value::{Key, Value};

/// Primitive leaf types handled by a converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Boolean,
    Integer,
    String,
    Float,
    Symbol,
    Sort,
    Enumeration,
    Date,
    DateTime,
    /// Pass-through, no validation
    Any,
}

impl Primitive {
    /// Parses a type tag as written in schema documents.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primitive = match tag {
            "boolean" | "bool" => Primitive::Boolean,
            "integer" | "int" => Primitive::Integer,
            "string" => Primitive::String,
            "float" => Primitive::Float,
            "symbol" | "atom" => Primitive::Symbol,
            "sort" => Primitive::Sort,
            "enum" | "enumeration" => Primitive::Enumeration,
            "date" => Primitive::Date,
            "datetime" => Primitive::DateTime,
            "any" => Primitive::Any,
            _ => return None,
        };
        Some(primitive)
    }

    /// Returns the canonical tag
    pub fn tag(&self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Integer => "integer",
            Primitive::String => "string",
            Primitive::Float => "float",
            Primitive::Symbol => "symbol",
            Primitive::Sort => "sort",
            Primitive::Enumeration => "enum",
            Primitive::Date => "date",
            Primitive::DateTime => "datetime",
            Primitive::Any => "any",
        }
    }
}

/// Declared type of a field.
#[derive(Debug, Clone)]
pub enum CastType {
    Primitive(Primitive),
    /// Nested schema, cast into a nested record
    Nested(Schema),
    /// Homogeneous array with an element type
    Array(Box<CastType>),
    /// Shape reference; unregistered names are unknown cast types
    Named(String),
}

impl CastType {
    pub fn array(element: impl Into<CastType>) -> Self {
        CastType::Array(Box::new(element.into()))
    }

    pub fn named(name: impl Into<String>) -> Self {
        CastType::Named(name.into())
    }

    /// Resolves a bare tag: primitives first, anything else is a name.
    pub fn from_tag(tag: &str) -> Self {
        match Primitive::from_tag(tag) {
            Some(p) => CastType::Primitive(p),
            None => CastType::Named(tag.to_string()),
        }
    }

    /// True when the field is a nested schema. Such fields are mandatory
    /// regardless of their `required` flag.
    pub fn is_nested(&self) -> bool {
        matches!(self, CastType::Nested(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, CastType::Array(_))
    }

    /// Returns the type name for error messages
    pub fn type_name(&self) -> String {
        match self {
            CastType::Primitive(p) => p.tag().to_string(),
            CastType::Nested(_) => "schema".to_string(),
            CastType::Array(element) => format!("array({})", element.type_name()),
            CastType::Named(name) => name.clone(),
        }
    }
}

impl From<Primitive> for CastType {
    fn from(p: Primitive) -> Self {
        CastType::Primitive(p)
    }
}

impl From<Schema> for CastType {
    fn from(schema: Schema) -> Self {
        CastType::Nested(schema)
    }
}

/// Where a field's raw value is read from.
#[derive(Debug, Clone, PartialEq)]
pub enum KeySpec {
    /// Single key
    Key(Key),
    /// Multi-level path, walked container by container
    Path(Vec<Key>),
    /// Ordered candidates; the first that resolves and casts wins
    Alternatives(Vec<KeySpec>),
}

impl KeySpec {
    pub fn path<K: Into<Key>>(keys: impl IntoIterator<Item = K>) -> Self {
        KeySpec::Path(keys.into_iter().map(Into::into).collect())
    }

    pub fn any(candidates: impl IntoIterator<Item = KeySpec>) -> Self {
        KeySpec::Alternatives(candidates.into_iter().collect())
    }
}

impl fmt::Display for KeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySpec::Key(k) => write!(f, "{}", k),
            KeySpec::Path(keys) => {
                let parts: Vec<String> = keys.iter().map(Key::to_string).collect();
                write!(f, "{}", parts.join("."))
            }
            KeySpec::Alternatives(candidates) => {
                let parts: Vec<String> = candidates.iter().map(KeySpec::to_string).collect();
                write!(f, "{}", parts.join(" | "))
            }
        }
    }
}

impl From<&str> for KeySpec {
    fn from(s: &str) -> Self {
        KeySpec::Key(Key::from(s))
    }
}

impl From<Key> for KeySpec {
    fn from(k: Key) -> Self {
        KeySpec::Key(k)
    }
}

/// Caller-supplied post-cast function.
///
/// Invoked exactly once per applicable value. Panics inside it are not
/// caught and abort the whole call.
#[derive(Clone)]
pub struct Transform(Arc<dyn Fn(Value) -> Value + Send + Sync>);

impl Transform {
    pub fn new(f: impl Fn(Value) -> Value + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn apply(&self, value: Value) -> Value {
        (self.0)(value)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Transform(..)")
    }
}

/// Per-field casting rule
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Declared type
    pub cast_type: CastType,
    /// Source key or path; defaults to the field name
    pub from: Option<KeySpec>,
    /// Literal used when casting fails; bypasses cast
    pub default: Option<Value>,
    /// Whether a missing value is fatal
    pub required: bool,
    /// Post-cast function
    pub transform: Option<Transform>,
    /// Allowed values, read by the enumeration converter
    pub valid: Option<Vec<Value>>,
}

impl FieldSpec {
    pub fn new(cast_type: impl Into<CastType>) -> Self {
        Self {
            cast_type: cast_type.into(),
            from: None,
            default: None,
            required: false,
            transform: None,
            valid: None,
        }
    }

    /// Optional integer field
    pub fn integer() -> Self {
        Self::new(Primitive::Integer)
    }

    /// Optional string field
    pub fn string() -> Self {
        Self::new(Primitive::String)
    }

    /// Optional boolean field
    pub fn boolean() -> Self {
        Self::new(Primitive::Boolean)
    }

    /// Optional float field
    pub fn float() -> Self {
        Self::new(Primitive::Float)
    }

    /// Enumeration field restricted to `valid`
    pub fn enumeration(valid: impl IntoIterator<Item = Value>) -> Self {
        Self::new(Primitive::Enumeration).valid(valid)
    }

    /// Nested schema field
    pub fn nested(schema: Schema) -> Self {
        Self::new(CastType::Nested(schema))
    }

    /// Array field with the given element type
    pub fn array(element: impl Into<CastType>) -> Self {
        Self::new(CastType::array(element))
    }

    pub fn from(mut self, from: impl Into<KeySpec>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn transform(mut self, f: impl Fn(Value) -> Value + Send + Sync + 'static) -> Self {
        self.transform = Some(Transform::new(f));
        self
    }

    pub fn valid(mut self, valid: impl IntoIterator<Item = Value>) -> Self {
        self.valid = Some(valid.into_iter().collect());
        self
    }
}

/// Ordered mapping from field name to field spec.
///
/// Declaration order is the output order of a cast.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(String, FieldSpec)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field declaration.
    pub fn field(mut self, name: impl Into<String>, spec: FieldSpec) -> Self {
        self.fields.push((name.into(), spec));
        self
    }

    pub fn push(&mut self, name: impl Into<String>, spec: FieldSpec) {
        self.fields.push((name.into(), spec));
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.fields.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, spec)| spec)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
