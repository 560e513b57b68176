//! Conversion between `serde_json::Value` and the engine value model
//!
//! JSON objects become `Map`s with string keys. On the way out, records keep
//! their order and typed leaves render as their textual forms.

use serde_json::Number;

use super::types::{Map, Record, Value};
use super::Key;

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => number_to_value(&n),
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => Value::Map(
                obj.into_iter()
                    .map(|(k, v)| (Key::Str(k), Value::from(v)))
                    .collect::<Map>(),
            ),
        }
    }
}

fn number_to_value(n: &Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Int(i)
    } else {
        // u64 beyond i64 range and real numbers both land here
        Value::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

impl Value {
    /// Renders the value as JSON.
    ///
    /// Non-finite floats have no JSON form and become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::from(*i),
            Value::Float(f) => Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Str(s) | Value::Symbol(s) => serde_json::Value::String(s.clone()),
            Value::Date(_) | Value::DateTime(_) | Value::Sort(_) => {
                serde_json::Value::String(self.canonical_text().unwrap_or_default())
            }
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Record(r) => r.to_json(),
            Value::Map(m) => serde_json::Value::Object(
                m.iter()
                    .map(|(k, v)| (k.as_str().to_string(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

impl Record {
    /// Renders the record as a JSON object in record order.
    ///
    /// Later duplicates of a key are dropped, matching lookup semantics.
    pub fn to_json(&self) -> serde_json::Value {
        let mut obj = serde_json::Map::with_capacity(self.len());
        for (k, v) in self.iter() {
            if !obj.contains_key(k.as_str()) {
                obj.insert(k.as_str().to_string(), v.to_json());
            }
        }
        serde_json::Value::Object(obj)
    }

    /// Reads a JSON object as a record in document order.
    ///
    /// Nested objects become records too. Returns `None` for non-objects.
    pub fn from_json(json: serde_json::Value) -> Option<Record> {
        match ordered(json) {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }
}

fn ordered(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Object(obj) => Value::Record(
            obj.into_iter()
                .map(|(k, v)| (Key::Str(k), ordered(v)))
                .collect(),
        ),
        serde_json::Value::Array(items) => Value::Array(items.into_iter().map(ordered).collect()),
        other => Value::from(other),
    }
}
