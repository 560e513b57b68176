//! Dump serializer
//!
//! Renders a cast output back into a plain structure. Records are dumped
//! recursively and come out in ascending key order, which differs from the
//! declaration order a cast produces. Leaves go through their converter's
//! dump. The first failing value aborts the dump with an error naming its
//! key.

use super::errors::{CastError, CastResult};
use crate::convert;
use crate::value::{Dumpable, Key, Map, Record, Value};

impl Dumpable for Record {
    type Plain = Record;

    fn dump(&self) -> CastResult<Record> {
        dump_entries(self.iter().map(|(k, v)| (k.as_str(), v)))
    }
}

impl Dumpable for Map {
    type Plain = Record;

    fn dump(&self) -> CastResult<Record> {
        dump_entries(self.iter().map(|(k, v)| (k.as_str(), v)))
    }
}

impl Dumpable for Value {
    type Plain = Value;

    fn dump(&self) -> CastResult<Value> {
        match self {
            Value::Record(record) => record.dump().map(Value::Record),
            Value::Map(map) => map.dump().map(Value::Record),
            Value::Array(items) => items
                .iter()
                .map(|item| item.dump())
                .collect::<CastResult<Vec<_>>>()
                .map(Value::Array),
            leaf => convert::leaf_dump(leaf),
        }
    }
}

fn dump_entries<'a>(entries: impl Iterator<Item = (&'a str, &'a Value)>) -> CastResult<Record> {
    let mut plain: Vec<(&str, Value)> = Vec::new();
    for (key, value) in entries {
        let dumped = value.dump().map_err(|e| CastError::dump(key, e))?;
        plain.push((key, dumped));
    }
    // Stable sort keeps the first of duplicate keys first
    plain.sort_by(|a, b| a.0.cmp(b.0));
    Ok(plain
        .into_iter()
        .map(|(key, value)| (Key::from(key), value))
        .collect())
}
