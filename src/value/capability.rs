//! Container and leaf capabilities
//!
//! The engine never inspects container shapes directly. Key resolution goes
//! through `Castable`, the update merger through `Updatable`, and the dump
//! serializer through `Dumpable`; each concrete representation implements
//! the operations it supports.

use super::key::Key;
use super::types::{Map, Record, Value};
use crate::cast::CastResult;

/// Read access to a keyed container.
pub trait Castable {
    /// Returns the first entry whose key matches `key` canonically.
    fn lookup(&self, key: &Key) -> Option<&Value>;

    /// Entries in container order.
    fn entries(&self) -> Box<dyn Iterator<Item = (&Key, &Value)> + '_>;
}

/// Recursive merge of a partial container into an existing one.
pub trait Updatable: Sized {
    /// Returns a new container with `new` folded in. Never fails.
    fn updated(&self, new: &dyn Castable) -> Self;
}

/// Rendering back into a plain, key-sorted structure.
pub trait Dumpable {
    type Plain;

    fn dump(&self) -> CastResult<Self::Plain>;
}

impl Castable for Record {
    fn lookup(&self, key: &Key) -> Option<&Value> {
        self.get(key.as_str())
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&Key, &Value)> + '_> {
        Box::new(self.iter())
    }
}

impl Castable for Map {
    fn lookup(&self, key: &Key) -> Option<&Value> {
        // Str orders before Symbol, so this is also the first match in map order.
        let name = key.as_str();
        self.get(&Key::string(name))
            .or_else(|| self.get(&Key::symbol(name)))
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&Key, &Value)> + '_> {
        Box::new(self.iter())
    }
}

impl Value {
    /// Returns the container view of this value, if it is one.
    pub fn as_container(&self) -> Option<&dyn Castable> {
        match self {
            Value::Record(r) => Some(r),
            Value::Map(m) => Some(m),
            _ => None,
        }
    }
}
