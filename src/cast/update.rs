//! Update merger
//!
//! Folds a partial new input into a previously cast output. Existing keys
//! are merged recursively when both sides are containers and replaced
//! otherwise; new keys are appended verbatim. Keys absent from the partial
//! input are left untouched. The old output is never mutated.
//!
//! A partial input with repeated keys contributes only its first entry per
//! key, the same entry key resolution would pick.

use crate::convert;
use crate::value::{Castable, Key, Map, Record, Updatable, Value};

impl Updatable for Record {
    fn updated(&self, new: &dyn Castable) -> Self {
        let mut merged = self.clone();
        for (key, new_value) in first_entries(new) {
            match merged.position(key.as_str()) {
                Some(index) => {
                    let slot = merged.value_mut(index);
                    *slot = update_value(slot, new_value);
                }
                None => merged.push(key.clone(), new_value.clone()),
            }
        }
        merged
    }
}

impl Updatable for Map {
    fn updated(&self, new: &dyn Castable) -> Self {
        let mut merged = self.clone();
        for (key, new_value) in first_entries(new) {
            let existing = [Key::string(key.as_str()), Key::symbol(key.as_str())]
                .into_iter()
                .find(|candidate| merged.contains_key(candidate));
            match existing {
                Some(existing_key) => {
                    if let Some(slot) = merged.get_mut(&existing_key) {
                        *slot = update_value(slot, new_value);
                    }
                }
                None => {
                    merged.insert(key.clone(), new_value.clone());
                }
            }
        }
        merged
    }
}

/// Entries of `partial` in order, skipping any whose key matches an
/// earlier entry.
fn first_entries(partial: &dyn Castable) -> Vec<(&Key, &Value)> {
    let mut applied: Vec<(&Key, &Value)> = Vec::new();
    for (key, value) in partial.entries() {
        if !applied.iter().any(|(seen, _)| seen.matches(key)) {
            applied.push((key, value));
        }
    }
    applied
}

/// Merges one value into another.
///
/// Containers merge key by key; any other combination is a leaf update,
/// which replaces the old value.
pub fn update_value(old: &Value, new: &Value) -> Value {
    match (old, new.as_container()) {
        (Value::Record(record), Some(partial)) => Value::Record(record.updated(partial)),
        (Value::Map(map), Some(partial)) => Value::Map(map.updated(partial)),
        _ => convert::leaf_update(old, new),
    }
}
