//! Key resolution
//!
//! Locates a raw value inside an input container from a key, a multi-level
//! path, or an ordered list of alternative key specs. Keys match on their
//! canonical string form; the first matching entry wins.

use super::errors::{CastError, CastResult};
use crate::schema::KeySpec;
use crate::value::{Castable, Key, Value};

/// Resolves a single key or a path. Alternatives resolve to the first
/// candidate that is present, without casting.
pub fn resolve<'a>(container: &'a dyn Castable, spec: &KeySpec) -> Option<&'a Value> {
    match spec {
        KeySpec::Key(key) => container.lookup(key),
        KeySpec::Path(keys) => resolve_path(container, keys),
        KeySpec::Alternatives(candidates) => candidates
            .iter()
            .find_map(|candidate| resolve(container, candidate)),
    }
}

/// Walks `keys` level by level. Fails on the first missing level or on an
/// intermediate value that is not a container. An empty path resolves to
/// nothing.
pub fn resolve_path<'a>(container: &'a dyn Castable, keys: &[Key]) -> Option<&'a Value> {
    let (first, rest) = keys.split_first()?;
    let mut current = container.lookup(first)?;
    for key in rest {
        current = current.as_container()?.lookup(key)?;
    }
    Some(current)
}

/// Resolves `spec` and casts the raw value with `cast`.
///
/// For alternatives, each candidate is resolved and cast in order and the
/// first success is returned. When every candidate fails, the individual
/// reasons are discarded and a single `KeyNotFound` is returned.
pub fn resolve_and_cast(
    container: &dyn Castable,
    spec: &KeySpec,
    cast: &mut dyn FnMut(&Value) -> CastResult<Value>,
) -> CastResult<Value> {
    match spec {
        KeySpec::Alternatives(candidates) => {
            for candidate in candidates {
                if let Ok(value) = resolve_and_cast(container, candidate, cast) {
                    return Ok(value);
                }
            }
            Err(CastError::key_not_found(spec))
        }
        _ => {
            let raw = resolve(container, spec).ok_or_else(|| CastError::key_not_found(spec))?;
            cast(raw)
        }
    }
}
