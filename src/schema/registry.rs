//! Named-shape registry
//!
//! A shape is a schema registered under a name, so other schemas can refer
//! to it by that name instead of inlining it. Shapes are immutable once
//! registered.
//!
//! Shapes can be loaded from a directory: every `<name>.json` file is parsed
//! as a schema document and registered as `<name>`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::errors::{SchemaError, SchemaResult};
use super::loader::SchemaLoader;
use super::types::Schema;
use crate::cast::{CastError, CastOptions, CastResult, Caster};
use crate::observability::{log_event_with_fields, Event};
use crate::value::{Record, Value};

/// In-memory registry of named shapes.
#[derive(Debug, Default)]
pub struct ShapeRegistry {
    shapes: BTreeMap<String, Schema>,
}

impl ShapeRegistry {
    /// Creates an empty registry.
    pub const fn new() -> Self {
        Self {
            shapes: BTreeMap::new(),
        }
    }

    /// Registers a shape under `name`.
    ///
    /// Re-registering an existing name is rejected.
    pub fn register(&mut self, name: impl Into<String>, schema: Schema) -> SchemaResult<()> {
        let name = name.into();
        if self.shapes.contains_key(&name) {
            return Err(SchemaError::ShapeAlreadyRegistered(name));
        }
        self.shapes.insert(name, schema);
        Ok(())
    }

    /// Loads every `*.json` file in `dir` as a shape named after its file stem.
    ///
    /// Returns the number of shapes loaded.
    pub fn load_dir(&mut self, dir: &Path) -> SchemaResult<usize> {
        let dir_name = dir.display().to_string();
        let entries = fs::read_dir(dir).map_err(|e| SchemaError::io(&dir_name, e.to_string()))?;

        // Sorted so duplicate detection and logging are deterministic
        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SchemaError::io(&dir_name, e.to_string()))?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        for path in &paths {
            let name = path.file_stem().and_then(|s| s.to_str()).ok_or_else(|| {
                SchemaError::malformed(path.display().to_string(), "invalid file name")
            })?;
            let schema = SchemaLoader::from_file(path)?;
            self.register(name, schema)?;
        }

        let count = paths.len().to_string();
        log_event_with_fields(
            Event::ShapesLoaded,
            &[("count", count.as_str()), ("dir", dir_name.as_str())],
        );
        Ok(paths.len())
    }

    /// Returns true if `name` is a registered shape.
    pub fn is_shape(&self, name: &str) -> bool {
        self.shapes.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.shapes.get(name)
    }

    /// Registered names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.shapes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Casts `input` against the shape registered as `name`.
    ///
    /// Shapes may reference other shapes in the same registry.
    pub fn cast(&self, name: &str, input: &Value) -> CastResult<Record> {
        match self.get(name) {
            Some(schema) => Caster::new(self).cast(input, schema, &CastOptions::default()),
            None => Err(CastError::UnknownCastType(name.to_string())),
        }
    }
}
