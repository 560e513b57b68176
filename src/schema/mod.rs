//! Schema subsystem
//!
//! A schema is an ordered, caller-authored description of the output of a
//! cast: per field, its type, source key or path, default, required flag,
//! post-cast transform and allowed values.
//!
//! # Design Principles
//!
//! - Schemas are immutable once built
//! - Declaration order is output order
//! - Schemas are not validated for well-formedness beyond parsing
//! - Named shapes let schemas reference each other by name

mod errors;
mod loader;
mod registry;
mod types;

pub use errors::{SchemaError, SchemaResult};
pub use loader::SchemaLoader;
pub use registry::ShapeRegistry;
pub use types::{CastType, FieldSpec, KeySpec, Primitive, Schema, Transform};
