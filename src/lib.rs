//! schemacast - Schema-driven casting of untyped input into typed output
//!
//! A schema names output fields, where each one is read from in the input,
//! what type it becomes and what happens when it is missing or invalid.
//! The engine casts input against a schema, merges partial input into a
//! previous output, and renders an output back into plain form.

pub mod cast;
pub mod cli;
pub mod config;
pub mod convert;
pub mod observability;
pub mod schema;
pub mod value;
