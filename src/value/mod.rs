//! Value model for the cast engine
//!
//! Input arrives as loosely-structured containers: an ordered sequence of
//! key/value pairs (`Record`) or an associative mapping (`Map`). Keys are
//! either strings or symbolic names; both normalize to one canonical string
//! form at the container boundary.
//!
//! Output of a cast is always a `Record` in schema declaration order.

mod capability;
mod json;
mod key;
mod types;

pub use capability::{Castable, Dumpable, Updatable};
pub use key::Key;
pub use types::{Map, Record, SortDirection, SortSpec, Value};
