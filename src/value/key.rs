//! Container keys
//!
//! A key is a string or a symbolic name. Resolution compares keys by their
//! canonical string form, so `"id"` and `:id` address the same entry.

use std::fmt;

/// A container key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// Plain string key
    Str(String),
    /// Symbolic name
    Symbol(String),
}

impl Key {
    /// Creates a string key.
    pub fn string(name: impl Into<String>) -> Self {
        Key::Str(name.into())
    }

    /// Creates a symbolic key.
    pub fn symbol(name: impl Into<String>) -> Self {
        Key::Symbol(name.into())
    }

    /// Returns the canonical string form.
    pub fn as_str(&self) -> &str {
        match self {
            Key::Str(s) | Key::Symbol(s) => s,
        }
    }

    /// Returns true if both keys address the same entry.
    pub fn matches(&self, other: &Key) -> bool {
        self.as_str() == other.as_str()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Str(s) => write!(f, "{}", s),
            Key::Symbol(s) => write!(f, ":{}", s),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl From<&String> for Key {
    fn from(s: &String) -> Self {
        Key::Str(s.clone())
    }
}
