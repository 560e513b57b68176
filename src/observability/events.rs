//! Observable events
//!
//! Events are explicit and typed. Per-call engine events are emitted at
//! TRACE; loading events at INFO.

use std::fmt;

/// Observable events in the cast engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration loaded
    ConfigLoaded,
    /// Named shapes loaded from disk
    ShapesLoaded,

    // Cast
    /// Cast call begins
    CastStart,
    /// Cast call produced an output
    CastComplete,
    /// Cast call aborted
    CastFailed,
    /// Field fell back to an override or default
    FieldFallback,
    /// Optional field had no value and was omitted
    FieldOmitted,

    // Update
    /// Update merge complete
    UpdateComplete,

    // Dump
    /// Dump complete
    DumpComplete,
    /// Dump aborted
    DumpFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ShapesLoaded => "SHAPES_LOADED",

            Event::CastStart => "CAST_START",
            Event::CastComplete => "CAST_COMPLETE",
            Event::CastFailed => "CAST_FAILED",
            Event::FieldFallback => "FIELD_FALLBACK",
            Event::FieldOmitted => "FIELD_OMITTED",

            Event::UpdateComplete => "UPDATE_COMPLETE",

            Event::DumpComplete => "DUMP_COMPLETE",
            Event::DumpFailed => "DUMP_FAILED",
        }
    }

    /// Returns true for per-call events that only matter when tracing
    pub fn is_per_call(&self) -> bool {
        !matches!(self, Event::ConfigLoaded | Event::ShapesLoaded)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
