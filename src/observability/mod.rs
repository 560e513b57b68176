//! Observability subsystem
//!
//! Structured JSON logging of lifecycle events to stderr.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on casting results
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! Per-call engine events (casts, updates, dumps, field fallbacks) are
//! emitted at TRACE; process-level events (config, shape loading) at INFO.
//! The default threshold is WARN, so a library caller sees nothing unless
//! it lowers the threshold with [`Logger::set_min_severity`].
//!
//! # Usage
//!
//! ```
//! use schemacast::observability::{log_event_with_fields, Event, Logger, Severity};
//!
//! Logger::set_min_severity(Severity::Warn);
//! log_event_with_fields(Event::ShapesLoaded, &[("count", "2")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Severity an event is logged at.
pub fn severity_of(event: Event) -> Severity {
    if event.is_per_call() {
        Severity::Trace
    } else {
        Severity::Info
    }
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_of(event), event.as_str(), fields);
}
