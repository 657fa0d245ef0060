//! Scheduled event types.
//!
//! A scheduled event is a one-shot timer entry: it fires when gameplay
//! time reaches its second, is handed to the delegate, and is gone. The
//! payload is opaque to the engine; hosts put whatever context they need
//! into it and read it back when the event fires.

use serde::{Deserialize, Serialize};

/// Unique identifier for a scheduled event.
///
/// Allocated by the schedule; distinct from the firing time, so any number
/// of events can share a second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduledEventId(pub u64);

impl ScheduledEventId {
    /// Create a new scheduled event ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ScheduledEventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ScheduledEvent({})", self.0)
    }
}

/// Host context carried by a scheduled event.
///
/// The engine never interprets the contents. Hosts define the meaning of
/// each value index and tag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPayload {
    /// Numeric values associated with the event.
    pub values: Vec<i64>,

    /// String keys for host-specific dispatch.
    pub tags: Vec<String>,
}

impl EventPayload {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a numeric value (builder pattern).
    #[must_use]
    pub fn with_value(mut self, value: i64) -> Self {
        self.values.push(value);
        self
    }

    /// Add a tag (builder pattern).
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Get a value by index, or a default.
    #[must_use]
    pub fn value(&self, index: usize, default: i64) -> i64 {
        self.values.get(index).copied().unwrap_or(default)
    }

    /// Check if the payload has a specific tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A one-shot event waiting on the gameplay clock.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    /// Unique identifier, usable for cancellation.
    pub id: ScheduledEventId,

    /// Firing time in whole seconds of gameplay time.
    pub time: u32,

    /// Host context, handed back when the event fires.
    pub payload: EventPayload,
}
