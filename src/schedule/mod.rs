//! Time-keyed one-shot events.
//!
//! Hosts schedule callbacks against the gameplay clock; the controller
//! drains whatever became due on each tick and notifies the delegate.

pub mod event;
pub mod queue;

pub use event::{EventPayload, ScheduledEvent, ScheduledEventId};
pub use queue::EventSchedule;
