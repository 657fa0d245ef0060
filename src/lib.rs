//! # gameplay-engine
//!
//! An event-driven gameplay rule engine for arcade-style games: score,
//! lives, timers, and game flow, with the rules kept as data.
//!
//! ## Design Principles
//!
//! 1. **Engine-Agnostic**: No rendering, audio, or scene-graph coupling.
//!    Hosts drive the controller from their own frame loop and wire the
//!    delegate into their own UI.
//!
//! 2. **Rules As Data**: What a catch or a miss is worth lives in
//!    declarative records, not in code. Behavior is referenced by key and
//!    resolved through the delegate.
//!
//! 3. **Single-Threaded, Synchronous**: Every operation completes within
//!    its call, delegate notifications included. No locks, no background
//!    work, no surprises about when a callback runs.
//!
//! ## Architecture
//!
//! - **First Match Wins**: Each event resolves to at most one rule, picked
//!   by priority then registration order. Broadcast semantics are out of
//!   scope on purpose.
//!
//! - **Cooperative Time**: The clock advances only through `update(dt)`,
//!   scaled by a dilation factor, and only in ticking states. Countdown
//!   rounds force a single `TimeUp` transition.
//!
//! - **One-Shot Schedule**: Time-keyed events fire once, in order, and
//!   are gone.
//!
//! ## Modules
//!
//! - `core`: States, events, the object interface, errors
//! - `rules`: Rule records, declarative configs, the registry
//! - `schedule`: Time-keyed one-shot events
//! - `gameplay`: The controller and its delegate
//! - `games`: A demo game wiring everything together

pub mod core;
pub mod games;
pub mod gameplay;
pub mod rules;
pub mod schedule;

// Re-export commonly used types
pub use crate::core::{
    GameplayError, GameplayEvent, GameplayObject, GameplayResult, GameplayState, TaggedObject,
};

pub use crate::rules::{GameplayRule, RuleConfig, RuleHook, RuleRegistry};

pub use crate::schedule::{EventPayload, EventSchedule, ScheduledEvent, ScheduledEventId};

pub use crate::gameplay::{GameplayController, GameplayDelegate};
