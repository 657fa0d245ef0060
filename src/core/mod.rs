//! Core engine types: states, events, the object interface, errors.
//!
//! This module contains the fundamental vocabulary the rest of the engine
//! speaks. Hosts see these types in every controller signature.

pub mod error;
pub mod events;
pub mod object;
pub mod state;

pub use error::{GameplayError, GameplayResult};
pub use events::GameplayEvent;
pub use object::{GameplayObject, TaggedObject};
pub use state::GameplayState;
