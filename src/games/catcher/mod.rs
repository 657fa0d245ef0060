//! Catch-the-objects demo game.
//!
//! A minimal arcade round that exercises the whole engine end to end:
//! - a declarative ruleset for the plain catch/miss outcomes;
//! - a validator-guarded bomb rule plus a follow-up rule with an action
//!   hook;
//! - a countdown round with a scheduled mid-round speed-up;
//! - a delegate feeding a HUD the controller state as it changes.
//!
//! Falling objects are simulated: callers report catches and misses
//! directly instead of moving sprites around.

mod game;

pub use game::{CatcherGame, CatcherGameBuilder};
