//! Demonstration games built on the engine.

pub mod catcher;
