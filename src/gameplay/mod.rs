//! The controller and its delegate seam.

pub mod controller;
pub mod delegate;

pub use controller::GameplayController;
pub use delegate::GameplayDelegate;
