//! Rule model and storage.
//!
//! Rules bind events and object tags to gameplay outcomes. The registry
//! keeps them ordered for first-match-wins evaluation; declarative records
//! let hosts author rulesets as data.

pub mod config;
pub mod registry;
pub mod rule;

pub use config::RuleConfig;
pub use registry::RuleRegistry;
pub use rule::{GameplayRule, RuleHook};
