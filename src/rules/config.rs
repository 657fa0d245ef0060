//! Declarative rule records.
//!
//! Hosts usually author rulesets as data, not code: a flat list of records
//! in whatever structured format their pipeline already reads (JSON, a
//! property list converted at load time, TOML). `RuleConfig` is the shape
//! of one record. The engine never touches files; hosts parse with serde
//! and hand the records over.

use serde::{Deserialize, Serialize};

use crate::core::GameplayEvent;

use super::rule::GameplayRule;

/// One declarative rule record.
///
/// Field names follow the record keys hosts write (`objClass`,
/// `deltaScore`, ...). Everything beyond name, event, and object class is
/// optional and defaults to neutral. Hooks and follow-up events are
/// code-side concerns and are attached with the [`GameplayRule`] builder
/// after conversion.
///
/// Record order is meaningful: rules converted from a list keep their
/// source order, which decides ties between equal priorities.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleConfig {
    /// Unique rule name.
    pub name: String,

    /// Event kind, by serialized name (`"objectHit"`, ...).
    pub event: GameplayEvent,

    /// Object-class filter.
    pub obj_class: String,

    /// Optional subclass filter.
    #[serde(default)]
    pub obj_subclass: Option<String>,

    /// Score delta, default 0.
    #[serde(default)]
    pub delta_score: i32,

    /// Lives delta, default 0.
    #[serde(default)]
    pub delta_lives: i32,

    /// Evaluation priority, default 0.
    #[serde(default)]
    pub priority: i32,
}

impl From<RuleConfig> for GameplayRule {
    fn from(config: RuleConfig) -> Self {
        let mut rule = GameplayRule::new(config.name, config.event, config.obj_class)
            .with_score_delta(config.delta_score)
            .with_lives_delta(config.delta_lives)
            .with_priority(config.priority);
        if let Some(subclass) = config.obj_subclass {
            rule = rule.with_subclass(subclass);
        }
        rule
    }
}
