//! Rule registry.
//!
//! The registry stores rules and keeps, per event kind, the order in which
//! candidates are scanned during evaluation. Hosts register rules at game
//! setup (or load them from declarative records) and the controller
//! consults the registry every time an event fires.

use rustc_hash::FxHashMap;

use crate::core::{GameplayError, GameplayEvent, GameplayResult};

use super::config::RuleConfig;
use super::rule::GameplayRule;

/// Registry for gameplay rules.
///
/// Rules are keyed by name and indexed by their triggering event. Each
/// event bucket is kept in evaluation order at insertion time: descending
/// priority, ties in registration order. Evaluation then walks the bucket
/// front to back and stops at the first match.
#[derive(Clone, Debug, Default)]
pub struct RuleRegistry {
    /// All registered rules, by name.
    rules: FxHashMap<String, GameplayRule>,

    /// Rule names per event kind, in evaluation order.
    by_event: FxHashMap<GameplayEvent, Vec<String>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule.
    ///
    /// Fails with [`GameplayError::DuplicateRule`] if a rule with the same
    /// name is already registered; the existing rule is untouched.
    pub fn add(&mut self, rule: GameplayRule) -> GameplayResult<()> {
        if self.rules.contains_key(&rule.name) {
            return Err(GameplayError::DuplicateRule(rule.name));
        }

        let rules = &self.rules;
        let bucket = self.by_event.entry(rule.trigger_event.clone()).or_default();
        // Insert after every rule of priority >= ours so that equal
        // priorities keep registration order.
        let pos = bucket
            .iter()
            .position(|name| rules.get(name).is_some_and(|r| r.priority < rule.priority))
            .unwrap_or(bucket.len());
        bucket.insert(pos, rule.name.clone());

        tracing::debug!(rule = %rule.name, event = %rule.trigger_event, priority = rule.priority, "Registered rule");
        self.rules.insert(rule.name.clone(), rule);
        Ok(())
    }

    /// Register every record of a declarative ruleset, in order.
    ///
    /// Returns the registered names. The first duplicate name aborts the
    /// load; records before it stay registered.
    pub fn add_from_configs(
        &mut self,
        configs: impl IntoIterator<Item = RuleConfig>,
    ) -> GameplayResult<Vec<String>> {
        let mut added = Vec::new();
        for config in configs {
            let rule = GameplayRule::from(config);
            let name = rule.name.clone();
            self.add(rule)?;
            added.push(name);
        }
        Ok(added)
    }

    /// Unregister a rule by name.
    ///
    /// Returns the removed rule, or `None` if no such rule exists.
    pub fn remove(&mut self, name: &str) -> Option<GameplayRule> {
        let rule = self.rules.remove(name)?;
        if let Some(bucket) = self.by_event.get_mut(&rule.trigger_event) {
            bucket.retain(|n| n.as_str() != name);
            if bucket.is_empty() {
                self.by_event.remove(&rule.trigger_event);
            }
        }
        tracing::debug!(rule = %rule.name, "Removed rule");
        Some(rule)
    }

    /// Remove every rule.
    pub fn clear(&mut self) {
        self.rules.clear();
        self.by_event.clear();
    }

    /// Get a rule by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&GameplayRule> {
        self.rules.get(name)
    }

    /// Iterate the rules registered for an event kind, in evaluation order.
    pub fn rules_for_event(
        &self,
        event: &GameplayEvent,
    ) -> impl Iterator<Item = &GameplayRule> + '_ {
        self.by_event
            .get(event)
            .into_iter()
            .flatten()
            .filter_map(|name| self.rules.get(name))
    }

    /// Get total rule count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate all rules (arbitrary order).
    pub fn iter(&self) -> impl Iterator<Item = &GameplayRule> {
        self.rules.values()
    }
}
