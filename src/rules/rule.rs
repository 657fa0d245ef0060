//! Rule definitions.
//!
//! A rule binds an event kind and an object filter to a gameplay outcome:
//! score and lives deltas, an optional host hook, and a follow-up event.
//! Rules are plain data. Anything behavioral (predicates, side effects)
//! lives behind the delegate and is referenced from the rule by a string
//! key, which keeps rules cloneable and serializable.

use serde::{Deserialize, Serialize};

use crate::core::{GameplayEvent, GameplayObject};

/// The host hook a rule carries, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleHook {
    /// No hook; the rule matches on tags alone.
    #[default]
    None,

    /// The delegate's `validate_rule` must accept this key before the rule
    /// counts as a match. A rejected rule falls through to the next
    /// candidate. Without a delegate the predicate fails.
    Validator(String),

    /// The delegate's `on_rule_action` is invoked with this key after the
    /// rule's deltas have been applied.
    Action(String),
}

/// A gameplay rule.
///
/// Rules are immutable once registered; remove and re-add to change one.
/// Within a controller each rule name is unique.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameplayRule {
    /// Unique name, the rule's identity within a controller.
    pub name: String,

    /// The event kind this rule listens for.
    pub trigger_event: GameplayEvent,

    /// Object-class filter. The submitted object's class must equal this.
    pub obj_class: String,

    /// Optional subclass filter. `None` accepts any subclass; `Some` must
    /// equal the object's subclass exactly (including the empty string).
    pub obj_subclass: Option<String>,

    /// Score delta applied when this rule wins.
    pub delta_score: i32,

    /// Lives delta applied when this rule wins.
    pub delta_lives: i32,

    /// Evaluation priority (higher evaluates first).
    /// When equal, rules evaluate in registration order.
    pub priority: i32,

    /// Optional host hook (validator or action).
    pub hook: RuleHook,

    /// Follow-up event fired after this rule applies.
    /// `None` means the default outcome event, `Evaluated`.
    pub return_event: Option<GameplayEvent>,
}

impl GameplayRule {
    /// Create a rule listening for `trigger_event` on objects of
    /// `obj_class`, with neutral deltas and default priority.
    pub fn new(
        name: impl Into<String>,
        trigger_event: GameplayEvent,
        obj_class: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            trigger_event,
            obj_class: obj_class.into(),
            obj_subclass: None,
            delta_score: 0,
            delta_lives: 0,
            priority: 0,
            hook: RuleHook::None,
            return_event: None,
        }
    }

    /// Set the subclass filter (builder pattern).
    #[must_use]
    pub fn with_subclass(mut self, obj_subclass: impl Into<String>) -> Self {
        self.obj_subclass = Some(obj_subclass.into());
        self
    }

    /// Set the score delta (builder pattern).
    #[must_use]
    pub fn with_score_delta(mut self, delta_score: i32) -> Self {
        self.delta_score = delta_score;
        self
    }

    /// Set the lives delta (builder pattern).
    #[must_use]
    pub fn with_lives_delta(mut self, delta_lives: i32) -> Self {
        self.delta_lives = delta_lives;
        self
    }

    /// Set the priority (builder pattern).
    /// Higher priority rules evaluate first.
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Attach a validator hook (builder pattern).
    #[must_use]
    pub fn with_validator(mut self, key: impl Into<String>) -> Self {
        self.hook = RuleHook::Validator(key.into());
        self
    }

    /// Attach an action hook (builder pattern).
    #[must_use]
    pub fn with_action(mut self, key: impl Into<String>) -> Self {
        self.hook = RuleHook::Action(key.into());
        self
    }

    /// Override the follow-up event (builder pattern).
    #[must_use]
    pub fn with_return_event(mut self, event: GameplayEvent) -> Self {
        self.return_event = Some(event);
        self
    }

    /// Check whether an object passes this rule's tag filters.
    ///
    /// Tag matching only; validator hooks are evaluated by the controller
    /// because they go through the delegate.
    #[must_use]
    pub fn matches_object(&self, object: &dyn GameplayObject) -> bool {
        if self.obj_class != object.obj_class() {
            return false;
        }
        match &self.obj_subclass {
            Some(subclass) => subclass == object.obj_subclass(),
            None => true,
        }
    }

    /// The follow-up event fired after this rule applies.
    #[must_use]
    pub fn follow_up_event(&self) -> GameplayEvent {
        self.return_event
            .clone()
            .unwrap_or(GameplayEvent::Evaluated)
    }
}

impl std::fmt::Display for GameplayRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rule({})", self.name)
    }
}
