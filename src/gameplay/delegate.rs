//! Delegate notifications and hooks.
//!
//! The controller reports everything observable through a single delegate:
//! state transitions, per-second time callbacks, scheduled events, and
//! score/lives changes. The same trait carries the two rule hooks, so
//! behavior referenced from rule data by key also resolves here.
//!
//! All notifications are synchronous. They run inside the controller call
//! that caused them and return before it does. The delegate receives
//! values, never the controller, so notification code cannot re-enter the
//! engine mid-operation.

use crate::core::{GameplayEvent, GameplayObject, GameplayState};
use crate::rules::GameplayRule;
use crate::schedule::ScheduledEvent;

/// Observer and hook seam for a [`GameplayController`].
///
/// Only [`on_state_changed`] is mandatory. Every other method defaults to
/// a no-op (or to rejection, for [`validate_rule`]); overriding one is the
/// capability declaration, there is no separate query step.
///
/// [`GameplayController`]: crate::gameplay::GameplayController
/// [`on_state_changed`]: GameplayDelegate::on_state_changed
/// [`validate_rule`]: GameplayDelegate::validate_rule
pub trait GameplayDelegate {
    /// The controller moved from `old` to `new`.
    ///
    /// Fired on every actual transition, whatever caused it. Never fired
    /// for self-transitions.
    fn on_state_changed(&mut self, old: GameplayState, new: GameplayState);

    /// A whole second of gameplay time elapsed (count-up mode).
    fn on_count_up(&mut self, _seconds_elapsed: u32) {}

    /// A whole second was consumed from the countdown (countdown mode).
    ///
    /// `_seconds_left` reaches 0 on the second that triggers the `TimeUp`
    /// transition.
    fn on_count_down(&mut self, _seconds_left: u32) {}

    /// A scheduled event came due and was removed from the schedule.
    fn on_scheduled_event(&mut self, _event: &ScheduledEvent) {}

    /// The score changed to `_score`. Not fired when a delta clamps to the
    /// current value.
    fn on_score_changed(&mut self, _score: i32) {}

    /// The lives count changed to `_lives`. The engine never acts on zero
    /// lives itself; hosts watching for game over observe it here.
    fn on_lives_changed(&mut self, _lives: i32) {}

    /// Decide whether a rule carrying a validator hook matches.
    ///
    /// `_key` is the rule's validator key. Returning `false` makes the
    /// rule fall through to the next candidate. The default rejects, so a
    /// validator-carrying rule never matches without a delegate that
    /// understands its key.
    fn validate_rule(
        &mut self,
        _key: &str,
        _rule: &GameplayRule,
        _event: &GameplayEvent,
        _object: &dyn GameplayObject,
    ) -> bool {
        false
    }

    /// Run a rule's action hook.
    ///
    /// Invoked after the winning rule's deltas have been applied, before
    /// its follow-up event fires.
    fn on_rule_action(
        &mut self,
        _key: &str,
        _rule: &GameplayRule,
        _event: &GameplayEvent,
        _object: &dyn GameplayObject,
    ) {
    }
}
