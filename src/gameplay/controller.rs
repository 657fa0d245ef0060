//! The gameplay controller.
//!
//! One controller owns everything a round of play needs: the score and
//! lives counters with their clamps, the gameplay clock, the rule registry,
//! the event schedule, and the delegate. Hosts drive it with `update(dt)`
//! from their frame loop and `trigger_event` from their collision and
//! input handling; the controller answers through the delegate.

use crate::core::{GameplayEvent, GameplayObject, GameplayResult, GameplayState};
use crate::gameplay::delegate::GameplayDelegate;
use crate::rules::{GameplayRule, RuleConfig, RuleHook, RuleRegistry};
use crate::schedule::{EventPayload, EventSchedule, ScheduledEvent, ScheduledEventId};

/// Rule-driven gameplay state for one round of play.
///
/// The controller is single-threaded and cooperative: every operation runs
/// to completion within its call, including any delegate notifications it
/// causes. There is no interior locking and no background work.
///
/// ## Time
///
/// Gameplay time only advances inside [`update`](Self::update), and only
/// while the current state is a ticking state and the controller is not
/// suspended. With a countdown configured the clock counts toward zero and
/// forces a single transition to [`GameplayState::TimeUp`] when it gets
/// there; otherwise it counts up without bound.
///
/// ## Evaluation
///
/// [`trigger_event`](Self::trigger_event) finds the first registered rule
/// matching the event and object, applies its score and lives deltas, runs
/// its hook, and fires its follow-up event back through the rules. First
/// match wins; an event that matches nothing is a normal outcome.
pub struct GameplayController {
    score: i32,
    min_score: i32,
    lives: i32,
    max_lives: i32,
    countdown: u32,
    seconds: u32,
    seconds_exact: f32,
    time_dilation: f32,
    state: GameplayState,
    resume_state: Option<GameplayState>,
    suspended: bool,
    rules: RuleRegistry,
    schedule: EventSchedule,
    delegate: Option<Box<dyn GameplayDelegate>>,
}

impl std::fmt::Debug for GameplayController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameplayController")
            .field("state", &self.state)
            .field("score", &self.score)
            .field("lives", &self.lives)
            .field("seconds", &self.seconds)
            .field("countdown", &self.countdown)
            .field("suspended", &self.suspended)
            .field("rules", &self.rules.len())
            .field("scheduled", &self.schedule.len())
            .finish_non_exhaustive()
    }
}

impl GameplayController {
    /// Create a controller.
    ///
    /// `min_score` is the score floor (may be negative); `max_lives` is the
    /// lives ceiling and the starting lives count. The initial score is 0,
    /// raised to `min_score` when the floor is positive.
    ///
    /// # Panics
    ///
    /// Panics if `max_lives` is negative.
    pub fn new(min_score: i32, max_lives: i32) -> Self {
        assert!(max_lives >= 0, "max_lives must be non-negative");
        Self {
            score: min_score.max(0),
            min_score,
            lives: max_lives,
            max_lives,
            countdown: 0,
            seconds: 0,
            seconds_exact: 0.0,
            time_dilation: 1.0,
            state: GameplayState::Init,
            resume_state: None,
            suspended: false,
            rules: RuleRegistry::new(),
            schedule: EventSchedule::new(),
            delegate: None,
        }
    }

    /// Configure a countdown (builder pattern).
    /// 0 disables the countdown and the clock counts up.
    #[must_use]
    pub fn with_countdown(mut self, seconds: u32) -> Self {
        self.countdown = seconds;
        self
    }

    // ---- delegate ----

    /// Install the delegate, replacing any previous one.
    pub fn set_delegate(&mut self, delegate: Box<dyn GameplayDelegate>) {
        self.delegate = Some(delegate);
    }

    /// Remove and return the current delegate.
    pub fn take_delegate(&mut self) -> Option<Box<dyn GameplayDelegate>> {
        self.delegate.take()
    }

    // ---- accessors ----

    /// Current score.
    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    /// The score floor.
    #[must_use]
    pub fn min_score(&self) -> i32 {
        self.min_score
    }

    /// Current lives.
    #[must_use]
    pub fn lives(&self) -> i32 {
        self.lives
    }

    /// The lives ceiling.
    #[must_use]
    pub fn max_lives(&self) -> i32 {
        self.max_lives
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> GameplayState {
        self.state
    }

    /// Configured countdown in seconds (0 = counting up).
    #[must_use]
    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    /// Elapsed gameplay time in whole seconds.
    #[must_use]
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Elapsed gameplay time including the fractional part.
    #[must_use]
    pub fn seconds_exact(&self) -> f32 {
        self.seconds_exact
    }

    /// Current time dilation factor.
    #[must_use]
    pub fn time_dilation(&self) -> f32 {
        self.time_dilation
    }

    /// Whether tick processing is suspended.
    #[must_use]
    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    // ---- rules ----

    /// Register a rule. Fails on a duplicate name.
    pub fn add_rule(&mut self, rule: GameplayRule) -> GameplayResult<()> {
        self.rules.add(rule)
    }

    /// Register a declarative ruleset in record order.
    ///
    /// Returns the registered names. The first duplicate aborts the load;
    /// records before it stay registered.
    pub fn add_rules_from_configs(
        &mut self,
        configs: impl IntoIterator<Item = RuleConfig>,
    ) -> GameplayResult<Vec<String>> {
        self.rules.add_from_configs(configs)
    }

    /// Remove a rule by name. `None` if no such rule exists.
    pub fn remove_rule(&mut self, name: &str) -> Option<GameplayRule> {
        self.rules.remove(name)
    }

    /// Remove every rule.
    pub fn remove_all_rules(&mut self) {
        self.rules.clear();
    }

    /// Get a rule by name.
    #[must_use]
    pub fn rule(&self, name: &str) -> Option<&GameplayRule> {
        self.rules.get(name)
    }

    /// Number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Iterate all registered rules (arbitrary order).
    pub fn rules(&self) -> impl Iterator<Item = &GameplayRule> {
        self.rules.iter()
    }

    // ---- evaluation ----

    /// Evaluate an event against the registered rules.
    ///
    /// Candidates for `event` are scanned in descending priority (ties in
    /// registration order). The first rule whose tag filters accept
    /// `object`, and whose validator hook (if any) accepts through the
    /// delegate, wins. Its deltas are applied with the usual clamps, its
    /// action hook runs, and its follow-up event is fired back through
    /// evaluation once (follow-ups do not chain).
    ///
    /// Returns a copy of the winning rule, or `None` when nothing matched.
    /// A no-match fires the `Ignored` event and is a normal outcome, not
    /// an error.
    pub fn trigger_event(
        &mut self,
        event: &GameplayEvent,
        object: &dyn GameplayObject,
    ) -> Option<GameplayRule> {
        self.evaluate(event, object, true)
    }

    fn evaluate(
        &mut self,
        event: &GameplayEvent,
        object: &dyn GameplayObject,
        with_follow_up: bool,
    ) -> Option<GameplayRule> {
        let Some(matched) = Self::first_match(&self.rules, &mut self.delegate, event, object)
        else {
            tracing::trace!(event = %event, "No rule matched");
            if with_follow_up {
                self.evaluate(&GameplayEvent::Ignored, object, false);
            }
            return None;
        };

        tracing::debug!(
            rule = %matched.name,
            event = %event,
            delta_score = matched.delta_score,
            delta_lives = matched.delta_lives,
            "Rule matched"
        );
        self.add_score(matched.delta_score);
        self.add_lives(matched.delta_lives);

        if let RuleHook::Action(key) = &matched.hook {
            if let Some(delegate) = self.delegate.as_mut() {
                delegate.on_rule_action(key, &matched, event, object);
            }
        }

        if with_follow_up {
            self.evaluate(&matched.follow_up_event(), object, false);
        }
        Some(matched)
    }

    /// Scan a bucket for the first rule accepting the event and object.
    ///
    /// Takes the registry and delegate as split borrows so validator hooks
    /// can run while the scan holds the rules.
    fn first_match(
        rules: &RuleRegistry,
        delegate: &mut Option<Box<dyn GameplayDelegate>>,
        event: &GameplayEvent,
        object: &dyn GameplayObject,
    ) -> Option<GameplayRule> {
        for rule in rules.rules_for_event(event) {
            if !rule.matches_object(object) {
                continue;
            }
            if let RuleHook::Validator(key) = &rule.hook {
                let accepted = delegate
                    .as_mut()
                    .is_some_and(|d| d.validate_rule(key, rule, event, object));
                if !accepted {
                    continue;
                }
            }
            return Some(rule.clone());
        }
        None
    }

    // ---- scheduled events ----

    /// Schedule a one-shot event at `seconds` of gameplay time.
    ///
    /// A time at or before the current clock fires on the next tick.
    pub fn schedule_event(&mut self, seconds: u32, payload: EventPayload) -> ScheduledEventId {
        self.schedule.schedule(seconds, payload)
    }

    /// Cancel a pending event. Unknown or already-fired ids are a no-op
    /// returning `None`.
    pub fn unschedule_event(&mut self, id: ScheduledEventId) -> Option<ScheduledEvent> {
        self.schedule.cancel(id)
    }

    /// Pending events in firing order.
    #[must_use]
    pub fn scheduled_events(&self) -> Vec<&ScheduledEvent> {
        self.schedule.events()
    }

    /// Drop every pending event.
    pub fn clear_scheduled_events(&mut self) {
        self.schedule.clear();
    }

    // ---- tick ----

    /// Advance gameplay time by `dt` seconds of host time.
    ///
    /// Does nothing while suspended or outside a ticking state. The
    /// effective advance is `dt * time_dilation`; a non-positive product
    /// freezes time rather than reversing it.
    ///
    /// Each whole-second crossing fires one count-up or count-down
    /// notification. In countdown mode the crossing that exhausts the
    /// remainder transitions to [`GameplayState::TimeUp`] exactly once,
    /// clamps both clocks to the countdown, and stops consuming the rest
    /// of `dt`. Scheduled events that became due fire afterwards either
    /// way.
    pub fn update(&mut self, dt: f32) {
        if self.suspended || !self.state.is_ticking() {
            return;
        }
        let effective = dt * self.time_dilation;
        if effective <= 0.0 {
            return;
        }

        self.seconds_exact += effective;
        let target = self.seconds_exact as u32;

        while self.seconds < target {
            self.seconds += 1;
            if self.countdown > 0 {
                let remaining = self.countdown.saturating_sub(self.seconds);
                if let Some(delegate) = self.delegate.as_mut() {
                    delegate.on_count_down(remaining);
                }
                if remaining == 0 {
                    self.seconds = self.countdown;
                    self.seconds_exact = self.countdown as f32;
                    tracing::debug!(countdown = self.countdown, "Countdown exhausted");
                    self.set_state(GameplayState::TimeUp);
                    break;
                }
            } else if let Some(delegate) = self.delegate.as_mut() {
                delegate.on_count_up(self.seconds);
            }
        }

        self.fire_due_events();
    }

    fn fire_due_events(&mut self) {
        for event in self.schedule.drain_due(self.seconds) {
            tracing::debug!(id = %event.id, time = event.time, "Scheduled event fired");
            if let Some(delegate) = self.delegate.as_mut() {
                delegate.on_scheduled_event(&event);
            }
        }
    }

    // ---- lifecycle ----

    /// Enter [`GameplayState::Playing`], from any state.
    pub fn start(&mut self) {
        self.set_state(GameplayState::Playing);
    }

    /// Pause or resume.
    ///
    /// `pause(true)` from a ticking state remembers it and enters
    /// [`GameplayState::Paused`]; `pause(false)` restores the remembered
    /// state. Any other combination is a no-op, including resuming from a
    /// `Paused` state that was entered directly via `set_state`.
    pub fn pause(&mut self, paused: bool) {
        if paused {
            if self.state.is_ticking() {
                self.resume_state = Some(self.state);
                self.set_state(GameplayState::Paused);
            }
        } else if self.state == GameplayState::Paused {
            if let Some(resume) = self.resume_state.take() {
                self.set_state(resume);
            }
        }
    }

    /// Freeze or unfreeze tick processing without touching the state.
    ///
    /// While suspended, `update` is a no-op but everything else still
    /// works: rules evaluate, lifecycle calls transition. For a visible
    /// gameplay pause use [`pause`](Self::pause) instead.
    pub fn suspend(&mut self, suspended: bool) {
        if self.suspended != suspended {
            tracing::debug!(suspended, "Suspension changed");
        }
        self.suspended = suspended;
    }

    /// Force [`GameplayState::Quit`].
    pub fn quit(&mut self) {
        self.set_state(GameplayState::Quit);
    }

    /// Force [`GameplayState::Over`].
    pub fn trigger_game_over(&mut self) {
        self.set_state(GameplayState::Over);
    }

    /// Force [`GameplayState::Victory`].
    pub fn trigger_victory(&mut self) {
        self.set_state(GameplayState::Victory);
    }

    /// Transition to `state`.
    ///
    /// Self-transitions are no-ops and do not notify. Actual transitions
    /// always notify the delegate, whichever operation caused them.
    pub fn set_state(&mut self, state: GameplayState) {
        if state == self.state {
            return;
        }
        let old = std::mem::replace(&mut self.state, state);
        tracing::debug!(from = %old, to = %state, "State changed");
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.on_state_changed(old, state);
        }
    }

    // ---- counters ----

    /// Set the score, clamped to the floor. Notifies on actual change.
    pub fn set_score(&mut self, score: i32) {
        let clamped = score.max(self.min_score);
        if clamped != self.score {
            self.score = clamped;
            if let Some(delegate) = self.delegate.as_mut() {
                delegate.on_score_changed(clamped);
            }
        }
    }

    /// Add to the score (negative deltas subtract).
    pub fn add_score(&mut self, delta: i32) {
        self.set_score(self.score.saturating_add(delta));
    }

    /// Set the lives count, clamped to `0..=max_lives`. Notifies on actual
    /// change. Reaching 0 never transitions state by itself.
    pub fn set_lives(&mut self, lives: i32) {
        let clamped = lives.clamp(0, self.max_lives);
        if clamped != self.lives {
            self.lives = clamped;
            if let Some(delegate) = self.delegate.as_mut() {
                delegate.on_lives_changed(clamped);
            }
        }
    }

    /// Add to the lives count (negative deltas subtract).
    pub fn add_lives(&mut self, delta: i32) {
        self.set_lives(self.lives.saturating_add(delta));
    }

    /// Set the countdown. 0 switches the clock to counting up.
    pub fn set_countdown(&mut self, seconds: u32) {
        self.countdown = seconds;
    }

    /// Set the time dilation factor.
    ///
    /// 1.0 is real time; greater is faster, smaller is slower. A factor of
    /// 0 or below freezes time, it never runs backwards.
    pub fn set_time_dilation(&mut self, factor: f32) {
        self.time_dilation = factor;
    }

    /// Jump the gameplay clock to `seconds`.
    ///
    /// Scheduled events that the jump made due fire on the next tick.
    pub fn set_elapsed(&mut self, seconds: u32) {
        self.seconds = seconds;
        self.seconds_exact = seconds as f32;
    }

    /// Restore score, lives, and the clock to their construction values.
    ///
    /// Rules, pending scheduled events, the state, the countdown, and the
    /// dilation factor all survive a reset.
    pub fn reset(&mut self) {
        self.reset_score_and_lives();
        self.seconds = 0;
        self.seconds_exact = 0.0;
    }

    /// Restore score and lives to their construction values, notifying on
    /// actual change.
    pub fn reset_score_and_lives(&mut self) {
        self.set_score(self.min_score.max(0));
        self.set_lives(self.max_lives);
    }

    /// Drop all rules, pending scheduled events, and the delegate.
    pub fn cleanup(&mut self) {
        self.rules.clear();
        self.schedule.clear();
        self.delegate = None;
    }
}
