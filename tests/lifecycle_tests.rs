//! Lifecycle integration tests.
//!
//! These tests verify state transitions and their notifications, the
//! counter clamps, reset, and cleanup.

use std::cell::RefCell;
use std::rc::Rc;

use gameplay_engine::{
    EventPayload, GameplayController, GameplayDelegate, GameplayEvent, GameplayRule,
    GameplayState, TaggedObject,
};

/// Delegate recording transitions and counter changes.
#[derive(Default)]
struct Observations {
    transitions: Vec<(GameplayState, GameplayState)>,
    scores: Vec<i32>,
    lives: Vec<i32>,
}

struct Observer {
    seen: Rc<RefCell<Observations>>,
}

impl Observer {
    fn install(controller: &mut GameplayController) -> Rc<RefCell<Observations>> {
        let seen = Rc::new(RefCell::new(Observations::default()));
        controller.set_delegate(Box::new(Observer { seen: seen.clone() }));
        seen
    }
}

impl GameplayDelegate for Observer {
    fn on_state_changed(&mut self, old: GameplayState, new: GameplayState) {
        self.seen.borrow_mut().transitions.push((old, new));
    }

    fn on_score_changed(&mut self, score: i32) {
        self.seen.borrow_mut().scores.push(score);
    }

    fn on_lives_changed(&mut self, lives: i32) {
        self.seen.borrow_mut().lives.push(lives);
    }
}

/// Every transition notifies with (old, new), whatever operation caused it.
#[test]
fn test_every_transition_notifies() {
    let mut c = GameplayController::new(0, 3);
    let seen = Observer::install(&mut c);

    c.start();
    c.pause(true);
    c.pause(false);
    c.trigger_victory();
    c.quit();

    assert_eq!(
        seen.borrow().transitions,
        vec![
            (GameplayState::Init, GameplayState::Playing),
            (GameplayState::Playing, GameplayState::Paused),
            (GameplayState::Paused, GameplayState::Playing),
            (GameplayState::Playing, GameplayState::Victory),
            (GameplayState::Victory, GameplayState::Quit),
        ]
    );
}

/// Setting the current state again is a no-op without a notification.
#[test]
fn test_self_transition_is_silent() {
    let mut c = GameplayController::new(0, 3);
    let seen = Observer::install(&mut c);

    c.start();
    c.start();
    c.set_state(GameplayState::Playing);

    assert_eq!(seen.borrow().transitions.len(), 1);
}

/// Terminal transitions override whatever state came before.
#[test]
fn test_terminal_overrides() {
    let mut c = GameplayController::new(0, 3);
    c.start();
    c.pause(true);

    c.trigger_game_over();
    assert_eq!(c.state(), GameplayState::Over);

    // Even a terminal state yields to another explicit terminal.
    c.trigger_victory();
    assert_eq!(c.state(), GameplayState::Victory);
}

/// Counter notifications fire on actual change only; a delta swallowed by
/// the clamp stays silent.
#[test]
fn test_clamped_changes_do_not_notify() {
    let mut c = GameplayController::new(0, 3);
    let seen = Observer::install(&mut c);

    c.add_score(-10);
    assert!(seen.borrow().scores.is_empty(), "already at the floor");

    c.add_lives(2);
    assert!(seen.borrow().lives.is_empty(), "already at the ceiling");

    c.add_score(5);
    c.add_lives(-1);
    assert_eq!(seen.borrow().scores, vec![5]);
    assert_eq!(seen.borrow().lives, vec![2]);
}

/// A rule that would overdraw lives clamps at zero and reports zero.
#[test]
fn test_overdrawn_lives_clamp_to_zero() {
    let mut c = GameplayController::new(0, 3);
    c.add_rule(
        GameplayRule::new("brutal", GameplayEvent::ObjectHit, "bomb").with_lives_delta(-5),
    )
    .unwrap();
    let seen = Observer::install(&mut c);

    c.trigger_event(&GameplayEvent::ObjectHit, &TaggedObject::new("bomb"));
    assert_eq!(c.lives(), 0);
    assert_eq!(seen.borrow().lives, vec![0]);
    assert_eq!(c.state(), GameplayState::Init, "zero lives never transitions by itself");
}

/// The engine never enters NoLife by itself; the host does.
#[test]
fn test_no_life_is_host_driven() {
    let mut c = GameplayController::new(0, 1);
    let seen = Observer::install(&mut c);
    c.start();

    c.add_lives(-1);
    assert_eq!(c.lives(), 0);
    assert_eq!(c.state(), GameplayState::Playing);

    // Host saw on_lives_changed(0) and reacts.
    assert_eq!(seen.borrow().lives, vec![0]);
    c.set_state(GameplayState::NoLife);
    assert_eq!(c.state(), GameplayState::NoLife);
}

/// reset() restores the counters and notifies the restored values, while
/// rules and pending events stay registered and functional.
#[test]
fn test_reset_restores_and_notifies() {
    let mut c = GameplayController::new(0, 3);
    c.add_rule(
        GameplayRule::new("catch", GameplayEvent::ObjectHit, "fruit").with_score_delta(10),
    )
    .unwrap();
    c.schedule_event(60, EventPayload::new());
    let seen = Observer::install(&mut c);
    c.start();
    c.update(12.0);
    c.add_score(40);
    c.add_lives(-2);

    c.reset();
    assert_eq!(c.score(), 0);
    assert_eq!(c.lives(), 3);
    assert_eq!(c.seconds(), 0);
    assert_eq!(seen.borrow().scores, vec![40, 0]);
    assert_eq!(seen.borrow().lives, vec![1, 3]);

    // Registered before the reset, still working after it.
    c.trigger_event(&GameplayEvent::ObjectHit, &TaggedObject::new("fruit"));
    assert_eq!(c.score(), 10);
    assert_eq!(c.scheduled_events().len(), 1);
}

/// A reset that changes nothing stays silent.
#[test]
fn test_reset_at_initial_values_is_silent() {
    let mut c = GameplayController::new(0, 3);
    let seen = Observer::install(&mut c);

    c.reset();
    assert!(seen.borrow().scores.is_empty());
    assert!(seen.borrow().lives.is_empty());
}

/// A positive score floor applies from construction and through reset.
#[test]
fn test_positive_floor_shapes_initial_score() {
    let mut c = GameplayController::new(50, 3);
    assert_eq!(c.score(), 50);

    c.add_score(25);
    c.add_score(-100);
    assert_eq!(c.score(), 50);

    c.reset();
    assert_eq!(c.score(), 50);
}

/// cleanup() leaves an inert controller: no rules, no events, no delegate.
#[test]
fn test_cleanup() {
    let mut c = GameplayController::new(0, 3);
    c.add_rule(GameplayRule::new("catch", GameplayEvent::ObjectHit, "fruit"))
        .unwrap();
    c.schedule_event(5, EventPayload::new());
    let seen = Observer::install(&mut c);
    c.start();

    c.cleanup();
    assert_eq!(c.rule_count(), 0);
    assert!(c.scheduled_events().is_empty());

    // Transitions still happen, but nobody is listening anymore.
    c.trigger_game_over();
    assert_eq!(c.state(), GameplayState::Over);
    assert_eq!(seen.borrow().transitions.len(), 1, "only the pre-cleanup start");
}

/// Rule evaluation works in any state; the state machine gates only the
/// clock, not the rules.
#[test]
fn test_evaluation_ignores_state() {
    let mut c = GameplayController::new(0, 3);
    c.add_rule(
        GameplayRule::new("catch", GameplayEvent::ObjectHit, "fruit").with_score_delta(10),
    )
    .unwrap();

    // Still in Init.
    c.trigger_event(&GameplayEvent::ObjectHit, &TaggedObject::new("fruit"));
    assert_eq!(c.score(), 10);

    c.start();
    c.pause(true);
    c.trigger_event(&GameplayEvent::ObjectHit, &TaggedObject::new("fruit"));
    assert_eq!(c.score(), 20);
}
