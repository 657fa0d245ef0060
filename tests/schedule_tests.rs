//! Scheduled-event integration tests.
//!
//! These tests verify one-shot semantics through the controller: firing
//! order, exactly-once delivery, cancellation, and the interaction with
//! the gameplay clock.

use std::cell::RefCell;
use std::rc::Rc;

use gameplay_engine::{
    EventPayload, GameplayController, GameplayDelegate, GameplayState, ScheduledEvent,
    ScheduledEventId,
};

/// Delegate collecting fired events.
struct FiringLog {
    fired: Rc<RefCell<Vec<ScheduledEvent>>>,
}

impl FiringLog {
    fn install(controller: &mut GameplayController) -> Rc<RefCell<Vec<ScheduledEvent>>> {
        let fired = Rc::new(RefCell::new(Vec::new()));
        controller.set_delegate(Box::new(FiringLog {
            fired: fired.clone(),
        }));
        fired
    }
}

impl GameplayDelegate for FiringLog {
    fn on_state_changed(&mut self, _old: GameplayState, _new: GameplayState) {}

    fn on_scheduled_event(&mut self, event: &ScheduledEvent) {
        self.fired.borrow_mut().push(event.clone());
    }
}

/// An event fires on the tick that reaches its second, exactly once.
#[test]
fn test_fires_exactly_once() {
    let mut c = GameplayController::new(0, 3);
    let id = c.schedule_event(3, EventPayload::new().with_tag("wave"));
    let fired = FiringLog::install(&mut c);
    c.start();

    c.update(2.0);
    assert!(fired.borrow().is_empty());

    c.update(1.0);
    assert_eq!(fired.borrow().len(), 1);
    assert_eq!(fired.borrow()[0].id, id);
    assert!(fired.borrow()[0].payload.has_tag("wave"));

    for _ in 0..10 {
        c.update(1.0);
    }
    assert_eq!(fired.borrow().len(), 1, "a fired event never refires");
}

/// A tick that jumps past several due seconds delivers everything in
/// ascending time order, ties in scheduling order.
#[test]
fn test_firing_order_across_a_large_tick() {
    let mut c = GameplayController::new(0, 3);
    let at_five_late = c.schedule_event(5, EventPayload::new().with_tag("late"));
    let at_two = c.schedule_event(2, EventPayload::new());
    let at_five_early = c.schedule_event(5, EventPayload::new().with_tag("early"));
    let at_nine = c.schedule_event(9, EventPayload::new());
    let fired = FiringLog::install(&mut c);
    c.start();

    c.update(10.0);
    let order: Vec<ScheduledEventId> = fired.borrow().iter().map(|e| e.id).collect();
    assert_eq!(order, vec![at_two, at_five_late, at_five_early, at_nine]);
}

/// Cancellation removes a pending event; cancelling twice, or cancelling
/// an id that already fired, is a silent no-op.
#[test]
fn test_cancellation() {
    let mut c = GameplayController::new(0, 3);
    let keep = c.schedule_event(2, EventPayload::new());
    let drop = c.schedule_event(2, EventPayload::new());
    let fired = FiringLog::install(&mut c);
    c.start();

    assert!(c.unschedule_event(drop).is_some());
    assert!(c.unschedule_event(drop).is_none(), "second cancel is a no-op");

    c.update(3.0);
    assert_eq!(fired.borrow().len(), 1);
    assert_eq!(fired.borrow()[0].id, keep);

    assert!(c.unschedule_event(keep).is_none(), "fired ids are gone");
}

/// Scheduling at a time the clock already passed fires on the next tick,
/// not immediately.
#[test]
fn test_past_due_schedule_fires_on_next_tick() {
    let mut c = GameplayController::new(0, 3);
    let fired = FiringLog::install(&mut c);
    c.start();
    c.update(5.0);

    c.schedule_event(3, EventPayload::new());
    assert!(fired.borrow().is_empty(), "scheduling itself never fires");

    c.update(0.5);
    assert_eq!(fired.borrow().len(), 1);
}

/// Jumping the clock with set_elapsed makes events due without firing
/// them until the next tick.
#[test]
fn test_set_elapsed_defers_to_next_tick() {
    let mut c = GameplayController::new(0, 3);
    c.schedule_event(30, EventPayload::new());
    let fired = FiringLog::install(&mut c);
    c.start();

    c.set_elapsed(40);
    assert!(fired.borrow().is_empty());

    c.update(1.0);
    assert_eq!(fired.borrow().len(), 1);
}

/// Events due on the second that exhausts a countdown still fire on that
/// final tick.
#[test]
fn test_due_events_fire_on_the_time_up_tick() {
    let mut c = GameplayController::new(0, 3).with_countdown(5);
    c.schedule_event(5, EventPayload::new().with_tag("finale"));
    let fired = FiringLog::install(&mut c);
    c.start();

    c.update(6.0);
    assert_eq!(c.state(), GameplayState::TimeUp);
    assert_eq!(fired.borrow().len(), 1);
    assert!(fired.borrow()[0].payload.has_tag("finale"));
}

/// Pending events survive a reset, but the rewound clock means they wait
/// for their second to come around again.
#[test]
fn test_reset_keeps_pending_events() {
    let mut c = GameplayController::new(0, 3);
    c.schedule_event(4, EventPayload::new());
    let fired = FiringLog::install(&mut c);
    c.start();
    c.update(2.0);

    c.reset();
    assert_eq!(c.scheduled_events().len(), 1);

    c.update(3.0);
    assert!(fired.borrow().is_empty());
    c.update(1.0);
    assert_eq!(fired.borrow().len(), 1);
}

/// The payload round-trips through firing untouched.
#[test]
fn test_payload_delivery() {
    let mut c = GameplayController::new(0, 3);
    c.schedule_event(
        1,
        EventPayload::new().with_value(7).with_value(-3).with_tag("spawn"),
    );
    let fired = FiringLog::install(&mut c);
    c.start();

    c.update(1.0);
    let events = fired.borrow();
    assert_eq!(events[0].payload.value(0, 0), 7);
    assert_eq!(events[0].payload.value(1, 0), -3);
    assert_eq!(events[0].payload.value(2, 99), 99);
    assert!(events[0].payload.has_tag("spawn"));
}

/// clear_scheduled_events drops everything pending at once.
#[test]
fn test_clear_scheduled_events() {
    let mut c = GameplayController::new(0, 3);
    c.schedule_event(1, EventPayload::new());
    c.schedule_event(2, EventPayload::new());
    let fired = FiringLog::install(&mut c);
    c.start();

    c.clear_scheduled_events();
    assert!(c.scheduled_events().is_empty());

    c.update(5.0);
    assert!(fired.borrow().is_empty());
}
