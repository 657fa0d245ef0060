//! Catcher game implementation.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::{GameplayEvent, GameplayState, TaggedObject};
use crate::gameplay::{GameplayController, GameplayDelegate};
use crate::rules::{GameplayRule, RuleConfig};
use crate::schedule::{EventPayload, ScheduledEvent};

/// Object class caught or missed by the player.
pub const FRUIT: &str = "fruit";
/// Object class that should not be caught.
pub const BOMB: &str = "bomb";
/// Fruit subclass worth a bonus.
pub const GOLDEN: &str = "golden";

/// What the delegate learned from the controller, shared with the game.
///
/// The delegate writes, the game reads. Nothing here touches the
/// controller back; the game applies consequences on its next call.
#[derive(Debug, Default)]
struct Hud {
    seconds_left: u32,
    out_of_lives: bool,
    shield: bool,
    speed_bumps: u32,
    bombs_defused: u32,
}

struct HudDelegate {
    hud: Rc<RefCell<Hud>>,
}

impl GameplayDelegate for HudDelegate {
    fn on_state_changed(&mut self, _old: GameplayState, _new: GameplayState) {}

    fn on_count_down(&mut self, seconds_left: u32) {
        self.hud.borrow_mut().seconds_left = seconds_left;
    }

    fn on_lives_changed(&mut self, lives: i32) {
        if lives == 0 {
            self.hud.borrow_mut().out_of_lives = true;
        }
    }

    fn on_scheduled_event(&mut self, event: &ScheduledEvent) {
        if event.payload.has_tag("speedUp") {
            self.hud.borrow_mut().speed_bumps += 1;
        }
    }

    fn validate_rule(
        &mut self,
        key: &str,
        _rule: &GameplayRule,
        _event: &GameplayEvent,
        _object: &dyn crate::core::GameplayObject,
    ) -> bool {
        key == "shieldActive" && self.hud.borrow().shield
    }

    fn on_rule_action(
        &mut self,
        key: &str,
        _rule: &GameplayRule,
        _event: &GameplayEvent,
        _object: &dyn crate::core::GameplayObject,
    ) {
        if key == "popEffect" {
            self.hud.borrow_mut().bombs_defused += 1;
        }
    }
}

/// One round of the catcher game.
pub struct CatcherGame {
    controller: GameplayController,
    hud: Rc<RefCell<Hud>>,
}

/// Builder for creating a [`CatcherGame`].
pub struct CatcherGameBuilder {
    countdown: u32,
    lives: i32,
    speed_up_at: Option<u32>,
}

impl Default for CatcherGameBuilder {
    fn default() -> Self {
        Self {
            countdown: 45,
            lives: 3,
            speed_up_at: Some(20),
        }
    }
}

impl CatcherGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Round length in seconds.
    pub fn countdown(mut self, seconds: u32) -> Self {
        self.countdown = seconds;
        self
    }

    pub fn lives(mut self, lives: i32) -> Self {
        assert!(lives >= 1, "Catcher needs at least one life");
        self.lives = lives;
        self
    }

    /// When the mid-round speed-up fires; `None` disables it.
    pub fn speed_up_at(mut self, seconds: Option<u32>) -> Self {
        self.speed_up_at = seconds;
        self
    }

    /// Build the round, rules registered and delegate installed.
    pub fn build(self) -> CatcherGame {
        let mut controller =
            GameplayController::new(0, self.lives).with_countdown(self.countdown);

        // The plain outcomes are data, the way a shipped game would load
        // them from a ruleset file.
        let ruleset = vec![
            RuleConfig {
                name: "catchFruit".to_string(),
                event: GameplayEvent::ObjectHit,
                obj_class: FRUIT.to_string(),
                obj_subclass: None,
                delta_score: 10,
                delta_lives: 0,
                priority: 0,
            },
            RuleConfig {
                name: "catchGolden".to_string(),
                event: GameplayEvent::ObjectHit,
                obj_class: FRUIT.to_string(),
                obj_subclass: Some(GOLDEN.to_string()),
                delta_score: 50,
                delta_lives: 0,
                priority: 10,
            },
            RuleConfig {
                name: "missFruit".to_string(),
                event: GameplayEvent::ObjectMissed,
                obj_class: FRUIT.to_string(),
                obj_subclass: None,
                delta_score: 0,
                delta_lives: -1,
                priority: 0,
            },
            RuleConfig {
                name: "catchBomb".to_string(),
                event: GameplayEvent::ObjectHit,
                obj_class: BOMB.to_string(),
                obj_subclass: None,
                delta_score: -25,
                delta_lives: -1,
                priority: 0,
            },
        ];
        controller
            .add_rules_from_configs(ruleset)
            .expect("catcher ruleset uses distinct names");

        // Hooked rules carry behavior keys, so they are built in code.
        controller
            .add_rule(
                GameplayRule::new("shieldedBomb", GameplayEvent::ObjectHit, BOMB)
                    .with_priority(20)
                    .with_score_delta(5)
                    .with_validator("shieldActive")
                    .with_return_event(GameplayEvent::Custom("bombDefused".to_string())),
            )
            .expect("catcher ruleset uses distinct names");
        controller
            .add_rule(
                GameplayRule::new(
                    "defusePop",
                    GameplayEvent::Custom("bombDefused".to_string()),
                    BOMB,
                )
                .with_action("popEffect"),
            )
            .expect("catcher ruleset uses distinct names");

        if let Some(at) = self.speed_up_at {
            controller.schedule_event(at, EventPayload::new().with_tag("speedUp"));
        }

        let hud = Rc::new(RefCell::new(Hud {
            seconds_left: self.countdown,
            ..Hud::default()
        }));
        controller.set_delegate(Box::new(HudDelegate { hud: hud.clone() }));

        CatcherGame { controller, hud }
    }
}

impl CatcherGame {
    /// Start the round.
    pub fn start(&mut self) {
        self.controller.start();
    }

    /// Advance the round by `dt` seconds of host time.
    pub fn tick(&mut self, dt: f32) {
        self.controller.update(dt);

        let bumps = self.hud.borrow().speed_bumps;
        self.controller
            .set_time_dilation(1.0 + 0.25 * bumps as f32);

        self.check_lives();
    }

    /// Report an object the player caught.
    pub fn caught(&mut self, object: &TaggedObject) -> Option<GameplayRule> {
        let outcome = self
            .controller
            .trigger_event(&GameplayEvent::ObjectHit, object);
        self.check_lives();
        outcome
    }

    /// Report an object that fell past the player.
    pub fn missed(&mut self, object: &TaggedObject) -> Option<GameplayRule> {
        let outcome = self
            .controller
            .trigger_event(&GameplayEvent::ObjectMissed, object);
        self.check_lives();
        outcome
    }

    /// Toggle the bomb shield power-up.
    pub fn set_shield(&mut self, active: bool) {
        self.hud.borrow_mut().shield = active;
    }

    pub fn score(&self) -> i32 {
        self.controller.score()
    }

    pub fn lives(&self) -> i32 {
        self.controller.lives()
    }

    /// Seconds remaining on the round clock, as last reported.
    pub fn seconds_left(&self) -> u32 {
        self.hud.borrow().seconds_left
    }

    /// Bombs caught while the shield was up.
    pub fn bombs_defused(&self) -> u32 {
        self.hud.borrow().bombs_defused
    }

    pub fn state(&self) -> GameplayState {
        self.controller.state()
    }

    /// Whether the round ended, by any means.
    pub fn is_round_over(&self) -> bool {
        self.controller.state().is_terminal()
    }

    /// Read access to the underlying controller.
    pub fn controller(&self) -> &GameplayController {
        &self.controller
    }

    /// Running out of lives ends the round. The engine never does this by
    /// itself; the game observes zero lives through the delegate and sets
    /// the state.
    fn check_lives(&mut self) {
        let out_of_lives = self.hud.borrow().out_of_lives;
        if out_of_lives && !self.controller.state().is_terminal() {
            self.controller.set_state(GameplayState::NoLife);
        }
    }
}
