//! Gameplay event kinds.
//!
//! Events name things that happen to objects during play. Rules listen for
//! one event kind each; the controller routes incoming events to the rules
//! registered for that kind.
//!
//! The set of engine-known kinds is closed, but hosts can extend it through
//! the `Custom` slot without the engine needing to know what the extension
//! means. A custom event matches rules exactly like a built-in one.

use serde::{Deserialize, Serialize};

/// A gameplay event kind.
///
/// Built-in kinds cover the interactions an object-driven arcade game needs:
/// collision outcomes (`ObjectHit`/`ObjectMissed`), play-area crossings
/// (`ObjectEntered`/`ObjectExited`), and the touch lifecycle
/// (`ObjectTouched`/`ObjectHeld`/`ObjectReleased`).
///
/// `Evaluated` and `Ignored` are outcome events: after an event is run
/// through the rules, the controller re-fires the matched rule's follow-up
/// event (`Evaluated` unless the rule overrides it) or `Ignored` when
/// nothing matched. Rules registered for these kinds observe evaluation
/// outcomes.
///
/// ## Serialized form
///
/// Events serialize as plain strings (`"objectHit"`, `"ignored"`, ...) so
/// declarative rule records can name them directly. An unrecognized string
/// deserializes as `Custom`, which means custom names must not shadow the
/// built-in ones.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GameplayEvent {
    /// An object was hit (caught, shot, collided with).
    ObjectHit,
    /// An object was missed (slipped past, despawned unclaimed).
    ObjectMissed,
    /// An object entered the play area.
    ObjectEntered,
    /// An object exited the play area.
    ObjectExited,
    /// A touch began on an object.
    ObjectTouched,
    /// A touch is being held on an object.
    ObjectHeld,
    /// A touch on an object was released.
    ObjectReleased,
    /// Outcome event: a rule matched and was applied.
    Evaluated,
    /// Outcome event: no rule matched.
    Ignored,
    /// A host-defined event kind.
    Custom(String),
}

impl GameplayEvent {
    /// The serialized name of this event kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ObjectHit => "objectHit",
            Self::ObjectMissed => "objectMissed",
            Self::ObjectEntered => "objectEntered",
            Self::ObjectExited => "objectExited",
            Self::ObjectTouched => "objectTouched",
            Self::ObjectHeld => "objectHeld",
            Self::ObjectReleased => "objectReleased",
            Self::Evaluated => "evaluated",
            Self::Ignored => "ignored",
            Self::Custom(name) => name,
        }
    }

    fn builtin(name: &str) -> Option<Self> {
        Some(match name {
            "objectHit" => Self::ObjectHit,
            "objectMissed" => Self::ObjectMissed,
            "objectEntered" => Self::ObjectEntered,
            "objectExited" => Self::ObjectExited,
            "objectTouched" => Self::ObjectTouched,
            "objectHeld" => Self::ObjectHeld,
            "objectReleased" => Self::ObjectReleased,
            "evaluated" => Self::Evaluated,
            "ignored" => Self::Ignored,
            _ => return None,
        })
    }
}

impl From<&str> for GameplayEvent {
    fn from(name: &str) -> Self {
        Self::builtin(name).unwrap_or_else(|| Self::Custom(name.to_string()))
    }
}

impl From<String> for GameplayEvent {
    fn from(name: String) -> Self {
        Self::builtin(&name).unwrap_or(Self::Custom(name))
    }
}

impl From<GameplayEvent> for String {
    fn from(event: GameplayEvent) -> Self {
        match event {
            GameplayEvent::Custom(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for GameplayEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
