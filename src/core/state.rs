//! Gameplay lifecycle states.
//!
//! A controller is always in exactly one [`GameplayState`]. Transitions are
//! explicit — set by the host or by internal logic such as countdown expiry —
//! and every actual transition is reported to the delegate.
//!
//! ## State Classes
//!
//! - **Ticking** states let elapsed time advance and scheduled events fire:
//!   [`Playing`](GameplayState::Playing), the alternate playing modes
//!   `Playing2..Playing5` (cutscenes, reload phases and the like), and the
//!   host-defined `Custom1..Custom5`.
//! - **Terminal** states mark the end of a run: `TimeUp`, `Victory`, `Over`,
//!   `NoLife`, `Quit`. Nothing forbids transitioning out of them again
//!   (e.g. a restart flow), but time no longer advances while in one.
//! - Everything else (`Init`, `Paused`, `Editing`, `Loading`) is neither:
//!   gameplay is not running, but the run is not finished either.

use serde::{Deserialize, Serialize};

/// The lifecycle state of a gameplay controller.
///
/// The set is closed: hosts needing extra states use `Playing2..Playing5`
/// for alternate playing modes and `Custom1..Custom5` for anything else,
/// assigning their own meaning to each.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameplayState {
    /// Freshly constructed, nothing running yet.
    #[default]
    Init,
    /// Normal gameplay.
    Playing,
    /// Gameplay halted by the player; time does not advance.
    Paused,
    /// A countdown ran out.
    TimeUp,
    /// The player won.
    Victory,
    /// The player lost.
    Over,
    /// The player ran out of lives. Never entered automatically — hosts
    /// watch the lives-changed notification and decide.
    NoLife,
    /// The player abandoned the run.
    Quit,
    /// A level editor or similar tool is active.
    Editing,
    /// Assets or level data are being loaded.
    Loading,
    /// Alternate playing mode (host-defined meaning).
    Playing2,
    /// Alternate playing mode (host-defined meaning).
    Playing3,
    /// Alternate playing mode (host-defined meaning).
    Playing4,
    /// Alternate playing mode (host-defined meaning).
    Playing5,
    /// Host-defined state.
    Custom1,
    /// Host-defined state.
    Custom2,
    /// Host-defined state.
    Custom3,
    /// Host-defined state.
    Custom4,
    /// Host-defined state.
    Custom5,
}

impl GameplayState {
    /// Does time advance in this state?
    ///
    /// Ticking covers `Playing`, the alternate playing modes and the custom
    /// states. Custom states count as ticking because they are host-defined
    /// gameplay variants; a host that wants frozen time in one can pause or
    /// suspend the controller.
    #[must_use]
    pub const fn is_ticking(self) -> bool {
        matches!(
            self,
            Self::Playing
                | Self::Playing2
                | Self::Playing3
                | Self::Playing4
                | Self::Playing5
                | Self::Custom1
                | Self::Custom2
                | Self::Custom3
                | Self::Custom4
                | Self::Custom5
        )
    }

    /// Is this an end-of-run state?
    ///
    /// Terminal states expect no further ticking, though explicit
    /// transitions out of them remain legal.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::TimeUp | Self::Victory | Self::Over | Self::NoLife | Self::Quit
        )
    }
}

impl std::fmt::Display for GameplayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Init => "Init",
            Self::Playing => "Playing",
            Self::Paused => "Paused",
            Self::TimeUp => "TimeUp",
            Self::Victory => "Victory",
            Self::Over => "Over",
            Self::NoLife => "NoLife",
            Self::Quit => "Quit",
            Self::Editing => "Editing",
            Self::Loading => "Loading",
            Self::Playing2 => "Playing2",
            Self::Playing3 => "Playing3",
            Self::Playing4 => "Playing4",
            Self::Playing5 => "Playing5",
            Self::Custom1 => "Custom1",
            Self::Custom2 => "Custom2",
            Self::Custom3 => "Custom3",
            Self::Custom4 => "Custom4",
            Self::Custom5 => "Custom5",
        };
        f.write_str(name)
    }
}
