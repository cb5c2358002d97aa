//! The canonical household snapshot and the amplifier input sources.
//!
//! One [`Snapshot`] shape serves both sides of the reconciler: sensor
//! collaborators fill in what they *observe*, and the transition function
//! produces the *desired* configuration in the same struct.

use core::fmt;
use core::str::FromStr;

use chrono::{DateTime, Local};
use crate::error::Error;

/// Wall-clock instant used throughout the core.
pub type Timestamp = DateTime<Local>;

// ---------------------------------------------------------------------------
// Amplifier input source
// ---------------------------------------------------------------------------

/// Amplifier input selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputSource {
    /// Default input (media PC).
    #[default]
    MediaPlayer,
    /// Disc player / HTPC, powered whenever its link is up.
    Disc,
    /// Video streaming stick.
    Game,
    /// Audio-only streaming receiver.
    Audio,
}

impl InputSource {
    pub const ALL: [Self; 4] = [Self::MediaPlayer, Self::Disc, Self::Game, Self::Audio];

    /// Input code used by the amplifier's `SI` command.
    pub const fn wire_code(self) -> &'static str {
        match self {
            Self::MediaPlayer => "MPLAY",
            Self::Disc => "BD",
            Self::Game => "GAME",
            Self::Audio => "AUX1",
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_code())
    }
}

impl FromStr for InputSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|src| src.wire_code().eq_ignore_ascii_case(s))
            .ok_or(Error::UnknownSource)
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// A single consistent reading of every tracked household signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Snapshot {
    /// Video streaming stick is playing.
    pub media_playing: bool,
    /// Audio-only streaming receiver is playing.
    pub media_audio_only_playing: bool,
    /// Device behind the amplifier link answers pings.
    pub amp_link_powered: bool,
    /// Entry lock reports unlocked (someone is home).
    pub lock_unlocked: bool,
    /// Amplifier is powered on.
    pub amp_powered: bool,
    /// Selected amplifier input. Only meaningful alongside `amp_powered`.
    pub amp_source: InputSource,
    /// Cleaning robot is allowed to run right now.
    pub cleaner_may_clean: bool,
    /// Cleaning robot reports an active clean cycle.
    pub cleaner_cleaning: bool,
    /// When this snapshot was produced; `None` if never recorded.
    pub timestamp: Option<Timestamp>,
}
