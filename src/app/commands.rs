//! Outbound actuator commands and their device wire encoding.
//!
//! The reconciler hands these to the actuator channels; sender
//! collaborators translate them into what the device understands.

use core::fmt::Write;

use heapless::String;

use crate::snapshot::InputSource;

/// Longest amplifier line: `PWSTANDBY\r`.
pub const WIRE_LINE_CAP: usize = 16;

/// One ASCII amplifier command line, carriage-return terminated.
pub type WireLine = String<WIRE_LINE_CAP>;

/// Commands for the amplifier (serial line protocol).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmpCommand {
    /// Leave standby.
    PowerOn,
    /// Enter standby.
    Standby,
    /// Switch the input.
    SelectSource(InputSource),
    /// Master volume, 0–98.
    MasterVolume(u8),
    /// Subwoofer channel level, 38–62 (50 = 0 dB).
    SubwooferLevel(u8),
}

impl AmpCommand {
    /// Encode as a wire line, e.g. `SIGAME\r`.
    pub fn wire(self) -> WireLine {
        let mut line = WireLine::new();
        // Every variant fits WIRE_LINE_CAP.
        let _ = match self {
            Self::PowerOn => line.write_str("PWON\r"),
            Self::Standby => line.write_str("PWSTANDBY\r"),
            Self::SelectSource(src) => write!(line, "SI{}\r", src.wire_code()),
            Self::MasterVolume(level) => write!(line, "MV{:02}\r", level),
            Self::SubwooferLevel(level) => write!(line, "PSSWL {:02}\r", level),
        };
        line
    }
}

/// Commands for the cleaning robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanerCommand {
    /// Begin a clean cycle.
    Start,
    /// Abort and return to the dock.
    Dock,
}

impl CleanerCommand {
    /// Symbolic command name understood by the robot.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Dock => "dock",
        }
    }
}
