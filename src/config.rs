//! System configuration parameters
//!
//! Tunables for the reconciliation core. Defaults match the living-room
//! installation; an optional JSON file given on the command line overrides
//! them field by field.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::snapshot::InputSource;

/// Output levels applied whenever an input is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Levels {
    /// Master volume (0–98).
    pub volume: u8,
    /// Subwoofer channel level (38–62, 50 = 0 dB).
    pub subwoofer: u8,
}

/// Per-input level table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceLevels {
    pub media_player: Levels,
    pub disc: Levels,
    pub game: Levels,
    pub audio: Levels,
}

impl Default for SourceLevels {
    fn default() -> Self {
        Self {
            media_player: Levels { volume: 60, subwoofer: 50 },
            disc: Levels { volume: 60, subwoofer: 38 },
            game: Levels { volume: 60, subwoofer: 38 },
            audio: Levels { volume: 60, subwoofer: 50 },
        }
    }
}

impl SourceLevels {
    /// Levels configured for `source`.
    pub fn get(&self, source: InputSource) -> Levels {
        match source {
            InputSource::MediaPlayer => self.media_player,
            InputSource::Disc => self.disc,
            InputSource::Game => self.game,
            InputSource::Audio => self.audio,
        }
    }
}

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Delay between launching collaborators and the first evaluation,
    /// so the reconciler never acts on the zero-valued snapshot.
    pub startup_grace_secs: u32,
    /// Volume / subwoofer levels per amplifier input.
    pub source_levels: SourceLevels,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            startup_grace_secs: 10,
            source_levels: SourceLevels::default(),
        }
    }
}

impl SystemConfig {
    pub const MAX_STARTUP_GRACE_SECS: u32 = 300;
    pub const MAX_VOLUME: u8 = 98;
    pub const SUBWOOFER_RANGE: core::ops::RangeInclusive<u8> = 38..=62;

    /// Load from a JSON file, or defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_json(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a (possibly partial) JSON document; absent fields keep defaults.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Reject out-of-range values instead of clamping them.
    pub fn validate(&self) -> Result<(), Error> {
        if self.startup_grace_secs > Self::MAX_STARTUP_GRACE_SECS {
            return Err(Error::Config("startup_grace_secs above 300"));
        }
        for source in InputSource::ALL {
            let levels = self.source_levels.get(source);
            if levels.volume > Self::MAX_VOLUME {
                return Err(Error::Config("volume above 98"));
            }
            if !Self::SUBWOOFER_RANGE.contains(&levels.subwoofer) {
                return Err(Error::Config("subwoofer level outside 38..=62"));
            }
        }
        Ok(())
    }

    pub fn startup_grace(&self) -> Duration {
        Duration::from_secs(u64::from(self.startup_grace_secs))
    }
}
