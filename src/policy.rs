//! Transition function: canonical snapshot + wall clock → desired outputs.
//!
//! Pure and total. No locking, no I/O, no hidden state; the same inputs
//! always produce the same output, which is what lets the reconciler call
//! it every cycle and the diagnostic page call it on every request.
//!
//! ```text
//!  media_audio_only ─┐
//!  amp_link_powered ─┼─▶ amp_powered ─────────────┐
//!  lock_unlocked ────┘                            │ (override)
//!                                                 ▼
//!  weekday + 10:16–12:59 ───────────────▶ cleaner_may_clean
//!
//!  MPLAY ─▶ BD (link) ─▶ GAME (media) ─▶ AUX1 (audio)   last match wins
//! ```

use chrono::{Datelike, Timelike, Weekday};

use crate::snapshot::{InputSource, Snapshot, Timestamp};

/// Derive the desired actuator configuration from `current`.
pub fn desired(current: &Snapshot, now: &Timestamp) -> Snapshot {
    let mut next = Snapshot {
        amp_powered: current.media_audio_only_playing
            || current.amp_link_powered
            || current.lock_unlocked,
        ..Snapshot::default()
    };

    next.amp_source = InputSource::MediaPlayer;
    if current.amp_link_powered {
        next.amp_source = InputSource::Disc;
    }
    if current.media_playing {
        next.amp_source = InputSource::Game;
    }
    if current.media_audio_only_playing {
        next.amp_source = InputSource::Audio;
    }

    next.cleaner_may_clean = in_cleaning_window(now);

    // Someone is home: never clean.
    if next.amp_powered {
        next.cleaner_may_clean = false;
    }

    next
}

/// Work days, from 10:16 up to (excluding) 13:00.
pub fn in_cleaning_window(now: &Timestamp) -> bool {
    let workday = !matches!(now.weekday(), Weekday::Sat | Weekday::Sun);
    let (hour, minute) = (now.hour(), now.minute());
    workday && ((hour == 10 && minute > 15) || hour == 11 || hour == 12)
}
