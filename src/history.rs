//! Trailing-window history of desired configurations.
//!
//! A fixed 60-slot ring sampled at most about once per second, so that a
//! full ring spans roughly the last minute. The reconciler only trusts the
//! ring once every slot has been written: an empty slot means the process
//! has not been running long enough to know what "the last minute" was.
//!
//! ```text
//!   slot:  0    1    2   ...  57   58   59
//!        [off][off][on ] ... [off][ -- ][ -- ]
//!                                  ▲
//!                               cursor (next write)
//! ```
//!
//! Sampling rules:
//! - cursor slot empty → write if ≥ [`FILL_INTERVAL`] since the previous write
//! - cursor slot taken → write once its sample is ≥ [`MAX_SAMPLE_AGE`] old

use chrono::TimeDelta;

use crate::snapshot::{Snapshot, Timestamp};

/// Number of slots in the ring.
pub const HISTORY_CAPACITY: usize = 60;

/// Minimum spacing between writes while the ring is still filling.
pub const FILL_INTERVAL: TimeDelta = TimeDelta::seconds(1);

/// A written slot may be overwritten once it is this old.
pub const MAX_SAMPLE_AGE: TimeDelta = TimeDelta::seconds(60);

/// Fixed-capacity ring of sampled desired snapshots.
#[derive(Debug, Clone)]
pub struct HistoryRing {
    slots: [Option<Snapshot>; HISTORY_CAPACITY],
    cursor: usize,
    last_insert: Option<Timestamp>,
}

impl Default for HistoryRing {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryRing {
    pub fn new() -> Self {
        Self {
            slots: [None; HISTORY_CAPACITY],
            cursor: 0,
            last_insert: None,
        }
    }

    /// Record `desired` at the cursor if the rate limit allows it.
    ///
    /// The stored copy is stamped with `now`. Returns `true` if the ring
    /// advanced.
    pub fn sample(&mut self, desired: Snapshot, now: Timestamp) -> bool {
        let eligible = match &self.slots[self.cursor] {
            None => self
                .last_insert
                .is_none_or(|prev| now - prev >= FILL_INTERVAL),
            Some(old) => old.timestamp.is_none_or(|ts| now - ts >= MAX_SAMPLE_AGE),
        };
        if !eligible {
            return false;
        }

        self.slots[self.cursor] = Some(Snapshot {
            timestamp: Some(now),
            ..desired
        });
        self.cursor = (self.cursor + 1) % HISTORY_CAPACITY;
        self.last_insert = Some(now);
        true
    }

    /// True iff every slot is written and satisfies `pred`.
    pub fn all_satisfy(&self, pred: impl Fn(&Snapshot) -> bool) -> bool {
        self.slots
            .iter()
            .all(|slot| slot.as_ref().is_some_and(&pred))
    }

    /// Whether every slot has been written at least once.
    pub fn is_warm(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Index of the slot the next sample will be written to.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of written slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.last_insert.is_none()
    }

    /// Slots in index order, `None` for never-written slots.
    pub fn slots(&self) -> impl Iterator<Item = (usize, Option<&Snapshot>)> {
        self.slots.iter().enumerate().map(|(i, s)| (i, s.as_ref()))
    }
}
