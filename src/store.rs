//! Shared state store: canonical snapshot, last contact, history ring.
//!
//! ```text
//!  collaborators ──mutate()──▶ ┌──────────────────────────┐ ──read()──▶ Reconciler
//!                              │ RwLock<Observed>         │
//!                              │   snapshot, last_contact │ ──read()──▶ diagnostics
//!                              ├──────────────────────────┤
//!  Reconciler ────sample()───▶ │ RwLock<HistoryRing>      │ ──history()─▶ diagnostics
//!                              └──────────────────────────┘
//! ```
//!
//! The locks never escape this module: callers get copies out and hand
//! closures in. A writer holds the lock only for the duration of its
//! closure, so it is always released before the collaborator raises the
//! change signal.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use crate::history::HistoryRing;
use crate::snapshot::{Snapshot, Timestamp};

/// Per-source last-seen timestamps, ordered by source name.
pub type LastContact = BTreeMap<String, Timestamp>;

#[derive(Debug, Default)]
struct Observed {
    snapshot: Snapshot,
    last_contact: LastContact,
}

/// Process-wide store of observed household state.
#[derive(Debug, Default)]
pub struct StateStore {
    observed: RwLock<Observed>,
    history: RwLock<HistoryRing>,
}

impl StateStore {
    /// Zero-valued store: nothing observed yet, history cold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the canonical snapshot.
    pub fn read(&self) -> Snapshot {
        self.observed
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .snapshot
    }

    /// Apply a collaborator update under the write lock.
    ///
    /// Refreshes `source`'s last contact and the snapshot timestamp to
    /// `now`, then runs `f` against the canonical snapshot.
    pub fn mutate<R>(&self, source: &str, now: Timestamp, f: impl FnOnce(&mut Snapshot) -> R) -> R {
        let mut guard = self
            .observed
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        match guard.last_contact.get_mut(source) {
            Some(seen) => *seen = now,
            None => {
                guard.last_contact.insert(source.to_owned(), now);
            }
        }
        guard.snapshot.timestamp = Some(now);
        f(&mut guard.snapshot)
    }

    /// Canonical snapshot and last-contact map taken under one read guard.
    pub fn observed(&self) -> (Snapshot, LastContact) {
        let guard = self
            .observed
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        (guard.snapshot, guard.last_contact.clone())
    }

    /// Copy of the last-contact map.
    pub fn last_contact(&self) -> LastContact {
        self.observed
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .last_contact
            .clone()
    }

    /// Evaluate `f` against the history ring under the read lock.
    pub fn with_history<R>(&self, f: impl FnOnce(&HistoryRing) -> R) -> R {
        let guard = self.history.read().unwrap_or_else(PoisonError::into_inner);
        f(&*guard)
    }

    /// Copy of the whole history ring (diagnostics).
    pub fn history(&self) -> HistoryRing {
        self.with_history(HistoryRing::clone)
    }

    /// Offer `desired` to the history ring. Returns `true` if it was kept.
    pub fn sample(&self, desired: Snapshot, now: Timestamp) -> bool {
        self.history
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .sample(desired, now)
    }
}
