//! Inbound side for sensor collaborators.
//!
//! A [`Reporter`] bundles the two steps every collaborator performs after
//! observing something: mutate the canonical snapshot under the store's
//! write lock, then (lock released) wake the reconciler. Doing both in one
//! call keeps "mutation happens-before wake" true at every call site.

use std::sync::Arc;

use crate::channels::ChangeSignal;
use crate::snapshot::Snapshot;
use crate::store::StateStore;

use super::ports::Clock;

/// Handle owned by one collaborator, tagged with its source name.
pub struct Reporter<C> {
    source: String,
    store: Arc<StateStore>,
    signal: Arc<ChangeSignal>,
    clock: C,
}

impl<C: Clock> Reporter<C> {
    pub fn new(
        source: impl Into<String>,
        store: Arc<StateStore>,
        signal: Arc<ChangeSignal>,
        clock: C,
    ) -> Self {
        Self {
            source: source.into(),
            store,
            signal,
            clock,
        }
    }

    /// Source name recorded in the last-contact map.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Apply `update` to the canonical snapshot and wake the reconciler.
    pub fn report<R>(&self, update: impl FnOnce(&mut Snapshot) -> R) -> R {
        let out = self.store.mutate(&self.source, self.clock.now(), update);
        self.signal.notify();
        out
    }
}
