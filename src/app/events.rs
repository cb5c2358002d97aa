//! Outbound reconciler events.
//!
//! The [`Reconciler`](super::service::Reconciler) emits these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters on the other side
//! decide what to do with them; the bundled one logs them.

use crate::snapshot::{InputSource, Snapshot};

/// Structured events emitted by the reconciliation core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileEvent {
    /// The reconciler finished its warm-up and entered the loop.
    Started,

    /// One evaluation cycle computed `next` from `current`.
    Evaluated { current: Snapshot, next: Snapshot },

    /// Power-on command emitted.
    AmplifierPowerOn,

    /// Standby command emitted after a full, all-off history window.
    AmplifierStandby,

    /// Standby wanted but the trailing window is cold or saw the
    /// amplifier wanted on.
    StandbyDeferred { warm: bool },

    /// Source-select command emitted.
    SourceChanged { from: InputSource, to: InputSource },

    /// Start-cleaning command emitted.
    CleaningStarted,

    /// Return-to-dock command emitted.
    CleanerDocked,

    /// The desired snapshot was written into the history ring.
    HistorySampled { cursor: usize },
}
