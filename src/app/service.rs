//! Reconciler: the control loop at the centre of the core.
//!
//! [`Reconciler`] turns the canonical snapshot into actuator commands.
//! All I/O flows through port traits injected at call sites, so a whole
//! cycle is testable with recording mocks and a fixed clock.
//!
//! ```text
//!                 ┌──────────────────────────────┐
//!  StateStore ──▶ │          Reconciler          │ ──▶ ActuatorPort
//!  ChangeSignal ─▶│ policy · hysteresis · daily  │ ──▶ EventSink
//!  Clock ───────▶ │ clean latch · history sample │
//!                 └──────────────────────────────┘
//! ```
//!
//! The reconciler never writes `next` back into the canonical snapshot;
//! only collaborators change what the household *is*.

use std::sync::Arc;

use chrono::NaiveDate;
use log::{debug, info};

use crate::channels::ChangeSignal;
use crate::config::SystemConfig;
use crate::policy;
use crate::snapshot::{Snapshot, Timestamp};
use crate::store::StateStore;

use super::events::ReconcileEvent;
use super::ports::{ActuatorPort, Clock, EventSink};

// ───────────────────────────────────────────────────────────────
// Reconciler
// ───────────────────────────────────────────────────────────────

/// The reconciliation loop and its private state.
pub struct Reconciler {
    store: Arc<StateStore>,
    config: SystemConfig,
    /// Calendar day of the last start-cleaning command.
    last_clean: Option<NaiveDate>,
    cycles: u64,
}

impl Reconciler {
    pub fn new(store: Arc<StateStore>, config: SystemConfig) -> Self {
        Self {
            store,
            config,
            last_clean: None,
            cycles: 0,
        }
    }

    // ── Loop ──────────────────────────────────────────────────

    /// Run for the lifetime of the process.
    ///
    /// Sleeps through the startup grace period first, then evaluates once
    /// per change notification. Notifications raised during the grace
    /// period collapse into the first cycle.
    pub fn run(
        mut self,
        signal: &ChangeSignal,
        clock: &impl Clock,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> ! {
        self.warm_up(sink);
        loop {
            self.step(signal, clock, hw, sink);
        }
    }

    /// Block for the startup grace period so the first evaluation never
    /// sees the zero-valued snapshot. Touches neither the store nor the
    /// signal.
    pub fn warm_up(&self, sink: &mut impl EventSink) {
        let grace = self.config.startup_grace();
        info!("Reconciler: waiting {:?} for collaborators' first reports", grace);
        std::thread::sleep(grace);
        sink.emit(&ReconcileEvent::Started);
    }

    /// Wait for the next notification, then run one cycle.
    pub fn step(
        &mut self,
        signal: &ChangeSignal,
        clock: &impl Clock,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> Snapshot {
        signal.wait();
        self.cycle(clock.now(), hw, sink)
    }

    // ── Per-cycle evaluation ──────────────────────────────────

    /// Evaluate once at `now` and return the desired snapshot.
    pub fn cycle(
        &mut self,
        now: Timestamp,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> Snapshot {
        self.cycles += 1;

        // 1. Canonical state → desired state
        let current = self.store.read();
        debug!("determining outputs based on {:?}", current);
        let next = policy::desired(&current, &now);
        sink.emit(&ReconcileEvent::Evaluated { current, next });

        // 2. Amplifier power. A power-on is held back while the input
        //    still has to change.
        if current.amp_powered != next.amp_powered
            && (!next.amp_powered || current.amp_source == next.amp_source)
        {
            if next.amp_powered {
                hw.power_on();
                sink.emit(&ReconcileEvent::AmplifierPowerOn);
            } else {
                self.standby_with_hysteresis(hw, sink);
            }
        }

        // 3. Amplifier input
        if next.amp_powered && current.amp_source != next.amp_source {
            hw.select_source(next.amp_source);
            sink.emit(&ReconcileEvent::SourceChanged {
                from: current.amp_source,
                to: next.amp_source,
            });
        }

        // 4. Cleaning robot, at most one start per calendar day
        let today = now.date_naive();
        if next.cleaner_may_clean && self.last_clean != Some(today) {
            self.last_clean = Some(today);
            hw.start_cleaning();
            sink.emit(&ReconcileEvent::CleaningStarted);
        }
        if !next.cleaner_may_clean && current.cleaner_cleaning {
            hw.dock();
            sink.emit(&ReconcileEvent::CleanerDocked);
        }

        // 5. History sample (rate limited inside the ring)
        if self.store.sample(next, now) {
            let cursor = self.store.with_history(|h| h.cursor());
            sink.emit(&ReconcileEvent::HistorySampled { cursor });
        }

        next
    }

    // ── Queries ───────────────────────────────────────────────

    /// Evaluation cycles run since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Day of the most recent start-cleaning command.
    pub fn last_clean(&self) -> Option<NaiveDate> {
        self.last_clean
    }

    // ── Internal ──────────────────────────────────────────────

    /// Standby only if the amplifier was wanted off for the whole window.
    fn standby_with_hysteresis(&self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        let (always_off, warm) = self
            .store
            .with_history(|h| (h.all_satisfy(|s| !s.amp_powered), h.is_warm()));

        if always_off {
            hw.standby();
            sink.emit(&ReconcileEvent::AmplifierStandby);
        } else {
            sink.emit(&ReconcileEvent::StandbyDeferred { warm });
        }
    }
}
