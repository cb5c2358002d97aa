//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing each reconciler event as one log
//! line. Per-cycle evaluations go to `debug`, commands to `info`.

use log::{debug, info};

use crate::app::events::ReconcileEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`ReconcileEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &ReconcileEvent) {
        match event {
            ReconcileEvent::Started => {
                info!("START | reconciler running");
            }
            ReconcileEvent::Evaluated { current, next } => {
                debug!(
                    "EVAL  | amp={}/{} source={}/{} may_clean={} cleaning={}",
                    current.amp_powered,
                    next.amp_powered,
                    current.amp_source,
                    next.amp_source,
                    next.cleaner_may_clean,
                    current.cleaner_cleaning,
                );
            }
            ReconcileEvent::AmplifierPowerOn => {
                info!("AMP   | power on");
            }
            ReconcileEvent::AmplifierStandby => {
                info!("AMP   | standby");
            }
            ReconcileEvent::StandbyDeferred { warm } => {
                info!("AMP   | not turning amplifier off yet (hysteresis, warm={})", warm);
            }
            ReconcileEvent::SourceChanged { from, to } => {
                info!("AMP   | changing source from {} to {}", from, to);
            }
            ReconcileEvent::CleaningStarted => {
                info!("CLEAN | start");
            }
            ReconcileEvent::CleanerDocked => {
                info!("CLEAN | dock");
            }
            ReconcileEvent::HistorySampled { cursor } => {
                debug!("HIST  | sampled, cursor={}", cursor);
            }
        }
    }
}
