//! Mock adapters for integration tests.
//!
//! Record every port call so tests can assert on the full command history
//! without threads, channels or devices.

use std::cell::Cell;

use chrono::{Local, TimeDelta, TimeZone};
use homesync::Error;
use homesync::app::commands::WireLine;
use homesync::app::events::ReconcileEvent;
use homesync::app::ports::{ActuatorPort, AmplifierLink, Clock, EventSink};
use homesync::snapshot::{InputSource, Timestamp};

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCall {
    PowerOn,
    Standby,
    SelectSource(InputSource),
    StartCleaning,
    Dock,
}

// ── MockActuators ─────────────────────────────────────────────

#[derive(Default)]
pub struct MockActuators {
    pub calls: Vec<ActuatorCall>,
}

#[allow(dead_code)]
impl MockActuators {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, call: ActuatorCall) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }

    pub fn take(&mut self) -> Vec<ActuatorCall> {
        std::mem::take(&mut self.calls)
    }
}

impl ActuatorPort for MockActuators {
    fn power_on(&mut self) {
        self.calls.push(ActuatorCall::PowerOn);
    }

    fn standby(&mut self) {
        self.calls.push(ActuatorCall::Standby);
    }

    fn select_source(&mut self, source: InputSource) {
        self.calls.push(ActuatorCall::SelectSource(source));
    }

    fn start_cleaning(&mut self) {
        self.calls.push(ActuatorCall::StartCleaning);
    }

    fn dock(&mut self) {
        self.calls.push(ActuatorCall::Dock);
    }
}

// ── Event sink ────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<ReconcileEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deferrals(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ReconcileEvent::StandbyDeferred { .. }))
            .count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &ReconcileEvent) {
        self.events.push(event.clone());
    }
}

// ── Amplifier link ────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingLink {
    pub lines: Vec<String>,
}

impl AmplifierLink for RecordingLink {
    fn write_line(&mut self, line: &WireLine) -> Result<(), Error> {
        self.lines.push(line.as_str().to_owned());
        Ok(())
    }
}

// ── Clock ─────────────────────────────────────────────────────

/// Manually advanced clock.
pub struct MockClock {
    now: Cell<Timestamp>,
}

#[allow(dead_code)]
impl MockClock {
    pub fn at(now: Timestamp) -> Self {
        Self { now: Cell::new(now) }
    }

    pub fn advance(&self, secs: i64) {
        self.now.set(self.now.get() + TimeDelta::seconds(secs));
    }
}

impl Clock for MockClock {
    fn now(&self) -> Timestamp {
        self.now.get()
    }
}

// ── Fixed points in time ──────────────────────────────────────
// 2024-03-04 is a Monday.

#[allow(dead_code)]
pub fn local(day: u32, h: u32, m: u32, s: u32) -> Timestamp {
    Local.with_ymd_and_hms(2024, 3, day, h, m, s).unwrap()
}

#[allow(dead_code)]
pub fn monday_evening() -> Timestamp {
    local(4, 20, 0, 0)
}

#[allow(dead_code)]
pub fn monday_late_morning() -> Timestamp {
    local(4, 11, 0, 0)
}
