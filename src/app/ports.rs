//! Port traits: the hexagonal boundary between the core and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Reconciler (domain)
//! ```
//!
//! Driven adapters (clock, actuator channels, event sinks, device links)
//! implement these traits. The [`Reconciler`](super::service::Reconciler)
//! consumes them via generics, so the core never touches a thread, a
//! channel or a serial port directly.

use crate::error::Error;
use crate::snapshot::{InputSource, Timestamp};

use super::commands::{CleanerCommand, WireLine};

// ───────────────────────────────────────────────────────────────
// Clock port (driven adapter: wall clock → domain)
// ───────────────────────────────────────────────────────────────

/// Source of wall-clock time.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → command channels)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the reconciler calls this to command actuators.
///
/// A call returns once the command has been handed over; there is no
/// acknowledgement from the device.
pub trait ActuatorPort {
    /// Bring the amplifier out of standby.
    fn power_on(&mut self);

    /// Put the amplifier into standby.
    fn standby(&mut self);

    /// Switch the amplifier input.
    fn select_source(&mut self, source: InputSource);

    /// Start a cleaning-robot cycle.
    fn start_cleaning(&mut self);

    /// Send the cleaning robot back to its dock.
    fn dock(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The core emits structured [`ReconcileEvent`](super::events::ReconcileEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::ReconcileEvent);
}

// ───────────────────────────────────────────────────────────────
// Device links (driven adapters used by the sender collaborators)
// ───────────────────────────────────────────────────────────────

/// Byte-level write side of the amplifier connection.
pub trait AmplifierLink {
    /// Write one carriage-return-terminated command line.
    fn write_line(&mut self, line: &WireLine) -> Result<(), Error>;
}

/// Command side of the cleaning-robot connection.
pub trait CleanerLink {
    fn send(&mut self, command: CleanerCommand) -> Result<(), Error>;
}
