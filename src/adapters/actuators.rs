//! Channel-backed actuator adapter.
//!
//! Implements [`ActuatorPort`] by handing each command to the matching
//! actuator channel. A send parks the reconciler thread while the channel
//! is full, i.e. until the sender thread has taken the previous command.

use futures_lite::future::block_on;

use crate::app::commands::{AmpCommand, CleanerCommand};
use crate::app::ports::ActuatorPort;
use crate::channels::{AmplifierChannel, CleanerChannel};
use crate::snapshot::InputSource;

/// Forwards reconciler commands to the sender threads.
pub struct ChannelActuators<'a> {
    amplifier: &'a AmplifierChannel,
    cleaner: &'a CleanerChannel,
}

impl<'a> ChannelActuators<'a> {
    pub fn new(amplifier: &'a AmplifierChannel, cleaner: &'a CleanerChannel) -> Self {
        Self { amplifier, cleaner }
    }

    fn amp(&self, cmd: AmpCommand) {
        block_on(self.amplifier.send(cmd));
    }

    fn robot(&self, cmd: CleanerCommand) {
        block_on(self.cleaner.send(cmd));
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for ChannelActuators<'_> {
    fn power_on(&mut self) {
        self.amp(AmpCommand::PowerOn);
    }

    fn standby(&mut self) {
        self.amp(AmpCommand::Standby);
    }

    fn select_source(&mut self, source: InputSource) {
        self.amp(AmpCommand::SelectSource(source));
    }

    fn start_cleaning(&mut self) {
        self.robot(CleanerCommand::Start);
    }

    fn dock(&mut self) {
        self.robot(CleanerCommand::Dock);
    }
}
