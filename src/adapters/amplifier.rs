//! Amplifier sender.
//!
//! Drains the amplifier channel and writes wire lines to an
//! [`AmplifierLink`]. A source selection is followed by the master volume
//! and subwoofer level configured for that source, so switching inputs
//! always lands at known levels.

use futures_lite::future::block_on;
use heapless::Vec;
use log::{info, warn};

use crate::app::commands::{AmpCommand, WireLine};
use crate::app::ports::AmplifierLink;
use crate::channels::AmplifierChannel;
use crate::config::SourceLevels;
use crate::error::Error;

/// Most lines a single command expands to.
pub const MAX_BURST: usize = 3;

/// Lines written for one channel command, in order.
pub type Burst = Vec<AmpCommand, MAX_BURST>;

/// Expand one reconciler command into the lines sent to the device.
pub fn expand(cmd: AmpCommand, levels: &SourceLevels) -> Burst {
    let mut burst = Burst::new();
    // At most MAX_BURST pushes below.
    let _ = burst.push(cmd);
    if let AmpCommand::SelectSource(source) = cmd {
        let l = levels.get(source);
        let _ = burst.push(AmpCommand::MasterVolume(l.volume));
        let _ = burst.push(AmpCommand::SubwooferLevel(l.subwoofer));
    }
    burst
}

/// Write every line of `cmd`'s expansion, stopping at the first failure.
pub fn deliver(
    cmd: AmpCommand,
    levels: &SourceLevels,
    link: &mut impl AmplifierLink,
) -> Result<(), Error> {
    for line in expand(cmd, levels) {
        link.write_line(&line.wire())?;
    }
    Ok(())
}

/// Sender thread body: runs for the lifetime of the process.
pub fn run_amplifier_sender(
    channel: &AmplifierChannel,
    levels: SourceLevels,
    link: &mut impl AmplifierLink,
) -> ! {
    loop {
        let cmd = block_on(channel.receive());
        if let Err(e) = deliver(cmd, &levels, link) {
            warn!("AMP   | {:?} not delivered: {}", cmd, e);
        }
    }
}

/// Link that only logs each line; stands in for the serial connection.
#[derive(Debug, Default)]
pub struct LogAmplifierLink;

impl AmplifierLink for LogAmplifierLink {
    fn write_line(&mut self, line: &WireLine) -> Result<(), Error> {
        info!("AMP   | -> {}", line.trim_end_matches('\r'));
        Ok(())
    }
}
