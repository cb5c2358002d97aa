//! Cleaning-robot sender.

use futures_lite::future::block_on;
use log::{info, warn};

use crate::app::commands::CleanerCommand;
use crate::app::ports::CleanerLink;
use crate::channels::CleanerChannel;
use crate::error::Error;

/// Sender thread body: runs for the lifetime of the process.
pub fn run_cleaner_sender(channel: &CleanerChannel, link: &mut impl CleanerLink) -> ! {
    loop {
        let cmd = block_on(channel.receive());
        if let Err(e) = link.send(cmd) {
            warn!("CLEAN | {} not delivered: {}", cmd.as_str(), e);
        }
    }
}

/// Link that only logs each command; stands in for the robot's network API.
#[derive(Debug, Default)]
pub struct LogCleanerLink;

impl CleanerLink for LogCleanerLink {
    fn send(&mut self, command: CleanerCommand) -> Result<(), Error> {
        info!("CLEAN | -> {}", command.as_str());
        Ok(())
    }
}
