//! Inter-thread communication: change signal and actuator channels.
//!
//! Uses `embassy-sync` primitives to bridge the collaborator threads, the
//! synchronous reconciler loop and the actuator sender threads. The
//! futures are driven with `futures_lite::future::block_on`, so every
//! waiting side simply parks its own OS thread.
//!
//! ```text
//! ┌──────────────┐  notify()   ┌──────────────┐  AmpCommand    ┌─────────────┐
//! │ Collaborator │────────────▶│  Reconciler  │───────────────▶│ Amp sender  │
//! │  (threads)   │ ChangeSignal│   (thread)   │  CleanerCommand├─────────────┤
//! └──────────────┘             └──────────────┘───────────────▶│ Robot sender│
//!                                                              └─────────────┘
//! ```
//!
//! The signal carries no payload: on wake the reconciler re-reads the
//! [`StateStore`](crate::store::StateStore). Notifications raised while
//! the reconciler is busy are retained and coalesce into one more cycle.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use futures_lite::future::block_on;

// The `std` feature of critical-section provides the lock behind
// `CriticalSectionRawMutex` on hosted targets.
use critical_section as _;

use crate::app::commands::{AmpCommand, CleanerCommand};

/// Channel depth for actuator commands. A second send blocks until the
/// sender thread has taken the first.
pub const ACTUATOR_DEPTH: usize = 1;

/// Reconciler → amplifier sender.
pub type AmplifierChannel = Channel<CriticalSectionRawMutex, AmpCommand, ACTUATOR_DEPTH>;

/// Reconciler → cleaning-robot sender.
pub type CleanerChannel = Channel<CriticalSectionRawMutex, CleanerCommand, ACTUATOR_DEPTH>;

/// Payload-free wake-up from collaborators to the reconciler.
pub struct ChangeSignal {
    inner: Signal<CriticalSectionRawMutex, ()>,
}

impl Default for ChangeSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeSignal {
    pub const fn new() -> Self {
        Self {
            inner: Signal::new(),
        }
    }

    /// Announce that canonical state changed. Never blocks.
    pub fn notify(&self) {
        self.inner.signal(());
    }

    /// Park the calling thread until the next notification.
    pub fn wait(&self) {
        block_on(self.inner.wait());
    }

    /// Consume a pending notification without blocking.
    pub fn try_take(&self) -> bool {
        self.inner.try_take().is_some()
    }

    /// Whether a notification is pending.
    pub fn is_pending(&self) -> bool {
        self.inner.signaled()
    }
}
