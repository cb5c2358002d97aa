//! Unified error types for the reconciliation core.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! binary's error handling uniform. All variants are `Copy` so they can be
//! passed through the sender threads without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration is invalid or could not be loaded.
    Config(&'static str),
    /// An amplifier input code did not match any known source.
    UnknownSource,
    /// A device link rejected or failed to carry a command.
    Link(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::UnknownSource => write!(f, "unknown amplifier source"),
            Self::Link(msg) => write!(f, "link: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
