//! Home presence reconciliation core.
//!
//! Fuses collaborator reports into one canonical [`snapshot::Snapshot`],
//! derives the desired household state from it and drives the amplifier
//! and the cleaning robot towards that state. The library exposes every
//! module for the binary and for integration testing.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod channels;
pub mod config;
pub mod diagnostics;
pub mod history;
pub mod policy;
pub mod snapshot;
pub mod store;

mod error;

pub use error::{Error, Result};
