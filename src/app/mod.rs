//! Application core: reconciliation logic, zero I/O.
//!
//! This module contains the business rules that turn the canonical
//! household snapshot into actuator commands: power and input decisions,
//! the standby hysteresis and the once-a-day cleaning latch. All
//! interaction with devices happens through **port traits** defined in
//! [`ports`], keeping this layer testable without threads or hardware.

pub mod commands;
pub mod events;
pub mod ports;
pub mod reporter;
pub mod service;
