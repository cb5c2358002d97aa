//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific subsystem
//! against mock adapters. Nothing here touches a real device or socket.

mod mock_ports;
mod reconciler_tests;
mod startup_tests;
