//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements    | Connects to                     |
//! |-------------|---------------|---------------------------------|
//! | `actuators` | ActuatorPort  | amplifier / cleaner channels    |
//! | `amplifier` | sender thread | AmplifierLink (serial lines)    |
//! | `cleaner`   | sender thread | CleanerLink (robot commands)    |
//! | `http`      | (router)      | status page, collaborator input |
//! | `log_sink`  | EventSink     | `log` output                    |
//! | `time`      | Clock         | local wall clock                |

pub mod actuators;
pub mod amplifier;
pub mod cleaner;
pub mod http;
pub mod log_sink;
pub mod time;
