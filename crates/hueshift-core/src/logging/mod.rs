//! Logging utilities.
//!
//! The library only emits through the `log` facade; hosts that want output
//! without wiring their own backend call [`init_logging`] early.

mod init;

pub use init::{init_logging, LoggingConfig};
