//! Logging setup.
//!
//! Everything in the crate logs through the `log` facade; binaries call
//! [`init_logging`] once to install `env_logger` as the backend.

mod init;

pub use init::{LoggingConfig, init_logging};
