//! Logging utilities.
//!
//! Every diagnostic the engine emits (shader compile/link logs, surface
//! creation failures, material binding status) goes through the `log` facade.
//! This module only wires up the `env_logger` backend.

mod init;

pub use init::{init_logging, LogTarget, LoggingConfig};
