//! Harness Error Hierarchy
//!
//! Categorizes failures by the layer they originate from: the store client
//! under test, raw transport sockets used for topology control, and the
//! environment-derived configuration surface.

use crate::ClientError;

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failures surfaced by the store client under test
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Raw socket connect/send failures from topology control.
    ///
    /// Topology control is a test precondition, not a tested behavior, so
    /// these are never caught inside the harness.
    #[error("Transport failure: {0}")]
    Transport(#[from] std::io::Error),

    /// Environment configuration could not be loaded or deserialized
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    /// Harness configuration validation failures
    #[error("Invalid harness configuration: {0}")]
    InvalidConfig(String),
}
