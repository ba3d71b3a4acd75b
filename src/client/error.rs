/// Failures raised by the store client under test.
///
/// `Clone + PartialEq` so pre-loaded stub outcomes can be reproduced exactly
/// and asserted against in tests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// Failure to establish or release a connection.
    ///
    /// Suppressed during teardown, propagated during setup.
    #[error("Connection failure: {0}")]
    Connection(String),

    /// A command was rejected or failed after dispatch
    #[error("Command failed: {0}")]
    Command(String),
}

#[doc(hidden)]
pub type ClientResult<T> = std::result::Result<T, ClientError>;
