//! Client boundary for the store under test
//!
//! The client library itself is an external collaborator; the harness consumes
//! it through a narrow interface:
//! - [`StoreClient`] - typed commands against one client handle
//! - [`Connector`] - constructs a handle from a [`ClientConfig`]
//! - [`NodeDescriptor`] / [`ClientConfig`] - immutable construction inputs
//!
//! Both traits are mockable in tests so harness logic can be exercised without
//! any real client or network.

mod config;
mod error;

pub use config::*;
pub use error::*;

#[cfg(test)]
use mockall::automock;

use async_trait::async_trait;

/// One open handle to the store under test.
///
/// Exclusively owned by a single test case for its lifetime. Implementations
/// must tolerate repeated [`close`](StoreClient::close) calls without raising.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StoreClient: Send + Sync {
    /// Writes a key with optional expiration and conditional-existence flags.
    ///
    /// # Errors
    /// - [`ClientError::Connection`] when no node is reachable
    /// - [`ClientError::Command`] when the store rejects the write
    async fn set(
        &self,
        key: &[u8],
        value: &[u8],
        expiration: Option<u32>,
        nx: bool,
        xx: bool,
    ) -> ClientResult<()>;

    /// Dispatches a raw command as a sequence of parts, returning the reply
    /// payload when the command produces one.
    async fn execute(
        &self,
        parts: &[Vec<u8>],
    ) -> ClientResult<Option<Vec<u8>>>;

    /// Releases the handle's resources.
    ///
    /// # Errors
    /// - [`ClientError::Connection`] when the underlying connection cannot be
    ///   shut down cleanly
    async fn close(&mut self) -> ClientResult<()>;
}

/// Constructs client handles from an immutable [`ClientConfig`].
///
/// A connector may dial the configured nodes during `connect` when
/// `auto_connect` is set; that is the only I/O the harness performs outside
/// explicit test actions. Construction failures propagate to the caller as a
/// failed setup.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(
        &self,
        config: ClientConfig,
    ) -> ClientResult<Box<dyn StoreClient>>;
}
