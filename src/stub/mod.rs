//! Deterministic command-outcome stubbing.
//!
//! Lets code under test await the result of a store command without any
//! network I/O: [`StubClient`] stands in for a real client handle, and every
//! command it receives resolves immediately to a pre-loaded [`Outcome`].
//! Resolution is synchronous from the caller's perspective even though the
//! call boundary stays asynchronous for interface compatibility with real
//! command dispatch.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::Context;
use std::task::Poll;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;

use crate::ClientConfig;
use crate::ClientError;
use crate::ClientResult;
use crate::Connector;
use crate::StoreClient;

/// Pre-determined outcome of a stubbed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(Option<Vec<u8>>),
    Failure(ClientError),
}

impl Outcome {
    fn into_reply(self) -> ClientResult<Option<Vec<u8>>> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(e) => Err(e),
        }
    }
}

/// A command result that is already resolved at construction time.
///
/// Polling returns `Ready` on the first poll with exactly the constructed
/// outcome; no suspension ever occurs.
pub struct DeferredResult {
    reply: Option<ClientResult<Option<Vec<u8>>>>,
}

impl DeferredResult {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            reply: Some(outcome.into_reply()),
        }
    }

    pub fn success(value: Option<Vec<u8>>) -> Self {
        Self::new(Outcome::Success(value))
    }

    pub fn failure(error: ClientError) -> Self {
        Self::new(Outcome::Failure(error))
    }
}

impl Future for DeferredResult {
    type Output = ClientResult<Option<Vec<u8>>>;

    fn poll(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Self::Output> {
        let reply = self
            .reply
            .take()
            .expect("DeferredResult polled after resolution");
        Poll::Ready(reply)
    }
}

/// Stand-in client handle whose commands resolve to a pre-loaded outcome.
///
/// Cheap to clone; all clones share one outcome slot, so a test can keep a
/// handle for [`stub_result`](StubClient::stub_result) while the harness owns
/// the handle issued through the [`Connector`] impl. An empty slot is a valid
/// "don't care" state: commands resolve to an empty success, never an error.
#[derive(Clone, Default)]
pub struct StubClient {
    slot: Arc<Mutex<Option<Outcome>>>,
}

impl StubClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the outcome produced by subsequent commands.
    pub fn stub_result(
        &self,
        outcome: Outcome,
    ) {
        *self.slot.lock() = Some(outcome);
    }

    /// Empties the outcome slot.
    pub fn clear(&self) {
        *self.slot.lock() = None;
    }

    fn deferred(&self) -> DeferredResult {
        let outcome = self.slot.lock().clone();
        DeferredResult::new(outcome.unwrap_or(Outcome::Success(None)))
    }
}

#[async_trait]
impl StoreClient for StubClient {
    async fn set(
        &self,
        _key: &[u8],
        _value: &[u8],
        _expiration: Option<u32>,
        _nx: bool,
        _xx: bool,
    ) -> ClientResult<()> {
        self.deferred().await.map(|_| ())
    }

    async fn execute(
        &self,
        _parts: &[Vec<u8>],
    ) -> ClientResult<Option<Vec<u8>>> {
        self.deferred().await
    }

    async fn close(&mut self) -> ClientResult<()> {
        Ok(())
    }
}

#[async_trait]
impl Connector for StubClient {
    /// Hands out a clone sharing this stub's outcome slot.
    ///
    /// The slot is emptied first so every test case starts from the
    /// "no outcome configured" state.
    async fn connect(
        &self,
        _config: ClientConfig,
    ) -> ClientResult<Box<dyn StoreClient>> {
        debug!("Issuing stubbed client handle");
        self.clear();
        Ok(Box::new(self.clone()))
    }
}
