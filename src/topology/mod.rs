//! Replication-topology control for a live two-node deployment.
//!
//! Talks to the secondary node's administrative port directly over raw TCP,
//! one short-lived connection per directive. Socket operations are
//! deliberately blocking: the test needs a strict before/after ordering
//! relative to the settling waits, so the calls run to completion on the
//! calling thread instead of interleaving with the async scheduler.

use std::fmt;
use std::io::Write;
use std::net::TcpStream;
use std::time::Duration;

use tracing::debug;

use crate::HarnessSettings;
use crate::Result;

/// Fallback settling interval after each topology-changing directive.
///
/// The store applies replication state changes asynchronously to the
/// directive's acknowledgment and exposes no completion signal, so a fixed
/// wait is the best-effort synchronization point.
pub const DEFAULT_SETTLE_INTERVAL: Duration = Duration::from_millis(500);

/// Administrative directive sent to a replica-capable node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplicaDirective {
    /// Sever the replication link; the node becomes a standalone primary.
    Unattach,
    /// Attach as a replica mirroring the given primary.
    AttachTo { host: String, port: u16 },
}

impl fmt::Display for ReplicaDirective {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            ReplicaDirective::Unattach => write!(f, "SLAVEOF NO ONE"),
            ReplicaDirective::AttachTo { host, port } => {
                write!(f, "SLAVEOF {host} {port}")
            }
        }
    }
}

/// Demotes and promotes the secondary node of a two-node deployment.
///
/// No retries anywhere: an unreachable secondary is a broken test
/// precondition and the transport error propagates to the test framework.
pub struct TopologyController {
    replica: (String, u16),
    primary: (String, u16),
    settle: Duration,
}

impl TopologyController {
    pub fn new(
        replica: (String, u16),
        primary: (String, u16),
    ) -> Self {
        Self {
            replica,
            primary,
            settle: DEFAULT_SETTLE_INTERVAL,
        }
    }

    /// Builds a controller for the environment-configured node pair.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] when `REDIS2_PORT` is unset.
    ///
    /// [`Error::InvalidConfig`]: crate::Error::InvalidConfig
    pub fn from_settings(settings: &HarnessSettings) -> Result<Self> {
        Ok(Self::new(settings.replica_addr()?, settings.primary_addr()))
    }

    /// Overrides the settling interval (default 500 ms).
    pub fn settle_interval(
        mut self,
        settle: Duration,
    ) -> Self {
        self.settle = settle;
        self
    }

    /// Severs the secondary's replication link, making it a standalone
    /// primary.
    pub fn demote(&self) -> Result<()> {
        debug!("Making {:?} a replica of no one", self.replica);
        self.send_directive(&ReplicaDirective::Unattach)
    }

    /// Re-attaches the secondary as a replica of the configured primary.
    pub fn promote(&self) -> Result<()> {
        debug!("Making {:?} a replica of {:?}", self.replica, self.primary);
        self.send_directive(&ReplicaDirective::AttachTo {
            host: self.primary.0.clone(),
            port: self.primary.1,
        })
    }

    /// Performs a full demote -> settle -> promote -> settle cycle.
    ///
    /// Strictly ordered: replication state transitions are not idempotent
    /// with respect to ordering, so nothing here runs concurrently. The
    /// settling waits are async sleeps; the socket operations themselves stay
    /// blocking.
    pub async fn reset_replica_link(&self) -> Result<()> {
        debug!("Resetting replica link");
        self.demote()?;
        tokio::time::sleep(self.settle).await;
        self.promote()?;
        tokio::time::sleep(self.settle).await;
        Ok(())
    }

    /// One connection per directive: open, send a single ASCII line terminated
    /// by CR-LF, close. Dropping the stream closes it even when the send
    /// fails.
    fn send_directive(
        &self,
        directive: &ReplicaDirective,
    ) -> Result<()> {
        let mut stream = TcpStream::connect(&self.replica)?;
        write!(stream, "{directive}\r\n")?;
        stream.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod topology_test;
