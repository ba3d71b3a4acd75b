//! Environment-derived harness configuration.
//!
//! All connection parameters come from process environment variables with
//! fixed fallback defaults:
//! - `REDIS_HOST` (default `127.0.0.1`) - host of both nodes
//! - `REDIS1_PORT` (default `6379`) - primary node port
//! - `REDIS2_PORT` - secondary (replica-capable) node port, required only when
//!   topology control is used
//! - `REDIS_DB` (default `12`) - logical database index for all connections

mod resolver;
pub use resolver::*;

use config::Config;
use config::Environment;
use serde::Deserialize;

use crate::Error;
use crate::NodeDescriptor;
use crate::Result;

#[derive(Debug, Deserialize, Clone)]
pub struct HarnessSettings {
    #[serde(default = "default_host")]
    pub redis_host: String,

    #[serde(default = "default_primary_port")]
    pub redis1_port: u16,

    /// No default: topology control fails loudly when it is not configured.
    #[serde(default)]
    pub redis2_port: Option<u16>,

    #[serde(default = "default_db")]
    pub redis_db: u32,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_primary_port() -> u16 {
    6379
}

fn default_db() -> u32 {
    12
}

impl Default for HarnessSettings {
    fn default() -> Self {
        Self {
            redis_host: default_host(),
            redis1_port: default_primary_port(),
            redis2_port: None,
            redis_db: default_db(),
        }
    }
}

impl HarnessSettings {
    /// Loads settings from the process environment, falling back to the
    /// hardcoded defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let settings = Config::builder()
            .add_source(Environment::default().try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// Address of the primary node.
    pub fn primary_addr(&self) -> (String, u16) {
        (self.redis_host.clone(), self.redis1_port)
    }

    /// Address of the replica-capable secondary node.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] when `REDIS2_PORT` is unset.
    pub fn replica_addr(&self) -> Result<(String, u16)> {
        let port = self.redis2_port.ok_or_else(|| {
            Error::InvalidConfig("REDIS2_PORT must be set for topology control".into())
        })?;
        Ok((self.redis_host.clone(), port))
    }

    /// Descriptor for the primary node on the configured logical database.
    pub fn primary_node(&self) -> NodeDescriptor {
        NodeDescriptor::new(self.redis_host.clone(), self.redis1_port, self.redis_db)
    }
}
