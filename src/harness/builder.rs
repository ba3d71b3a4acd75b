use tracing::debug;

use super::Harness;
use crate::ClientConfig;
use crate::Connector;
use crate::EndpointResolver;
use crate::FixedHostResolver;
use crate::HarnessSettings;
use crate::NodeDescriptor;
use crate::Result;

const DEFAULT_EXPIRATION_SECS: u32 = 5;

/// Per-test-case construction of a [`Harness`].
///
/// Defaults mirror what most test cases want: clustering off, auto-connect
/// on, 5 s default expiration, node list derived from the environment
/// settings. Each can be overridden before [`build`](HarnessBuilder::build).
pub struct HarnessBuilder {
    clustering: bool,
    auto_connect: bool,
    default_expiration: u32,
    settings: Option<HarnessSettings>,
    endpoints: Option<Vec<String>>,
    resolver: Option<Box<dyn EndpointResolver>>,
}

impl HarnessBuilder {
    pub fn new() -> Self {
        Self {
            clustering: false,
            auto_connect: true,
            default_expiration: DEFAULT_EXPIRATION_SECS,
            settings: None,
            endpoints: None,
            resolver: None,
        }
    }

    /// Enable/disable replica-set clustering (default: disabled)
    pub fn clustering(
        mut self,
        clustering: bool,
    ) -> Self {
        self.clustering = clustering;
        self
    }

    /// Connect during construction instead of on first command (default: on)
    pub fn auto_connect(
        mut self,
        auto_connect: bool,
    ) -> Self {
        self.auto_connect = auto_connect;
        self
    }

    /// Expiration applied by [`Harness::expiring_set`] when the caller passes
    /// none (default: 5 s)
    pub fn default_expiration(
        mut self,
        seconds: u32,
    ) -> Self {
        self.default_expiration = seconds;
        self
    }

    /// Injects settings directly, bypassing the process environment.
    pub fn settings(
        mut self,
        settings: HarnessSettings,
    ) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Replaces the node list with endpoints announced by the store, each
    /// rewritten through the endpoint resolver before dialing.
    pub fn endpoints(
        mut self,
        endpoints: Vec<String>,
    ) -> Self {
        self.endpoints = Some(endpoints);
        self
    }

    /// Substitutes the endpoint-resolution strategy (default:
    /// [`FixedHostResolver`] on the configured host).
    pub fn resolver(
        mut self,
        resolver: Box<dyn EndpointResolver>,
    ) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Assembles the client configuration and constructs the handle.
    ///
    /// # Errors
    /// - [`Error::Config`] when the environment cannot be deserialized
    /// - [`Error::InvalidConfig`] for malformed announced endpoints
    /// - [`Error::Client`] when the connector fails; an unreachable node under
    ///   auto-connect surfaces here as a failed setup
    ///
    /// [`Error::Config`]: crate::Error::Config
    /// [`Error::InvalidConfig`]: crate::Error::InvalidConfig
    /// [`Error::Client`]: crate::Error::Client
    pub async fn build(
        self,
        connector: &dyn Connector,
    ) -> Result<Harness> {
        let settings = match self.settings {
            Some(settings) => settings,
            None => HarnessSettings::from_env()?,
        };

        let resolver = self
            .resolver
            .unwrap_or_else(|| Box::new(FixedHostResolver::new(settings.redis_host.clone())));

        let nodes = match self.endpoints {
            Some(endpoints) => {
                let mut nodes = Vec::with_capacity(endpoints.len());
                for announced in &endpoints {
                    let (host, port) = resolver.resolve(announced)?;
                    nodes.push(NodeDescriptor::new(host, port, settings.redis_db));
                }
                nodes
            }
            None => vec![settings.primary_node()],
        };

        let config = ClientConfig {
            nodes,
            clustering: self.clustering,
            auto_connect: self.auto_connect,
        };
        debug!("Constructing client handle: {:?}", config);

        let client = connector.connect(config).await?;
        Ok(Harness::new(settings, client, self.default_expiration))
    }
}

impl Default for HarnessBuilder {
    fn default() -> Self {
        Self::new()
    }
}
