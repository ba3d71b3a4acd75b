#[cfg(test)]
use mockall::automock;

use tracing::debug;

use crate::Error;
use crate::Result;

/// Rewrites a `host:port` endpoint announced by the store into the address the
/// harness should actually dial.
///
/// Replicated stores announce replica addresses as seen from inside the
/// cluster; when both nodes sit behind a single reachable host those announced
/// hosts are wrong from the test runner's perspective. The strategy is
/// injected into the harness builder rather than patched into shared process
/// state, so test cases stay independent.
#[cfg_attr(test, automock)]
pub trait EndpointResolver: Send + Sync {
    /// # Errors
    /// Returns [`Error::InvalidConfig`] for endpoints not in `host:port` form.
    fn resolve(
        &self,
        announced: &str,
    ) -> Result<(String, u16)>;
}

/// Default strategy: keep the announced port, substitute the configured host.
pub struct FixedHostResolver {
    host: String,
}

impl FixedHostResolver {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }
}

impl EndpointResolver for FixedHostResolver {
    fn resolve(
        &self,
        announced: &str,
    ) -> Result<(String, u16)> {
        debug!("Returning alternate host for {}", announced);
        let (_, port) = announced.rsplit_once(':').ok_or_else(|| {
            Error::InvalidConfig(format!("endpoint '{announced}' is not in host:port form"))
        })?;
        let port = port.parse::<u16>().map_err(|_| {
            Error::InvalidConfig(format!("endpoint '{announced}' has a non-numeric port"))
        })?;
        Ok((self.host.clone(), port))
    }
}
