/// Identifies one store endpoint: address plus the logical database index
/// selected for every connection to it. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDescriptor {
    pub host: String,
    pub port: u16,
    pub db: u32,
}

impl NodeDescriptor {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        db: u32,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            db,
        }
    }
}

/// Everything a connector needs to construct one client handle.
///
/// Built once per test case and consumed by [`Connector::connect`]; never
/// mutated afterwards.
///
/// [`Connector::connect`]: crate::Connector::connect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub nodes: Vec<NodeDescriptor>,
    pub clustering: bool,
    pub auto_connect: bool,
}
