use offdict_config::lookup::LookupConfig;

/// Statically configured lookup server endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTarget {
    pub host: String,
    pub port: u16,
}

impl LookupTarget {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl From<&LookupConfig> for LookupTarget {
    fn from(config: &LookupConfig) -> Self {
        Self::new(config.host.clone(), config.port)
    }
}

/// One lookup; built right before it is sent and dropped afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub query: String,
    pub target_host: String,
    pub target_port: u16,
}

impl LookupRequest {
    pub fn new(query: impl Into<String>, target: &LookupTarget) -> Self {
        Self {
            query: query.into(),
            target_host: target.host.clone(),
            target_port: target.port,
        }
    }

    /// `http://{host}:{port}/set/{query}` with the query percent-encoded as one path segment
    pub fn url(&self) -> String {
        format!(
            "http://{}:{}/set/{}",
            self.target_host,
            self.target_port,
            urlencoding::encode(&self.query)
        )
    }
}
