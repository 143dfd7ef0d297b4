//! Dashboard server configuration.

/// Default listen address.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8050;

/// Browser tab title.
pub const DEFAULT_TITLE: &str = "Automobile Statistics Dashboard";

/// Configuration for the dashboard server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Address to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Page title
    pub title: String,
}

impl DashboardConfig {
    /// Default configuration on a different port.
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Self::default()
        }
    }

    /// `host:port` string for logs.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}
