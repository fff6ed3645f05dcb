use std::env;

use anyhow::Context;

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    pub const DEFAULT_IP: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 8080;

    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: 8080)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_values(env::var("SERVICE_IP").ok(), env::var("SERVICE_PORT").ok())
    }

    fn from_values(ip: Option<String>, port: Option<String>) -> anyhow::Result<Self> {
        let ip = ip.unwrap_or_else(|| Self::DEFAULT_IP.to_string());
        let port = match port {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("SERVICE_PORT is not a valid port: {raw}"))?,
            None => Self::DEFAULT_PORT,
        };

        Ok(Self { ip, port })
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
