use std::env;
use std::net::SocketAddr;

use anyhow::Context;

const DEFAULT_DATABASE_URL: &str = "database.db";
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";

/// Deployment settings read from the process environment (and `.env`).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_address: SocketAddr,
    pub frontend_url: Option<String>, // cors origin, any origin when unset
    pub sentry_dsn: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = non_empty("DATABASE_URL")
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let bind_address = non_empty("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address
            .parse()
            .with_context(|| format!("BIND_ADDRESS is not a socket address: {}", bind_address))?;

        Ok(Self {
            database_url,
            bind_address,
            frontend_url: non_empty("FRONTEND_URL"),
            sentry_dsn: non_empty("SENTRY_DSN"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<ServerConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn falls_back_to_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database_url, "database.db");
        assert_eq!(config.bind_address, "127.0.0.1:3000".parse().unwrap());
        assert!(config.frontend_url.is_none());
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config_from(&[("FRONTEND_URL", "  "), ("DATABASE_URL", "")]).unwrap();
        assert!(config.frontend_url.is_none());
        assert_eq!(config.database_url, "database.db");
    }

    #[test]
    fn rejects_malformed_bind_address() {
        assert!(config_from(&[("BIND_ADDRESS", "localhost")]).is_err());
    }
}
