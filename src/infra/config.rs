// ============================================================
// Layer 6 — Server Configuration
// ============================================================
// Settings for `newscheck serve`. Values come from CLI flags,
// falling back to NEWSCHECK_* environment variables (a .env
// file in the working directory is loaded at startup), then
// to the defaults below.
//
//   NEWSCHECK_HOST           127.0.0.1
//   NEWSCHECK_PORT           4000
//   NEWSCHECK_MODEL_DIR      model
//   NEWSCHECK_SUMMARY_ORDER  score

use std::net::SocketAddr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::article::SentenceOrder;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host:          String,
    pub port:          u16,
    pub model_dir:     String,
    pub summary_order: SentenceOrder,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host:          "127.0.0.1".to_string(),
            port:          4000,
            model_dir:     "model".to_string(),
            summary_order: SentenceOrder::Score,
        }
    }
}

impl ServerConfig {
    /// Socket address the HTTP listener binds to.
    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address '{}:{}'", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_addr() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.addr().unwrap().to_string(), "127.0.0.1:4000");
    }

    #[test]
    fn test_invalid_host_is_an_error() {
        let cfg = ServerConfig { host: "not a host".into(), ..ServerConfig::default() };
        assert!(cfg.addr().is_err());
    }
}
