//! Process configuration read from `KUBE_GATEWAY_*` environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Skip kubeconfig lookup and use the pod's service account.
    pub in_cluster: bool,
    /// When set, logs are also written to daily files here.
    pub log_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("KUBE_GATEWAY_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("KUBE_GATEWAY_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("invalid KUBE_GATEWAY_PORT '{raw}'"))?,
            None => DEFAULT_PORT,
        };

        let in_cluster = match lookup("KUBE_GATEWAY_IN_CLUSTER") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| anyhow!("invalid KUBE_GATEWAY_IN_CLUSTER '{raw}'"))?,
            None => false,
        };

        let log_dir = lookup("KUBE_GATEWAY_LOG_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            in_cluster,
            log_dir,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let cfg = config(&[]).unwrap();

        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8000);
        assert!(!cfg.in_cluster);
        assert!(cfg.log_dir.is_none());
        assert_eq!(cfg.bind_addr().unwrap().to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn overrides() {
        let cfg = config(&[
            ("KUBE_GATEWAY_HOST", "127.0.0.1"),
            ("KUBE_GATEWAY_PORT", "9090"),
            ("KUBE_GATEWAY_IN_CLUSTER", "TRUE"),
            ("KUBE_GATEWAY_LOG_DIR", "/var/log/kube-gateway"),
        ])
        .unwrap();

        assert_eq!(cfg.bind_addr().unwrap().to_string(), "127.0.0.1:9090");
        assert!(cfg.in_cluster);
        assert_eq!(cfg.log_dir, Some(PathBuf::from("/var/log/kube-gateway")));
    }

    #[test]
    fn blank_log_dir_is_ignored() {
        let cfg = config(&[("KUBE_GATEWAY_LOG_DIR", "  ")]).unwrap();
        assert!(cfg.log_dir.is_none());
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(config(&[("KUBE_GATEWAY_PORT", "eighty")]).is_err());
        assert!(config(&[("KUBE_GATEWAY_PORT", "70000")]).is_err());
        assert!(config(&[("KUBE_GATEWAY_IN_CLUSTER", "maybe")]).is_err());
    }

    #[test]
    fn unparseable_host_fails_at_bind() {
        let cfg = config(&[("KUBE_GATEWAY_HOST", "not a host")]).unwrap();
        assert!(cfg.bind_addr().is_err());
    }
}
