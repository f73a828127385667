use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Server configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Root directory for uploaded assets, also served under `/uploads`.
    pub uploads_root: PathBuf,
    /// Allowed CORS origin (with credentials). `None` disables CORS
    /// restrictions entirely (useful for same-origin deployments).
    pub cors_origin: Option<String>,
    /// Session cookie name.
    pub cookie_name: String,
    /// Absolute session lifetime, measured from creation. Not sliding.
    pub session_ttl: Duration,
    /// Maximum accepted request body, which bounds uploads.
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:4000".parse().expect("valid literal addr"),
            uploads_root: PathBuf::from("uploads"),
            cors_origin: None,
            cookie_name: "bookstand.sid".to_string(),
            session_ttl: Duration::from_secs(60 * 60 * 24),
            max_body_bytes: 10 * 1024 * 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.bind_addr, "127.0.0.1:4000".parse::<SocketAddr>().unwrap());
        assert_eq!(c.cookie_name, "bookstand.sid");
        assert_eq!(c.session_ttl, Duration::from_secs(86_400));
        assert_eq!(c.max_body_bytes, 10 * 1024 * 1024);
        assert!(c.cors_origin.is_none());
    }
}
