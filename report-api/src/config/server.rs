use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    time::Duration,
};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    /// Requests running longer than this are answered with a 408.
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
    /// Largest accepted upload, in bytes.
    pub max_upload_size: usize,
}

impl ServerConfig {
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8787,
            request_timeout: Duration::from_secs(30),
            max_upload_size: 50 * 1024 * 1024,
        }
    }
}

#[cfg(feature = "testing")]
impl crate::tests::TestDefault for ServerConfig {
    fn test_default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            request_timeout: Duration::from_secs(5),
            max_upload_size: 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_timeout_uses_humantime() {
        let config: ServerConfig =
            serde_json::from_str(r#"{"request-timeout": "1m 30s"}"#).unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(90));
        assert_eq!(config.port, 8787);
    }
}
