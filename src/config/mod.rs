use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

pub const DEFAULT_PORT: u16 = 8000;
pub const SHARE_DIR_NAME: &str = "lan-offline-share";

/// Application configuration and constants
#[derive(Debug, Clone)]
pub struct Config {
    pub share_dir: Arc<PathBuf>,
    pub port: u16,
    pub host: IpAddr,
    /// Wireless interface to advertise; auto-detected when `None`
    pub interface: Option<String>,
    /// Upload body limit in bytes; unlimited when `None`
    pub max_upload_bytes: Option<usize>,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            share_dir: Arc::new(default_share_dir()),
            port: DEFAULT_PORT,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            interface: None,
            max_upload_bytes: None,
        }
    }

    /// Create configuration with custom values
    pub fn with_custom(
        share_dir: Option<PathBuf>,
        port: Option<u16>,
        host: Option<IpAddr>,
        interface: Option<String>,
        max_upload_bytes: Option<usize>,
    ) -> Self {
        let defaults = Self::new();
        Self {
            share_dir: share_dir.map(Arc::new).unwrap_or(defaults.share_dir),
            port: port.unwrap_or(defaults.port),
            host: host.unwrap_or(defaults.host),
            interface,
            max_upload_bytes,
        }
    }

    /// Get the socket address for binding
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// URL shown to phones on the LAN
    pub fn display_url(&self, ip: Ipv4Addr) -> String {
        format!("http://{}:{}", ip, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn default_share_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(SHARE_DIR_NAME)
}
