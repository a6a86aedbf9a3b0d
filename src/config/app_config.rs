//! Window and server configuration

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Title shown on the main window
pub const WINDOW_TITLE: &str = "Homo";

/// Settings for the embedded window, fixed for the window's lifetime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Inner width in logical pixels
    pub width: f64,
    /// Inner height in logical pixels
    pub height: f64,
    /// Window title
    pub title: String,
    /// Page loaded into the webview
    pub url: String,
    /// Enables devtools in the webview
    pub debug: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 600.0,
            title: WINDOW_TITLE.to_string(),
            url: "about:blank".to_string(),
            debug: false,
        }
    }
}

impl WindowConfig {
    /// Default window pointed at `url`
    pub fn for_url(url: impl Into<String>, debug: bool) -> Self {
        Self {
            url: url.into(),
            debug,
            ..Self::default()
        }
    }
}

/// Asset server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listening address, always loopback
    pub bind_address: IpAddr,
    /// Listening port, 0 lets the OS pick
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}
