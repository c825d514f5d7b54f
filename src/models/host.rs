use serde::{Deserialize, Serialize};

/// Which Kodi library the host serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HostMedia {
    #[default]
    Video,
    Audio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HostStatus {
    /// Discovered on the network but never configured
    #[default]
    New,
    Configured,
    Selected,
}

/// A Kodi host the app can connect to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostItem {
    pub name: String,
    pub ip: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_tcp_port")]
    pub tcp_port: u16,
    #[serde(default)]
    pub media: HostMedia,
    #[serde(default)]
    pub status: HostStatus,
}

impl HostItem {
    pub fn new(name: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ip: ip.into(),
            port: default_port(),
            tcp_port: default_tcp_port(),
            media: HostMedia::default(),
            status: HostStatus::default(),
        }
    }

    /// HTTP endpoint of the JSON-RPC interface
    pub fn http_url(&self) -> String {
        format!("http://{}:{}/jsonrpc", self.ip, self.port)
    }

    /// Check if this host lives on the local network
    pub fn is_local_network(&self) -> bool {
        self.ip.starts_with("192.168.")
            || self.ip.starts_with("10.")
            || self.ip.starts_with("172.")
            || self.ip == "localhost"
            || self.ip == "127.0.0.1"
    }
}

fn default_port() -> u16 {
    8080
}

fn default_tcp_port() -> u16 {
    9090
}
