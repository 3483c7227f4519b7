use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory backing the key-value store.
    pub data_dir: PathBuf,
    pub host: IpAddr,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
        }
    }
}

impl Config {
    /// Reads `APP_DATA_PATH`, `HOST` and `PORT`, keeping defaults for unset
    /// or unparsable values.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("APP_DATA_PATH").filter(|path| !path.trim().is_empty()) {
            config.data_dir = PathBuf::from(path);
        }
        if let Some(host) = lookup("HOST") {
            match host.parse() {
                Ok(host) => config.host = host,
                Err(_) => warn!(%host, "ignoring invalid HOST"),
            }
        }
        if let Some(port) = lookup("PORT") {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(_) => warn!(%port, "ignoring invalid PORT"),
            }
        }

        config
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
