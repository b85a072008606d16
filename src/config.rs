//! Runtime configuration for the server.

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

/// The default port the companion client expects the backend on.
pub const DEFAULT_PORT: u16 = 8000;

/// The default file name of the SQLite store for development runs.
pub const DEFAULT_DB_PATH: &str = "vault.db";

/// Settings resolved once at process start.
///
/// The launcher decides where the store lives (e.g. a per-user documents
/// folder for packaged builds) and passes it in explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// File path to the SQLite database.
    pub db_path: PathBuf,
    /// The address to listen on.
    pub host: IpAddr,
    /// The port to listen on.
    pub port: u16,
}

impl Config {
    /// The socket address the server should bind to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
        }
    }
}
