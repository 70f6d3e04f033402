//! Runtime configuration, read from environment variables at startup.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_DATABASE_URL: &str = "sqlite:people.db";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_STATIC_DIR: &str = "static";

/// The configuration parameters for the server.
///
/// Every value has a default so the server starts with no environment set.
/// Log filtering is configured separately through `RUST_LOG`.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// SQLite connection string (`DATABASE_URL`)
    pub database_url: String,
    /// Address the HTTP listener binds to (`BIND_ADDR`)
    pub bind_addr: SocketAddr,
    /// Directory served under `/static` (`STATIC_DIR`)
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .with_context(|| format!("Invalid BIND_ADDR: {}", bind_addr))?;

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        Ok(Self {
            database_url,
            bind_addr,
            static_dir,
        })
    }
}
