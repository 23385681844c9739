use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::PathBuf;

use crate::catalog::FetchStrategy;

pub const DATABASE_FILE: &str = "weapons.db";
pub const DEFAULT_BIND: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 5000));

/// Runtime settings for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub database: PathBuf,
    /// Root holding `images/<category>/` folders
    pub static_root: PathBuf,
    pub fetch_strategy: FetchStrategy,
    pub log_json: bool,
}

impl ServerConfig {
    /// Defaults for everything but the two paths
    pub fn new(database: PathBuf, static_root: PathBuf) -> Self {
        Self {
            bind: DEFAULT_BIND,
            database,
            static_root,
            fetch_strategy: FetchStrategy::default(),
            log_json: false,
        }
    }
}

/// Default database location in the platform data directory
pub fn default_database_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("", "", "frontier-armory")
        .context("Could not determine data directory")?;
    Ok(proj_dirs.data_dir().join(DATABASE_FILE))
}

/// Use the given path, or fall back to the platform default
pub fn resolve_database_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => Ok(path),
        None => default_database_path(),
    }
}
