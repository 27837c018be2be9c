use std::net::SocketAddr;
use std::path::PathBuf;

use crate::errors::{Error, Result};

pub const DATABASE_URL_VAR: &str = "USERS_DATABASE_URL";
pub const DATABASE_AUTH_TOKEN_VAR: &str = "USERS_DATABASE_AUTH_TOKEN";
pub const BIND_ADDR_VAR: &str = "USERS_BIND_ADDR";

const DEFAULT_DATABASE_URL: &str = "users.db";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

const REMOTE_SCHEMES: [&str; 5] = ["libsql://", "http://", "https://", "ws://", "wss://"];

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseConfig {
    Local(PathBuf),
    Remote { url: String, auth_token: String },
}

impl DatabaseConfig {
    // Never includes credentials
    pub fn kind(&self) -> &'static str {
        match self {
            DatabaseConfig::Local(_) => "local",
            DatabaseConfig::Remote { .. } => "remote",
        }
    }

    fn parse(url: String, auth_token: Option<String>) -> Result<Self> {
        if url.trim().is_empty() {
            return Err(Error::Config(format!("{} is empty", DATABASE_URL_VAR)));
        }
        if REMOTE_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
            Ok(DatabaseConfig::Remote {
                url,
                auth_token: auth_token.unwrap_or_default(),
            })
        } else {
            Ok(DatabaseConfig::Local(PathBuf::from(url)))
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr.parse::<SocketAddr>().map_err(|e| {
            Error::Config(format!("{} {:?} is not a socket address: {}", BIND_ADDR_VAR, bind_addr, e))
        })?;

        let url = lookup(DATABASE_URL_VAR).unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let database = DatabaseConfig::parse(url, lookup(DATABASE_AUTH_TOKEN_VAR))?;

        Ok(Config {
            bind_addr,
            database,
        })
    }
}
