//! Runtime settings read from the environment (and `.env`, if present).

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Code accepted by `POST /reset` unless `RESET_CODE` overrides it.
pub const DEFAULT_RESET_CODE: &str = "hannwin";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub reset_code: String,
    /// JSON export to load into the store before serving.
    pub import_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            reset_code: DEFAULT_RESET_CODE.to_string(),
            import_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let bind_addr = match lookup("BIND_ADDR") {
            Some(addr) => addr
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr(addr))?,
            None => defaults.bind_addr,
        };

        let reset_code = lookup("RESET_CODE")
            .filter(|code| !code.is_empty())
            .unwrap_or(defaults.reset_code);

        let import_file = lookup("SCHEDULE_IMPORT_FILE")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            reset_code,
            import_file,
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidBindAddr(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidBindAddr(addr) => write!(f, "invalid BIND_ADDR: {addr}"),
        }
    }
}

impl std::error::Error for ConfigError {}
