use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

use remark_types::api::DEFAULT_MAX_TEXT_LEN;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got '{value}'")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreKind {
    Sqlite,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub store: StoreKind,
    pub db_path: PathBuf,
    pub max_text_len: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("REMARK_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = lookup("REMARK_PORT").unwrap_or_else(|| "3000".into());
        let port: u16 = port.parse().map_err(|_| ConfigError::Invalid {
            key: "REMARK_PORT",
            expected: "a port number",
            value: port.clone(),
        })?;

        let ip: IpAddr = host.parse().map_err(|_| ConfigError::Invalid {
            key: "REMARK_HOST",
            expected: "an IP address",
            value: host.clone(),
        })?;
        let addr = SocketAddr::new(ip, port);

        let store = match lookup("REMARK_STORE").as_deref().unwrap_or("sqlite") {
            "sqlite" => StoreKind::Sqlite,
            "memory" => StoreKind::Memory,
            other => {
                return Err(ConfigError::Invalid {
                    key: "REMARK_STORE",
                    expected: "'sqlite' or 'memory'",
                    value: other.to_string(),
                });
            }
        };

        let db_path = lookup("REMARK_DB_PATH")
            .unwrap_or_else(|| "remark.db".into())
            .into();

        let max_text_len = match lookup("REMARK_MAX_TEXT_LEN") {
            None => DEFAULT_MAX_TEXT_LEN,
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid {
                    key: "REMARK_MAX_TEXT_LEN",
                    expected: "a positive integer",
                    value: raw,
                })?,
        };

        Ok(Self {
            addr,
            store,
            db_path,
            max_text_len,
        })
    }
}
