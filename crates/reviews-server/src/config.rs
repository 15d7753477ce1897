use std::net::IpAddr;

use thiserror::Error;
use tracing::info;

pub const DATABASE_URL_VAR: &str = "REVIEWS_DATABASE_URL";
pub const AUTH_TOKEN_VAR: &str = "REVIEWS_AUTH_TOKEN";
const HOST_VAR: &str = "REVIEWS_HOST";
const PORT_VAR: &str = "REVIEWS_PORT";

const DEFAULT_HOST: IpAddr = IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Path, `file:` URI or `:memory:`.
    pub database_url: String,
    /// Access credential, checked on the admin routes.
    pub auth_token: String,
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let database_url = required(DATABASE_URL_VAR)?;
        let auth_token = required(AUTH_TOKEN_VAR)?;

        let host = match lookup(HOST_VAR) {
            Some(raw) => raw.trim().parse::<IpAddr>().map_err(|e| ConfigError::Invalid {
                var: HOST_VAR,
                reason: format!("{e} (expected an IP address such as 127.0.0.1 or ::1)"),
            })?,
            None => DEFAULT_HOST,
        };
        let port = match lookup(PORT_VAR) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                ConfigError::Invalid {
                    var: PORT_VAR,
                    reason: e.to_string(),
                }
            })?,
            None => {
                info!("{PORT_VAR} not set, using default: {DEFAULT_PORT}");
                DEFAULT_PORT
            }
        };

        Ok(Self {
            database_url,
            auth_token,
            host,
            port,
        })
    }
}

/// Load from the environment or terminate the process with a loud error.
pub fn load_or_exit() -> Config {
    match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("FATAL: {e}.");
            eprintln!("       {DATABASE_URL_VAR} and {AUTH_TOKEN_VAR} are required.");
            eprintln!("       Set them in your environment or .env file and restart.");
            std::process::exit(1);
        }
    }
}
