use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,

    /// Insert two sample members with one order each when the database is empty.
    pub seed_sample_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bind_addr = env_or("BIND_ADDR", DEFAULT_BIND_ADDR);
        let seed_sample_data = env_or("SEED_SAMPLE_DATA", "false");

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: bind_addr
                .parse()
                .map_err(|e: std::net::AddrParseError| ConfigError::InvalidEnvVar {
                    name: "BIND_ADDR".to_string(),
                    value: bind_addr.clone(),
                    reason: e.to_string(),
                })?,
            seed_sample_data: parse_flag("SEED_SAMPLE_DATA", &seed_sample_data)?,
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_flag(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}
