//! Process-environment configuration.
//!
//! There is no config file; host, port, front-end directory, and upstream
//! base URLs all come from environment variables with working defaults.

use std::env;
use std::path::PathBuf;

use crate::error::{CricketError, Result};
use crate::statsguru::http::{SEARCH_BASE_URL, STATS_BASE_URL};
use crate::{
    FRONTEND_DIR_ENV_VAR, HOST_ENV_VAR, PORT_ENV_VAR, SEARCH_URL_ENV_VAR, STATS_URL_ENV_VAR,
};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_FRONTEND_DIR: &str = "frontend";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub frontend_dir: PathBuf,
    pub stats_base_url: String,
    pub search_base_url: String,
}

impl Config {
    /// Read configuration from the environment, applying defaults for
    /// anything unset. Only a malformed port is an error.
    pub fn from_env() -> Result<Self> {
        let host = env::var(HOST_ENV_VAR).unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var(PORT_ENV_VAR) {
            Ok(raw) => raw.parse::<u16>().map_err(|e| CricketError::Config {
                env_var: PORT_ENV_VAR.to_string(),
                message: e.to_string(),
            })?,
            Err(_) => DEFAULT_PORT,
        };
        let frontend_dir = env::var(FRONTEND_DIR_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_FRONTEND_DIR));
        let stats_base_url =
            env::var(STATS_URL_ENV_VAR).unwrap_or_else(|_| STATS_BASE_URL.to_string());
        let search_base_url =
            env::var(SEARCH_URL_ENV_VAR).unwrap_or_else(|_| SEARCH_BASE_URL.to_string());

        Ok(Self {
            host,
            port,
            frontend_dir,
            stats_base_url,
            search_base_url,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
