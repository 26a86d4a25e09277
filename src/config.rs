//! Process configuration loaded from environment variables

use std::path::PathBuf;

use crate::error::{Error, Result};

const DEFAULT_TOKEN_URL: &str =
    "https://services.sentinel-hub.com/auth/realms/main/protocol/openid-connect/token";
const DEFAULT_PROCESS_URL: &str = "https://services.sentinel-hub.com/api/v1/process";

/// Provider credentials, both required at startup
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Provider endpoint URLs, overridable for integration setups
#[derive(Debug, Clone)]
pub struct ProviderEndpoints {
    pub token_url: String,
    pub process_url: String,
}

impl Default for ProviderEndpoints {
    fn default() -> Self {
        Self {
            token_url: DEFAULT_TOKEN_URL.to_string(),
            process_url: DEFAULT_PROCESS_URL.to_string(),
        }
    }
}

/// Service configuration loaded once at startup and injected into the
/// request handler state.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub endpoints: ProviderEndpoints,
    /// Directory rendered artifacts are written to
    pub output_dir: PathBuf,
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Env Var            | Default                      |
    /// |--------------------|------------------------------|
    /// | `SH_CLIENT_ID`     | required                     |
    /// | `SH_CLIENT_SECRET` | required                     |
    /// | `SH_TOKEN_URL`     | Sentinel Hub token endpoint  |
    /// | `SH_PROCESS_URL`   | Sentinel Hub process endpoint|
    /// | `OUTPUT_DIR`       | `land_images`                |
    /// | `HOST`             | `0.0.0.0`                    |
    /// | `PORT`             | `3000`                       |
    ///
    /// Fails if either credential is missing; the service refuses to
    /// start without them.
    pub fn from_env() -> Result<Self> {
        let client_id = required_var("SH_CLIENT_ID")?;
        let client_secret = required_var("SH_CLIENT_SECRET")?;

        let endpoints = ProviderEndpoints {
            token_url: std::env::var("SH_TOKEN_URL")
                .unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string()),
            process_url: std::env::var("SH_PROCESS_URL")
                .unwrap_or_else(|_| DEFAULT_PROCESS_URL.to_string()),
        };

        let output_dir =
            PathBuf::from(std::env::var("OUTPUT_DIR").unwrap_or_else(|_| "land_images".into()));

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .map_err(|_| Error::Config("PORT must be a valid u16".to_string()))?;

        Ok(Self {
            credentials: Credentials {
                client_id,
                client_secret,
            },
            endpoints,
            output_dir,
            host,
            port,
        })
    }
}

fn required_var(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::Config(format!("{} is not set", name))),
    }
}
