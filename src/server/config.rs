//! Environment-based server configuration.

use std::{net::SocketAddr, path::PathBuf};

use crate::server::error::config::ConfigError;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_PHOTO_STORAGE_DIR: &str = "./media";
const DEFAULT_PHOTO_PUBLIC_URL: &str = "/media";

/// Where uploaded draft photos are kept.
#[derive(Clone, Debug, PartialEq)]
pub enum PhotoStorageBackend {
    /// Objects written beneath a directory and served from `/media`
    Filesystem(PathBuf),
    /// Objects held in process memory, lost on restart
    Memory,
}

pub struct Config {
    pub database_url: String,
    /// HS256 secret shared with the auth provider that issues bearer tokens
    pub auth_jwt_secret: String,
    pub photo_storage: PhotoStorageBackend,
    /// Base URL prepended to storage keys when building photo view URLs
    pub photo_public_url: String,
    pub bind_address: SocketAddr,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` or `AUTH_JWT_SECRET` is unset
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable is set but cannot be used
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = required("DATABASE_URL")?;
        let auth_jwt_secret = required("AUTH_JWT_SECRET")?;
        if auth_jwt_secret.len() < 32 {
            return Err(ConfigError::InvalidEnvValue {
                var: "AUTH_JWT_SECRET".to_string(),
                reason: "secret must be at least 32 bytes".to_string(),
            });
        }

        let photo_storage = match optional("PHOTO_STORAGE_BACKEND").as_deref() {
            None | Some("filesystem") => PhotoStorageBackend::Filesystem(PathBuf::from(
                optional("PHOTO_STORAGE_DIR")
                    .unwrap_or_else(|| DEFAULT_PHOTO_STORAGE_DIR.to_string()),
            )),
            Some("memory") => PhotoStorageBackend::Memory,
            Some(other) => {
                return Err(ConfigError::InvalidEnvValue {
                    var: "PHOTO_STORAGE_BACKEND".to_string(),
                    reason: format!("expected \"filesystem\" or \"memory\", got {:?}", other),
                })
            }
        };

        let photo_public_url = optional("PHOTO_PUBLIC_URL")
            .unwrap_or_else(|| DEFAULT_PHOTO_PUBLIC_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let bind_address = optional("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address =
            bind_address
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "BIND_ADDRESS".to_string(),
                    reason: e.to_string(),
                })?;

        Ok(Self {
            database_url,
            auth_jwt_secret,
            photo_storage,
            photo_public_url,
            bind_address,
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    optional(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|value| !value.is_empty())
}
