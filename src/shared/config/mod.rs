//! Application configuration module
//!
//! Process-wide settings, loaded once at startup and immutable afterwards.
//!
//! Values are layered: built-in defaults, then an optional TOML file
//! (`YOGA_CONFIG`, or `yoga.toml` in the working directory), then
//! environment variables (`SERVER_PORT`, `DATABASE_URL`, `JWT_SECRET`,
//! `JWT_EXPIRATION_MS`, `BCRYPT_COST`).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default port the HTTP server binds to
pub const DEFAULT_PORT: u16 = 8080;

/// Default token lifetime: one day
pub const DEFAULT_JWT_EXPIRATION_MS: u64 = 86_400_000;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server listens on
    pub server_port: u16,
    /// PostgreSQL connection string. `None` selects the in-memory store.
    pub database_url: Option<String>,
    /// HMAC secret used to sign bearer tokens
    pub jwt_secret: String,
    /// Token lifetime in milliseconds
    pub jwt_expiration_ms: u64,
    /// bcrypt work factor for password hashes
    pub bcrypt_cost: u32,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from `.env`, the optional TOML file and the environment
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let mut builder = Self::builder();

        let file = match std::env::var("YOGA_CONFIG") {
            Ok(path) => Some(PathBuf::from(path)),
            Err(_) => Some(PathBuf::from("yoga.toml")).filter(|p| p.exists()),
        };
        if let Some(path) = file {
            tracing::info!("Loading configuration file {}", path.display());
            builder = builder.merge_file(&path)?;
        }

        builder.merge_env(|key| std::env::var(key).ok())?.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::MissingValue("jwt_secret"));
        }
        if self.jwt_expiration_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "jwt_expiration_ms",
                value: "0".to_string(),
            });
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "bcrypt_cost",
                value: self.bcrypt_cost.to_string(),
            });
        }
        if let Some(url) = &self.database_url {
            if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        Ok(())
    }
}

/// Shape of the optional TOML configuration file
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    server_port: Option<u16>,
    database_url: Option<String>,
    jwt_secret: Option<String>,
    jwt_expiration_ms: Option<u64>,
    bcrypt_cost: Option<u32>,
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_port: Option<u16>,
    database_url: Option<String>,
    jwt_secret: Option<String>,
    jwt_expiration_ms: Option<u64>,
    bcrypt_cost: Option<u32>,
}

impl AppConfigBuilder {
    /// Set the server port
    pub fn server_port(mut self, port: u16) -> Self {
        self.server_port = Some(port);
        self
    }

    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the token lifetime in milliseconds
    pub fn jwt_expiration_ms(mut self, ms: u64) -> Self {
        self.jwt_expiration_ms = Some(ms);
        self
    }

    /// Set the bcrypt cost
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Overlay values found in a TOML file
    pub fn merge_file(self, path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::File {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        self.merge_toml(&raw).map_err(|e| match e {
            ConfigError::File { message, .. } => ConfigError::File {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    /// Overlay values from TOML source text
    pub fn merge_toml(mut self, raw: &str) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(raw).map_err(|e| ConfigError::File {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })?;
        self.server_port = file.server_port.or(self.server_port);
        self.database_url = file.database_url.or(self.database_url);
        self.jwt_secret = file.jwt_secret.or(self.jwt_secret);
        self.jwt_expiration_ms = file.jwt_expiration_ms.or(self.jwt_expiration_ms);
        self.bcrypt_cost = file.bcrypt_cost.or(self.bcrypt_cost);
        Ok(self)
    }

    /// Overlay values from environment-style lookups
    ///
    /// `lookup` is `std::env::var` in production; tests pass a closure over a map.
    pub fn merge_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("SERVER_PORT") {
            self.server_port = Some(parse_value("SERVER_PORT", &port)?);
        }
        if let Some(url) = lookup("DATABASE_URL").filter(|u| !u.is_empty()) {
            self.database_url = Some(url);
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            self.jwt_secret = Some(secret);
        }
        if let Some(ms) = lookup("JWT_EXPIRATION_MS") {
            self.jwt_expiration_ms = Some(parse_value("JWT_EXPIRATION_MS", &ms)?);
        }
        if let Some(cost) = lookup("BCRYPT_COST") {
            self.bcrypt_cost = Some(parse_value("BCRYPT_COST", &cost)?);
        }
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            server_port: self.server_port.unwrap_or(DEFAULT_PORT),
            database_url: self.database_url,
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue("jwt_secret"))?,
            jwt_expiration_ms: self.jwt_expiration_ms.unwrap_or(DEFAULT_JWT_EXPIRATION_MS),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST),
        };
        config.validate()?;
        Ok(config)
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("cannot read config file {path}: {message}")]
    File { path: String, message: String },
}
