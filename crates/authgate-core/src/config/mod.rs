//! Application configuration schemas.
//!
//! Configuration is merged from optional TOML files, `AUTHGATE__`-prefixed
//! environment variables, and the plain deployment variables (`SECRET_KEY`,
//! `DATABASE_URL`, ...). It is loaded once at startup and validated before
//! anything else is constructed.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::{AuthConfig, MAX_ACCESS_TOKEN_TTL_HOURS, SUPPORTED_ALGORITHMS};
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Plain environment variables mapped onto configuration keys.
const PLAIN_ENV_OVERRIDES: &[(&str, &str)] = &[
    ("SECRET_KEY", "auth.jwt_secret"),
    ("ALGORITHM", "auth.jwt_algorithm"),
    ("ACCESS_TOKEN_EXPIRE_HOURS", "auth.access_token_ttl_hours"),
    ("DATABASE_URL", "database.url"),
];

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load and validate configuration for the given environment name.
    ///
    /// Sources, later ones winning: `config/default.toml`, `config/{env}.toml`,
    /// `AUTHGATE__SECTION__KEY` variables, then the plain variables.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let mut builder = config::Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                Environment::with_prefix("AUTHGATE")
                    .separator("__")
                    .try_parsing(true),
            );

        for (var, key) in PLAIN_ENV_OVERRIDES {
            builder = builder.set_override_option(*key, std::env::var(var).ok())?;
        }

        let origins = std::env::var("CORS_ORIGINS").ok().map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect::<Vec<_>>()
        });
        builder = builder.set_override_option("server.cors.allowed_origins", origins)?;

        debug!(env, "Loading configuration");
        Self::from_builder(builder)
    }

    /// Build from an already-assembled source stack and validate.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, AppError> {
        let config: Self = builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the server must not start with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.auth.jwt_secret.trim().is_empty() {
            return Err(AppError::configuration(
                "SECRET_KEY environment variable is not set",
            ));
        }

        if !SUPPORTED_ALGORITHMS.contains(&self.auth.jwt_algorithm.as_str()) {
            return Err(AppError::configuration(format!(
                "Unsupported signing algorithm '{}'. Expected one of: {}",
                self.auth.jwt_algorithm,
                SUPPORTED_ALGORITHMS.join(", ")
            )));
        }

        if self.auth.access_token_ttl_hours == 0 {
            return Err(AppError::configuration(
                "Access token lifetime must be at least one hour",
            ));
        }

        if self.auth.access_token_ttl_hours > MAX_ACCESS_TOKEN_TTL_HOURS {
            return Err(AppError::configuration(format!(
                "Access token lifetime of {} hours exceeds the maximum of {MAX_ACCESS_TOKEN_TTL_HOURS}",
                self.auth.access_token_ttl_hours
            )));
        }

        if self.database.url.trim().is_empty() {
            return Err(AppError::configuration(
                "DATABASE_URL environment variable is not set",
            ));
        }

        Ok(())
    }
}
