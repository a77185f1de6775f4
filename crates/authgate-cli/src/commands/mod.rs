//! CLI command definitions and dispatch.

pub mod blacklist;
pub mod config;
pub mod migrate;
pub mod user;

use clap::{Parser, Subcommand};
use sqlx::PgPool;

use authgate_core::config::AppConfig;
use authgate_core::error::AppError;
use authgate_database::DatabasePool;

use crate::output::OutputFormat;

/// AuthGate administration tool
#[derive(Debug, Parser)]
#[command(name = "authgate", version, about, long_about = None)]
pub struct Cli {
    /// Environment name; selects `config/{env}.toml`
    #[arg(short, long, env = "AUTHGATE_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Configuration inspection
    Config(config::ConfigArgs),
    /// Revoked token maintenance
    Blacklist(blacklist::BlacklistArgs),
    /// User lookup
    User(user::UserArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &self.env).await,
            Commands::Config(args) => config::execute(args, &self.env, self.format).await,
            Commands::Blacklist(args) => blacklist::execute(args, &self.env, self.format).await,
            Commands::User(args) => user::execute(args, &self.env, self.format).await,
        }
    }
}

/// Helper: load and validate configuration
pub fn load_config(env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(env)
}

/// Helper: create database pool from config
pub async fn create_db_pool(config: &AppConfig) -> Result<PgPool, AppError> {
    let pool = DatabasePool::connect(&config.database).await?;
    Ok(pool.into_pool())
}
