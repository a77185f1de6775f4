//! Configuration inspection commands.

use clap::{Args, Subcommand};

use authgate_core::error::AppError;
use authgate_database::connection::mask_password;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration (secret omitted)
    Show,
    /// Load and validate the configuration
    Validate,
}

/// Execute config commands
pub async fn execute(args: &ConfigArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let mut config = super::load_config(env)?;
            config.database.url = mask_password(&config.database.url);
            match format {
                OutputFormat::Json => output::print_json(&config),
                OutputFormat::Table => {
                    output::print_kv("Server", &format!("{}:{}", config.server.host, config.server.port));
                    output::print_kv("CORS origins", &config.server.cors.allowed_origins.join(", "));
                    output::print_kv("Database", &config.database.url);
                    output::print_kv("Algorithm", &config.auth.jwt_algorithm);
                    output::print_kv(
                        "Token TTL (hours)",
                        &config.auth.access_token_ttl_hours.to_string(),
                    );
                    output::print_kv(
                        "Blacklist sweep (s)",
                        &config.auth.blacklist_sweep_interval_seconds.to_string(),
                    );
                    output::print_kv("Log level", &config.logging.level);
                }
            }
        }
        ConfigCommand::Validate => {
            // Reported once, by main.
            let config = super::load_config(env).map_err(|e| invalid_config(env, e))?;
            output::print_success(&format!("Configuration for '{env}' is valid"));
            output::print_kv("Server", &format!("{}:{}", config.server.host, config.server.port));
            output::print_kv("Database", &mask_password(&config.database.url));
        }
    }

    Ok(())
}

fn invalid_config(env: &str, err: AppError) -> AppError {
    let message = format!("Configuration for '{env}' is invalid: {}", err.message);
    AppError::with_source(err.kind, message, err)
}
