//! Revoked token maintenance commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use authgate_auth::RevocationList;
use authgate_core::error::AppError;
use authgate_database::BlacklistRepository;

use crate::output::{self, OutputFormat};

/// Arguments for blacklist commands
#[derive(Debug, Args)]
pub struct BlacklistArgs {
    #[command(subcommand)]
    pub command: BlacklistCommand,
}

/// Blacklist subcommands
#[derive(Debug, Subcommand)]
pub enum BlacklistCommand {
    /// Delete every entry whose token has already expired
    Purge,
    /// Show how many entries are stored
    Count,
}

#[derive(Debug, Serialize, Tabled)]
struct CountRow {
    entries: u64,
}

/// Execute blacklist commands
pub async fn execute(
    args: &BlacklistArgs,
    env: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let pool = super::create_db_pool(&config).await?;
    let list = RevocationList::new(Arc::new(BlacklistRepository::new(pool.clone())));

    match &args.command {
        BlacklistCommand::Purge => {
            let purged = list.purge_expired().await?;
            output::print_success(&format!("Purged {purged} expired blacklist entries"));
        }
        BlacklistCommand::Count => {
            let entries = list.len().await?;
            output::print_rows(&[CountRow { entries }], format);
        }
    }

    pool.close().await;
    Ok(())
}
