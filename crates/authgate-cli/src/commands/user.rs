//! User lookup commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use authgate_core::error::AppError;
use authgate_database::{UserRepository, UserStore};
use authgate_entity::user::User;

use crate::output::{self, OutputFormat};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Show a user by exact username
    Show {
        /// Username
        username: String,
    },
    /// Count registered users
    Count,
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    id: String,
    username: String,
    email: String,
    name: String,
    profession: String,
    created_at: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.to_string(),
            username: u.username.clone(),
            email: u.email.clone(),
            name: format!("{} {}", u.name, u.surname),
            profession: u.profession.clone(),
            created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute user commands
pub async fn execute(args: &UserArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let pool = super::create_db_pool(&config).await?;
    let user_repo = UserRepository::new(pool.clone());

    match &args.command {
        UserCommand::Show { username } => {
            let user = user_repo
                .find_by_username(username)
                .await?
                .ok_or_else(AppError::user_not_found)?;
            output::print_rows(&[UserRow::from(&user)], format);
        }
        UserCommand::Count => {
            let total = user_repo.count().await?;
            output::print_kv("Users", &total.to_string());
        }
    }

    pool.close().await;
    Ok(())
}
