use clap::{Args, Parser, Subcommand};
use malimali_app::database;
use sqlx::PgPool;

mod category;
mod supplier;
mod token;
mod user;

#[derive(Debug, Parser)]
#[command(name = "malimali-app", about = "Mali Mali inventory CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    User(user::UserCommand),
    Token(token::TokenCommand),
    Category(category::CategoryCommand),
    Supplier(supplier::SupplierCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::User(command) => user::run(command).await,
            Commands::Token(command) => token::run(command).await,
            Commands::Category(command) => category::run(command).await,
            Commands::Supplier(command) => supplier::run(command).await,
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

impl DatabaseArgs {
    /// Connect and bring the schema up to date.
    pub(crate) async fn connect(&self) -> Result<PgPool, String> {
        let pool = database::connect(&self.database_url, 1)
            .await
            .map_err(|error| format!("failed to connect to database: {error}"))?;

        database::migrate(&pool)
            .await
            .map_err(|error| format!("failed to apply migrations: {error}"))?;

        Ok(pool)
    }
}
