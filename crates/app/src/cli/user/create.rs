use clap::Args;
use malimali_app::users::{PgUsersService, UsersService, data::NewUser, records::UserUuid};
use uuid::Uuid;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct CreateUserArgs {
    /// User display name
    #[arg(long)]
    name: String,

    /// Optional user UUID; generated when omitted
    #[arg(long)]
    user_uuid: Option<Uuid>,

    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: CreateUserArgs) -> Result<(), String> {
    if args.name.trim().is_empty() {
        return Err("name cannot be empty".to_string());
    }

    let service = PgUsersService::new(args.database.connect().await?);

    let user = service
        .create_user(NewUser {
            uuid: args.user_uuid.map_or_else(UserUuid::new, UserUuid::from_uuid),
            name: args.name,
        })
        .await
        .map_err(|error| format!("failed to create user: {error}"))?;

    println!("user_uuid: {}", user.uuid);
    println!("user_name: {}", user.name);

    Ok(())
}
