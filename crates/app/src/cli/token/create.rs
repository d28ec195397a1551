use clap::Args;
use malimali_app::{auth::PgAuthService, users::records::UserUuid};
use uuid::Uuid;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct CreateTokenArgs {
    /// User UUID that should own the token
    #[arg(long)]
    user_uuid: Uuid,

    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: CreateTokenArgs) -> Result<(), String> {
    let service = PgAuthService::new(args.database.connect().await?);

    let issued = service
        .issue_api_token(UserUuid::from_uuid(args.user_uuid))
        .await
        .map_err(|error| format!("failed to create token: {error}"))?;

    println!("token_uuid: {}", issued.record.uuid);
    println!("user_uuid: {}", issued.record.user);
    println!("token_created_at: {}", issued.record.created_at);
    println!("api_token: {}", issued.token.as_str());
    println!("store this token now; it is only shown once");

    Ok(())
}
