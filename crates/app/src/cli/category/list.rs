use clap::Args;
use malimali_app::{
    categories::{CategoriesService, PgCategoriesService},
    users::records::UserUuid,
};
use uuid::Uuid;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ListCategoriesArgs {
    /// Owning user UUID
    #[arg(long)]
    user_uuid: Uuid,

    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: ListCategoriesArgs) -> Result<(), String> {
    let service = PgCategoriesService::new(args.database.connect().await?);

    let categories = service
        .list_categories(UserUuid::from_uuid(args.user_uuid))
        .await
        .map_err(|error| format!("failed to list categories: {error}"))?;

    for category in categories {
        println!("{}\t{}", category.uuid, category.name);
    }

    Ok(())
}
