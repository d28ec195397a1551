use clap::Args;
use malimali_app::{
    categories::{CategoriesService, PgCategoriesService, data::NewCategory, records::CategoryUuid},
    users::records::UserUuid,
};
use uuid::Uuid;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct CreateCategoryArgs {
    /// Owning user UUID
    #[arg(long)]
    user_uuid: Uuid,

    /// Category display name
    #[arg(long)]
    name: String,

    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: CreateCategoryArgs) -> Result<(), String> {
    if args.name.trim().is_empty() {
        return Err("name cannot be empty".to_string());
    }

    let service = PgCategoriesService::new(args.database.connect().await?);

    let category = service
        .create_category(
            UserUuid::from_uuid(args.user_uuid),
            NewCategory {
                uuid: CategoryUuid::new(),
                name: args.name,
            },
        )
        .await
        .map_err(|error| format!("failed to create category: {error}"))?;

    println!("category_uuid: {}", category.uuid);
    println!("category_name: {}", category.name);

    Ok(())
}
