use clap::Args;
use malimali_app::{
    suppliers::{SuppliersService, PgSuppliersService},
    users::records::UserUuid,
};
use uuid::Uuid;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ListSuppliersArgs {
    /// Owning user UUID
    #[arg(long)]
    user_uuid: Uuid,

    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: ListSuppliersArgs) -> Result<(), String> {
    let service = PgSuppliersService::new(args.database.connect().await?);

    let suppliers = service
        .list_suppliers(UserUuid::from_uuid(args.user_uuid))
        .await
        .map_err(|error| format!("failed to list suppliers: {error}"))?;

    for supplier in suppliers {
        println!("{}\t{}", supplier.uuid, supplier.name);
    }

    Ok(())
}
