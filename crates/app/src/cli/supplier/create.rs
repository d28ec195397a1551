use clap::Args;
use malimali_app::{
    suppliers::{SuppliersService, PgSuppliersService, data::NewSupplier, records::SupplierUuid},
    users::records::UserUuid,
};
use uuid::Uuid;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct CreateSupplierArgs {
    /// Owning user UUID
    #[arg(long)]
    user_uuid: Uuid,

    /// Supplier display name
    #[arg(long)]
    name: String,

    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: CreateSupplierArgs) -> Result<(), String> {
    if args.name.trim().is_empty() {
        return Err("name cannot be empty".to_string());
    }

    let service = PgSuppliersService::new(args.database.connect().await?);

    let supplier = service
        .create_supplier(
            UserUuid::from_uuid(args.user_uuid),
            NewSupplier {
                uuid: SupplierUuid::new(),
                name: args.name,
            },
        )
        .await
        .map_err(|error| format!("failed to create supplier: {error}"))?;

    println!("supplier_uuid: {}", supplier.uuid);
    println!("supplier_name: {}", supplier.name);

    Ok(())
}
