use clap::{Args, Subcommand};

mod create;
mod list;

#[derive(Debug, Args)]
pub(crate) struct SupplierCommand {
    #[command(subcommand)]
    command: SupplierSubcommand,
}

#[derive(Debug, Subcommand)]
enum SupplierSubcommand {
    Create(create::CreateSupplierArgs),
    List(list::ListSuppliersArgs),
}

pub(crate) async fn run(command: SupplierCommand) -> Result<(), String> {
    match command.command {
        SupplierSubcommand::Create(args) => create::run(args).await,
        SupplierSubcommand::List(args) => list::run(args).await,
    }
}
