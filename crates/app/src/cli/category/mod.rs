use clap::{Args, Subcommand};

mod create;
mod list;

#[derive(Debug, Args)]
pub(crate) struct CategoryCommand {
    #[command(subcommand)]
    command: CategorySubcommand,
}

#[derive(Debug, Subcommand)]
enum CategorySubcommand {
    Create(create::CreateCategoryArgs),
    List(list::ListCategoriesArgs),
}

pub(crate) async fn run(command: CategoryCommand) -> Result<(), String> {
    match command.command {
        CategorySubcommand::Create(args) => create::run(args).await,
        CategorySubcommand::List(args) => list::run(args).await,
    }
}
