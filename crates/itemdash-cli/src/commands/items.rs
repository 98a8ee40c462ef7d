//! Dashboard item commands.

use anyhow::Result;
use clap::Subcommand;

use super::StoreArgs;
use crate::output;

#[derive(Subcommand)]
pub enum ItemCommands {
    /// List items, newest first
    List,
}

pub async fn execute(cmd: ItemCommands, store_args: &StoreArgs) -> Result<()> {
    let store = store_args.open().await?;

    match cmd {
        ItemCommands::List => {
            let items = itemdash_core::item::list_items(&store).await?;
            output::print_items_table(&items);
        }
    }

    Ok(())
}
