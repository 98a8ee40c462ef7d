//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use itemdash_store::{RedisItemStore, DEFAULT_COLLECTION};

pub mod items;
pub mod serve;

/// itemdash - dashboard items over a document store
#[derive(Parser)]
#[command(name = "itemdash")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub store: StoreArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Document store connection settings.
#[derive(Args, Clone, Debug)]
pub struct StoreArgs {
    /// Redis connection URL
    #[arg(long, global = true, env = "REDIS_URL", default_value = "redis://127.0.0.1:6379")]
    pub redis_url: String,

    /// Collection holding the dashboard items
    #[arg(long, global = true, env = "ITEMDASH_COLLECTION", default_value = DEFAULT_COLLECTION)]
    pub collection: String,
}

impl StoreArgs {
    /// Open the long-lived store connection.
    pub async fn open(&self) -> Result<RedisItemStore> {
        let pool = itemdash_store::init_pool(&self.redis_url)
            .await
            .with_context(|| format!("Failed to connect to document store at {}", self.redis_url))?;
        Ok(RedisItemStore::new(pool, self.collection.clone()))
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server (API and dashboard page)
    Serve(serve::ServeArgs),

    /// Inspect dashboard items
    #[command(subcommand)]
    Items(items::ItemCommands),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args, &self.store).await,
            Commands::Items(cmd) => items::execute(cmd, &self.store).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["itemdash", "serve"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, 3000);
                assert_eq!(args.host, "127.0.0.1");
                assert!(!args.memory);
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_store_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "itemdash",
            "items",
            "list",
            "--redis-url",
            "redis://cache:6380",
            "--collection",
            "staging_items",
        ])
        .unwrap();
        assert_eq!(cli.store.redis_url, "redis://cache:6380");
        assert_eq!(cli.store.collection, "staging_items");
    }
}
