//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use itemdash_store::{ItemStore, MemoryItemStore};
use itemdash_web::ServerConfig;
use std::path::PathBuf;
use std::sync::Arc;

use super::StoreArgs;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Base URL the dashboard page fetches the API from (defaults to this server)
    #[arg(long, env = "ITEMDASH_API_BASE")]
    pub api_base: Option<String>,

    /// Keep items in process memory instead of Redis
    #[arg(long)]
    pub memory: bool,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file used with --log
    #[arg(long, default_value = "itemdash.log")]
    pub log_file: PathBuf,
}

pub async fn execute(args: ServeArgs, store_args: &StoreArgs) -> Result<()> {
    let store: Arc<dyn ItemStore> = if args.memory {
        tracing::warn!("Using in-memory store; items are lost on exit");
        Arc::new(MemoryItemStore::new())
    } else {
        Arc::new(store_args.open().await?)
    };

    let config = ServerConfig {
        host: args.host,
        port: args.port,
        api_base: args.api_base,
    };

    println!();
    println!("  {} {}", "itemdash".cyan().bold(), "Web Server".bold());
    println!();
    println!(
        "  {}  http://{}/dashboard",
        "Dashboard".green(),
        config.bind_addr()
    );
    println!(
        "  {}        http://{}/api/dashboard",
        "API".green(),
        config.bind_addr()
    );
    if args.memory {
        println!("  {}      {}", "Store".green(), "in-memory".yellow());
    } else {
        println!(
            "  {}      {} ({})",
            "Store".green(),
            store_args.redis_url,
            store_args.collection
        );
    }
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    itemdash_web::run_server(store, config).await?;

    Ok(())
}
