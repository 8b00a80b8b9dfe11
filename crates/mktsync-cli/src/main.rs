mod report;
mod run;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "mktsync")]
#[command(about = "Synchronize supplier stock and prices with marketplace campaigns")]
struct Cli {
    /// Inventory snapshot (JSON). Overrides `MKTSYNC_INVENTORY_PATH`.
    #[arg(long, global = true)]
    inventory: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Push stock levels and prices.
    Sync(SyncArgs),
    /// Push stock levels only.
    Stocks(SyncArgs),
    /// Push prices only.
    Prices(SyncArgs),
    /// Count the offers each campaign currently lists.
    Offers {
        /// Only this campaign (by name).
        #[arg(long)]
        campaign: Option<String>,
    },
}

#[derive(Debug, Args)]
struct SyncArgs {
    /// Only this campaign (by name).
    #[arg(long)]
    campaign: Option<String>,

    /// Reconcile and report without writing to the marketplace.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = mktsync_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let inventory_path = cli
        .inventory
        .unwrap_or_else(|| config.inventory_path.clone());

    match cli.command {
        Commands::Sync(args) => {
            run::run_sync(&config, &inventory_path, run::Steps::Both, &args).await
        }
        Commands::Stocks(args) => {
            run::run_sync(&config, &inventory_path, run::Steps::Stocks, &args).await
        }
        Commands::Prices(args) => {
            run::run_sync(&config, &inventory_path, run::Steps::Prices, &args).await
        }
        Commands::Offers { campaign } => run::run_offers(&config, campaign.as_deref()).await,
    }
}
