//! inventory-pricing - Home-inventory price estimation CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use inventory_pricing::commands::{EstimateCommand, SearchCommand};
use inventory_pricing::config::{Config, OutputFormat};
use inventory_pricing::query::{build_query, ItemDescriptor};
use inventory_pricing::translate::translate;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "inventory-pricing",
    version,
    about = "Estimate market and replacement values of home-inventory items",
    long_about = "Translates French item descriptions into English shopping queries and estimates \
                  CAD market and replacement values from live shopping listings."
)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, global = true, env = "PRICING_PROXY")]
    proxy: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct ItemArgs {
    /// Item name (French or English)
    name: String,

    /// Brand name
    #[arg(long)]
    brand: Option<String>,

    /// Model name or number
    #[arg(long)]
    model: Option<String>,

    /// Category label
    #[arg(long)]
    category: Option<String>,
}

impl ItemArgs {
    fn into_descriptor(self) -> ItemDescriptor {
        ItemDescriptor { item_name: self.name, brand: self.brand, model: self.model, category: self.category }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Translate French item text to English keywords
    #[command(alias = "t")]
    Translate {
        /// Text to translate
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Show the search query built for an item
    #[command(alias = "q")]
    Query(ItemArgs),

    /// Run a raw shopping search
    #[command(alias = "s")]
    Search {
        /// Search query
        query: String,
    },

    /// Estimate one item
    #[command(alias = "e")]
    Estimate(ItemArgs),

    /// Estimate every item in a JSON file
    #[command(alias = "b")]
    Batch {
        /// JSON array of item descriptors
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }

    match cli.command {
        Commands::Translate { text } => {
            println!("{}", translate(&text.join(" ")));
        }

        Commands::Query(args) => {
            println!("{}", build_query(&args.into_descriptor()));
        }

        Commands::Search { query } => {
            let cmd = SearchCommand::new(config);
            println!("{}", cmd.execute(&query).await?);
        }

        Commands::Estimate(args) => {
            let cmd = EstimateCommand::new(config);
            println!("{}", cmd.execute(&args.into_descriptor()).await?);
        }

        Commands::Batch { file } => {
            let cmd = EstimateCommand::new(config);
            println!("{}", cmd.execute_batch(&file).await?);
        }
    }

    Ok(())
}
