//! OPTCG Collector CLI
//!
//! Thin wrapper around collector-core for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Show which backend will be used
//! collector info
//!
//! # Search the marketplace mirror
//! collector search "OP05-119"
//!
//! # List the collection with the total spent in EUR
//! collector list --currency EUR
//!
//! # Add a card bought for 12.50 EUR, two copies
//! collector add --id-code OP05-119 --name "Example Card" --price 12.50 --currency EUR --quantity 2
//!
//! # Attach a custom image to a collection entry
//! collector set-image <entry_id> ./front.png
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use collector_core::{
    AddForm, BackendConfig, Currency, Dashboard, HttpApi, ImageUpload, LocalImage,
    SearchResultItem, SearchState,
};

/// OPTCG Collector - Trading card collection tracker
#[derive(Parser)]
#[command(name = "collector")]
#[command(version = "0.1.0")]
#[command(about = "OPTCG Collector - search cards and track what you spent")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Backend base URL (default: $COLLECTOR_BACKEND_URL, then http://localhost:8000)
    #[arg(short, long, global = true)]
    backend_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the resolved backend
    Info,

    /// Search the marketplace mirror by name or ID
    Search {
        /// Free-text query (e.g. OP05-119)
        query: String,
    },

    /// List the collection and the total spent
    List {
        /// Display currency for the total (USD or EUR)
        #[arg(short, long, default_value = "USD")]
        currency: Currency,
    },

    /// Add a card to the collection
    Add {
        /// Purchase price per copy
        #[arg(short, long)]
        price: String,
        /// Purchase currency (USD or EUR)
        #[arg(short, long, default_value = "USD")]
        currency: Currency,
        /// Number of copies
        #[arg(short, long, default_value = "1")]
        quantity: String,
        #[arg(long)]
        id_code: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
        #[arg(long)]
        source_url: Option<String>,
    },

    /// Upload a custom image for a collection entry
    SetImage {
        /// Collection entry ID
        entry_id: String,
        /// Image file (png, jpg, webp, gif)
        path: PathBuf,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn print_item(item: &SearchResultItem) {
    println!("{}", item.display_name());
    println!("  {}", item.subtitle());
    if let Some(url) = item.image() {
        println!("  Image: {}", url);
    }
    if let Some(url) = item.source_url.as_deref() {
        println!("  Source: {}", url);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = match cli.backend_url.as_deref() {
        Some(url) => BackendConfig::resolve(Some(url), None),
        None => BackendConfig::from_env(None),
    };
    tracing::info!("Using backend {} ({})", config.base_url(), config.source());
    let api = HttpApi::new(config);

    match cli.command {
        Commands::Info => {
            println!("OPTCG Collector");
            println!("  Backend: {}", api.config().base_url());
            println!("  Resolved from: {}", api.config().source());
        }

        Commands::Search { query } => {
            let mut search = SearchState::new();
            search.set_query(query);
            if let Some(items) = search.run(&api).await {
                if items.is_empty() {
                    println!("No results");
                }
                for item in &items {
                    print_item(item);
                }
            }
            if let Some(err) = search.error {
                anyhow::bail!(err);
            }
        }

        Commands::List { currency } => {
            let mut dashboard = Dashboard::new();
            dashboard.load(&api).await;
            dashboard.change_currency(&api, currency).await;

            for entry in &dashboard.entries {
                println!("{}", entry.display_name());
                println!("  ID: {}", entry.id);
                println!("  {}", entry.subtitle());
                println!(
                    "  Bought: {} x {} {}",
                    entry.quantity.unwrap_or(1.0),
                    entry
                        .purchase_price
                        .map(|p| format!("{:.2}", p))
                        .unwrap_or_else(|| "N/A".to_string()),
                    entry.purchase_currency.as_deref().unwrap_or_default()
                );
                if let Some(url) = entry.display_image() {
                    println!("  Image: {}", url);
                }
            }
            println!("Entries: {}", dashboard.entries.len());
            println!("Total spent: {}", dashboard.formatted_total());
        }

        Commands::Add {
            price,
            currency,
            quantity,
            id_code,
            name,
            language,
            image_url,
            source_url,
        } => {
            let item = SearchResultItem {
                id_code,
                name,
                language,
                image_url,
                source_url,
            };
            let mut form = AddForm::new();
            form.price = price;
            form.currency = currency;
            form.set_quantity_input(&quantity);

            match form.run(&api, &item).await? {
                Some(id) => {
                    println!("Added {} to collection", item.display_name());
                    println!("  ID: {}", id);
                }
                None => println!("Nothing added: price is empty"),
            }
        }

        Commands::SetImage { entry_id, path } => {
            let image = LocalImage::from_path(&path)?;
            let mut upload = ImageUpload::new();
            upload.select(Some(image));

            if let Some(url) = upload.run(&api, &entry_id).await? {
                println!("Custom image set for {}", entry_id);
                println!("  URL: {}", url);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_currency() {
        let cli = Cli::try_parse_from(["collector", "list", "--currency", "eur"]).unwrap();
        assert!(matches!(cli.command, Commands::List { currency: Currency::Eur }));
    }

    #[test]
    fn test_cli_rejects_unknown_currency() {
        assert!(Cli::try_parse_from(["collector", "list", "--currency", "GBP"]).is_err());
    }

    #[test]
    fn test_cli_global_backend_flag() {
        let cli =
            Cli::try_parse_from(["collector", "search", "luffy", "--backend-url", "http://x:1"])
                .unwrap();
        assert_eq!(cli.backend_url.as_deref(), Some("http://x:1"));
    }
}
