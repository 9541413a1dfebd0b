//! Stockroom CLI - drive the inventory and storefront front-ends from a
//! terminal.
//!
//! # Usage
//!
//! ```bash
//! # Write the sample products on first run
//! stockroom inventory seed
//!
//! # List products, filtered and sorted
//! stockroom inventory list --search laptop --sort price
//!
//! # Add a product to the ledger line
//! stockroom inventory add --line ledger -n "Gorra" -c Ropa -q 12 -p 15.50
//!
//! # Export the inventory as CSV
//! stockroom inventory export --out ./exports
//!
//! # Switch theme
//! stockroom theme toggle
//!
//! # Browse the jewelry catalog and order
//! stockroom shop catalog --category rings
//! stockroom shop order 1 1 4
//! ```
//!
//! # Environment Variables
//!
//! - `STOCKROOM_DATA_DIR` - Data directory (default: `.stockroom`)
//! - `STOCKROOM_PRODUCT_LINE` - Default product line (default: `classic`)
//! - `RUST_LOG` - Log filter (default: `stockroom=info`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use stockroom_admin::LineKind;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;
mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "stockroom")]
#[command(author, version, about = "Stockroom inventory and storefront tools")]
struct Cli {
    /// Data directory (overrides `STOCKROOM_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage inventory products
    Inventory {
        /// Product line (overrides `STOCKROOM_PRODUCT_LINE`)
        #[arg(short, long)]
        line: Option<LineKind>,

        #[command(subcommand)]
        action: InventoryAction,
    },
    /// Show or change the theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Browse the jewelry catalog
    Shop {
        #[command(subcommand)]
        action: ShopAction,
    },
}

/// Product fields as typed on the command line.
#[derive(Args, Debug, Clone)]
pub struct ProductArgs {
    /// Product name
    #[arg(short, long)]
    pub name: String,

    /// Category
    #[arg(short, long)]
    pub category: String,

    /// Quantity in stock
    #[arg(short, long, allow_hyphen_values = true)]
    pub quantity: String,

    /// Unit price
    #[arg(short, long, allow_hyphen_values = true)]
    pub price: String,

    /// Optional description
    #[arg(short, long, default_value = "")]
    pub description: String,
}

#[derive(Subcommand)]
pub enum InventoryAction {
    /// List products
    List {
        /// Case-insensitive search term
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,

        /// Sort key (`name`, `category`, `quantity`, `price`, `total`)
        #[arg(long, default_value = "")]
        sort: String,
    },
    /// Add a product
    Add(ProductArgs),
    /// Replace a product's fields
    Update {
        /// Product ID
        id: String,

        #[command(flatten)]
        product: ProductArgs,
    },
    /// Delete a product
    Delete {
        /// Product ID
        id: String,
    },
    /// Export all products as CSV
    Export {
        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
    /// Render the inventory page as HTML
    Render {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Write sample products if none are stored yet
    Seed,
}

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Print the current theme
    Show,
    /// Set the theme (`claro` or `oscuro`)
    Set { theme: String },
    /// Switch between light and dark
    Toggle,
}

/// Catalog filter options.
#[derive(Args, Debug, Clone, Default)]
pub struct CatalogArgs {
    /// Category (`rings`, `earrings`, `bracelets`, `necklaces`, or `all`)
    #[arg(long, default_value = "all")]
    pub category: String,

    /// Material (`silver`, `gold`, or `all`)
    #[arg(long, default_value = "all")]
    pub material: String,

    /// Maximum price in pesos
    #[arg(long)]
    pub max_price: Option<String>,
}

#[derive(Subcommand)]
pub enum ShopAction {
    /// List catalog items
    Catalog(CatalogArgs),
    /// Add catalog items to the cart and show it
    Order {
        /// Catalog item IDs, one unit each
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Render the storefront page as HTML
    Render {
        #[command(flatten)]
        filter: CatalogArgs,

        /// Catalog item IDs to put in the cart first
        #[arg(long = "order")]
        orders: Vec<String>,

        /// Show the cart panel open
        #[arg(long)]
        cart_open: bool,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() {
    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "stockroom=info".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    match cli.command {
        Commands::Inventory { line, action } => {
            let line = line.unwrap_or(config.product_line);
            commands::inventory::run(line, action, &config)?;
        }
        Commands::Theme { action } => commands::theme::run(action, &config)?,
        Commands::Shop { action } => commands::shop::run(action)?,
    }
    Ok(())
}
