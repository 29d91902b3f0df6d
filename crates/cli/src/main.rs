//! Shopping cart CLI - Drive the cart from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog with in-cart quantities
//! cart store
//!
//! # Add one unit of item 42
//! cart add 42
//!
//! # Remove one unit, or the whole line
//! cart decrease 42
//! cart remove 42
//!
//! # Show the cart drawer
//! cart show
//! ```
//!
//! The cart is persisted under `CART_STORAGE_DIR` (default `.cart`), so each
//! invocation picks up where the previous one left off. See
//! [`shopping_cart::config`] for every environment variable.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use shopping_cart::{CartConfig, LogFormat};
use shopping_cart_core::ItemId;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "cart")]
#[command(author, version, about = "Shopping cart tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog items with their quantities in the cart
    Store,
    /// Show the cart drawer: lines, subtotal, and item count
    Show,
    /// Add one unit of an item
    Add {
        /// Catalog item ID
        id: ItemId,
    },
    /// Remove one unit of an item
    Decrease {
        /// Catalog item ID
        id: ItemId,
    },
    /// Remove an item's line regardless of quantity
    Remove {
        /// Catalog item ID
        id: ItemId,
    },
    /// Print the quantity of one item
    Quantity {
        /// Catalog item ID
        id: ItemId,
    },
}

/// Install the tracing subscriber. Logs go to stderr; stdout carries command output.
fn init_tracing(format: LogFormat) {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopping_cart=info,cart=info".into());

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match CartConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::Text);
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    init_tracing(config.log_format);

    if let Err(e) = run(cli, &config) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &CartConfig) -> shopping_cart::Result<()> {
    let mut session = commands::Session::open(config)?;
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Store => commands::store::list(&session, &mut out)?,
        Commands::Show => commands::cart::show(&mut session, &mut out)?,
        Commands::Add { id } => commands::cart::add(&mut session, id, &mut out)?,
        Commands::Decrease { id } => commands::cart::decrease(&mut session, id, &mut out)?,
        Commands::Remove { id } => commands::cart::remove(&mut session, id, &mut out)?,
        Commands::Quantity { id } => commands::cart::quantity(&session, id, &mut out)?,
    }
    Ok(())
}
