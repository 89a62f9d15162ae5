// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! kiosk - Shop counter inventory and sales

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod error;
mod output;
mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{admin, notifications, products, ranking, shop, Context};
use kiosk_core::{Config, ProductId};
use output::OutputFormat;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "kiosk",
    version,
    about = "Kiosk - Shop counter inventory and sales"
)]
struct Cli {
    /// Config file (defaults to ./kiosk.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding products.csv and notifications.json
    #[arg(long, global = true, env = "KIOSK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products with optional filters
    Products(products::ProductsArgs),
    /// Show details of a product
    Show {
        /// Product ID
        id: ProductId,
    },
    /// List product categories
    Categories,
    /// Buy one unit of a product (simulated)
    Buy {
        /// Product ID
        id: ProductId,
    },
    /// Ask to be notified when a sold-out product is back
    RequestRestock {
        /// Product ID
        id: ProductId,
    },
    /// Best sellers and category statistics
    Ranking(ranking::RankingArgs),
    /// List or acknowledge notifications
    Notifications(notifications::NotificationsArgs),
    /// Stock management (requires the admin password)
    Admin(admin::AdminArgs),
}

fn main() -> Result<()> {
    setup_logging();
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let config = Config::resolve(cli.config.as_deref(), &cwd)?.with_data_dir(cli.data_dir);
    debug!(data_dir = %config.data_dir.display(), "config resolved");

    let ctx = Context::new(config, cli.format);

    match cli.command {
        Commands::Products(args) => products::list(&ctx, args),
        Commands::Show { id } => products::show(&ctx, id),
        Commands::Categories => products::categories(&ctx),
        Commands::Buy { id } => shop::buy(&ctx, id),
        Commands::RequestRestock { id } => shop::request_restock(&ctx, id),
        Commands::Ranking(args) => ranking::handle(&ctx, args),
        Commands::Notifications(args) => notifications::handle(&ctx, args),
        Commands::Admin(args) => admin::handle(&ctx, args),
    }
}

/// Log to stderr so stdout carries only command output
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
