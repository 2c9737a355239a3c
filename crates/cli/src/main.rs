//! `storekit` — terminal front end for the storefront platform.
//!
//! Mirrors the web client's three routes as subcommands: `create-store`
//! (the onboarding form), `products` (catalog listing), and `product`
//! (catalog detail).

use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use storekit_client::{ClientConfig, PlatformClient};
use storekit_core::StoreCategory;
use storekit_flows::CancelGuard;

mod commands;

#[derive(Parser)]
#[command(name = "storekit", about = "Storefront onboarding & catalog client")]
struct Cli {
    /// Base URL of the domain/store service.
    #[arg(long, global = true)]
    store_api: Option<String>,

    /// Base URL of the product service.
    #[arg(long, global = true)]
    products_api: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a store draft, check the subdomain, and create the store.
    CreateStore {
        /// Store display name (at least 3 characters).
        #[arg(long)]
        name: String,
        /// Subdomain label (unqualified; lowercased automatically).
        #[arg(long)]
        domain: String,
        /// Contact email.
        #[arg(long)]
        email: String,
        /// Store category.
        #[arg(long, value_parser = parse_category)]
        category: StoreCategory,
    },
    /// List the product catalog.
    Products,
    /// Show one product by id.
    Product {
        /// Catalog product id.
        id: String,
    },
}

fn parse_category(raw: &str) -> Result<StoreCategory, String> {
    StoreCategory::parse(raw).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    storekit_observability::init();

    match run(Cli::parse()).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = ClientConfig::default();
    if let Some(url) = cli.store_api {
        config.store_base_url = url;
    }
    if let Some(url) = cli.products_api {
        config.products_base_url = url;
    }

    let client = PlatformClient::new(config).context("failed to build HTTP client")?;

    // One cancellation scope for the whole invocation; Ctrl-C tears it down
    // and aborts whatever call is in flight.
    let (guard, mut cancel) = CancelGuard::new();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupt received, cancelling");
            guard.cancel();
        }
    });

    let code = match cli.command {
        Command::CreateStore {
            name,
            domain,
            email,
            category,
        } => commands::create_store(&client, &mut cancel, name, domain, email, category).await,
        Command::Products => commands::list_products(&client, &mut cancel).await,
        Command::Product { id } => commands::show_product(&client, &mut cancel, id).await,
    };
    Ok(code)
}
