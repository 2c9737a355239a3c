//! Subcommand implementations and output rendering.
//!
//! Field-level errors render inline next to the field name; transport
//! failures render as a single transient notice on stderr.

use std::process::ExitCode;

use storekit_catalog::{CatalogError, FetchState, Product, ProductId};
use storekit_client::PlatformClient;
use storekit_core::StoreCategory;
use storekit_flows::{
    load_product, load_products, CancelToken, CatalogSession, SubmissionFlow, SubmitError,
};
use storekit_store::StoreDraft;

pub async fn create_store(
    client: &PlatformClient,
    cancel: &mut CancelToken,
    name: String,
    domain: String,
    email: String,
    category: StoreCategory,
) -> ExitCode {
    let draft = StoreDraft {
        name,
        domain,
        email,
        category: Some(category),
        ..StoreDraft::default()
    };
    let mut flow = SubmissionFlow::new(draft);

    match flow.submit(client, cancel).await {
        Ok(record) => {
            println!("Store created successfully!");
            println!("  id:     {}", record.id);
            println!("  name:   {}", record.name);
            println!("  domain: {}", record.domain);
            ExitCode::SUCCESS
        }
        Err(SubmitError::Invalid(_) | SubmitError::Unavailable) => {
            for (field, message) in flow.errors().entries() {
                eprintln!("  {field}: {message}");
            }
            ExitCode::FAILURE
        }
        Err(SubmitError::IncompleteDraft(err)) => {
            eprintln!("  category: {err}");
            ExitCode::FAILURE
        }
        Err(SubmitError::Network(err)) => transient_notice(&err.to_string()),
        Err(SubmitError::Cancelled) => cancelled_notice(),
    }
}

pub async fn list_products(client: &PlatformClient, cancel: &mut CancelToken) -> ExitCode {
    let mut session = CatalogSession::new();
    load_products(&mut session, client, cancel).await;

    match session.state() {
        FetchState::Loaded(products) if products.is_empty() => {
            println!("No products in the catalog.");
            ExitCode::SUCCESS
        }
        FetchState::Loaded(products) => {
            for product in products {
                println!(
                    "{}  {}  {}  {}",
                    product.id, product.name, product.price, product.category
                );
            }
            ExitCode::SUCCESS
        }
        FetchState::Failed(err) => render_catalog_error(err),
        FetchState::Loading => cancelled_notice(),
    }
}

pub async fn show_product(
    client: &PlatformClient,
    cancel: &mut CancelToken,
    id: String,
) -> ExitCode {
    let mut session = CatalogSession::new();
    let id = ProductId::new(id);
    load_product(&mut session, client, &id, cancel).await;

    match session.state() {
        FetchState::Loaded(product) => {
            render_product(product);
            ExitCode::SUCCESS
        }
        FetchState::Failed(err) => render_catalog_error(err),
        FetchState::Loading => cancelled_notice(),
    }
}

fn render_product(product: &Product) {
    println!("{}", product.name);
    println!("  id:          {}", product.id);
    println!("  price:       {}", product.price);
    println!("  category:    {}", product.category);
    println!("  image:       {}", product.image_or_placeholder());
    if !product.description.is_empty() {
        println!("  description: {}", product.description);
    }
}

fn render_catalog_error(err: &CatalogError) -> ExitCode {
    match err {
        CatalogError::NotFound => {
            println!("Product not found.");
            ExitCode::FAILURE
        }
        CatalogError::Transport(_) => transient_notice(&err.to_string()),
    }
}

fn transient_notice(message: &str) -> ExitCode {
    eprintln!("! {message} (temporary failure, try again)");
    ExitCode::FAILURE
}

fn cancelled_notice() -> ExitCode {
    eprintln!("cancelled");
    ExitCode::FAILURE
}
