//! # Stockroom demo
//!
//! With `STOCKROOM_API_URL` set, prints the dashboard of the REST backend. Otherwise seeds
//! the in-memory store and walks through a product delete that is blocked by sales and
//! resolved with a cascade delete, then prints the dashboard.

use anyhow::Context;
use stockroom::catalog::{Catalog, ProductForm};
use stockroom::config::AppConfig;
use stockroom::dashboard::DashboardController;
use stockroom::deletion::{DeleteFailure, DeletionController};
use stockroom::lifecycle::{setup_tracing, InventorySystem};
use stockroom::repository::{HttpRepository, InventoryRepository};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();
    let config = AppConfig::from_env()?;

    match &config.api_url {
        Some(url) => {
            info!(%url, "Using REST backend");
            let repo = HttpRepository::new(url.clone(), config.timeout)?;
            print_dashboard(repo).await
        }
        None => {
            info!("Using in-memory store");
            let system = InventorySystem::new();
            let result = demo(&system).await;
            system.shutdown().await.map_err(anyhow::Error::msg)?;
            result
        }
    }
}

async fn demo(system: &InventorySystem) -> anyhow::Result<()> {
    let mut catalog = Catalog::new(system.repository());

    let (widget, gadget) = async {
        let widget = catalog
            .add_product(&ProductForm::new("Widget", "Blue, 40mm", "12.50", "25"))
            .await?;
        let gadget = catalog
            .add_product(&ProductForm::new("Gadget", "", "3.20", "8"))
            .await?;
        catalog.sell(widget.id, "3").await?;
        catalog.sell(widget.id, "2").await?;
        catalog.restock(gadget.id, "15").await?;
        anyhow::Ok((widget, gadget))
    }
    .instrument(tracing::info_span!("seeding"))
    .await
    .context("seeding the store")?;
    info!(widget = %widget.id, gadget = %gadget.id, "Store seeded");

    async {
        let mut deletion = DeletionController::new(system.repository());
        deletion.load().await?;

        deletion.request_delete(widget.clone());
        match deletion.confirm_delete().await {
            Err(DeleteFailure::Conflict) => {
                info!(
                    dependents = deletion.dependents().len(),
                    "Widget has sales, deleting them first"
                );
                deletion.confirm_cascade_delete().await?;
            }
            other => other?,
        }
        if let Some(notice) = deletion.notice() {
            warn!(notice, "Deletion notice");
        }
        info!(products = deletion.products().len(), "Products left");
        anyhow::Ok(())
    }
    .instrument(tracing::info_span!("deletion"))
    .await?;

    print_dashboard(system.repository()).await
}

async fn print_dashboard<R: InventoryRepository>(repo: R) -> anyhow::Result<()> {
    let dashboard = DashboardController::new(repo);
    dashboard.refresh().await.context("loading dashboard data")?;
    let snapshot = dashboard
        .snapshot()
        .context("dashboard refresh produced no data")?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
