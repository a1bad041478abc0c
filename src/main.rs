//! Demo of the ordering core: seed a menu, build a comanda, reorder the
//! categories and submit the order.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! COMANDA_STORAGE_DIR=/tmp/comanda RUST_LOG=debug cargo run
//! ```

use actor_framework::tracing::setup_tracing;
use comanda::board::{CategoryBoard, Role};
use comanda::cart::CartStore;
use comanda::config::PosConfig;
use comanda::lifecycle::PosSystem;
use comanda::menu::MenuPage;
use comanda::model::{CategoryCreate, Owner, ProductCreate, ProductId};
use comanda::order_panel::OrderPanel;
use comanda::storage::{FileStore, KeyValueStore, MemoryStore};
use comanda::summary::format_currency;
use std::sync::Arc;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = PosConfig::from_env().map_err(|e| e.to_string())?;
    let storage: Arc<dyn KeyValueStore> = match &config.storage_dir {
        Some(dir) => Arc::new(FileStore::open(dir).map_err(|e| e.to_string())?),
        None => Arc::new(MemoryStore::new()),
    };

    let system = PosSystem::new(&config);
    let owner = Owner::new("Rosa Quispe", "Miraflores");

    let span = tracing::info_span!("menu_seed");
    let (entradas, fondos, bebidas) = async {
        let categories = &system.category_client;
        let entradas = categories
            .create_category(CategoryCreate::new("Entradas", owner.clone()))
            .await?;
        let fondos = categories
            .create_category(CategoryCreate::new("Fondos", owner.clone()))
            .await?;
        let bebidas = categories
            .create_category(CategoryCreate::new("Bebidas", owner.clone()))
            .await?;
        Ok::<_, comanda::category_actor::CategoryError>((entradas, fondos, bebidas))
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let products = &system.product_client;
    let mut ceviche = ProductCreate::new("Ceviche", 32.0, entradas);
    ceviche.variants = vec!["Clásico".into(), "Mixto".into()];
    let ceviche = products.create_product(ceviche).await.map_err(|e| e.to_string())?;
    let lomo = products
        .create_product(ProductCreate::new("Lomo saltado", 38.0, fondos))
        .await
        .map_err(|e| e.to_string())?;
    let chicha = products
        .create_product(ProductCreate::new("Chicha morada", 8.0, bebidas))
        .await
        .map_err(|e| e.to_string())?;

    let mut panel = OrderPanel::new(
        CartStore::new(storage.clone()),
        system.order_client.clone(),
        system.trigger.clone(),
        config.tax_factor,
    );
    panel.mount().await.map_err(|e| e.to_string())?;

    for (category, product, variant, quantity) in [
        (fondos, lomo, None, 1),
        (entradas, ceviche, Some("Mixto"), 2),
        (bebidas, chicha, None, 2),
    ] {
        add_line(&system, &mut panel, category, product, variant, quantity).await?;
    }
    print_summary(&panel);

    let mut board = CategoryBoard::new(
        system.category_client.clone(),
        system.product_client.clone(),
        system.trigger.clone(),
        Role::Owner,
    );
    board.load().await.map_err(|e| e.to_string())?;
    board.drag_start(bebidas);
    board
        .drag_end(bebidas, Some(entradas))
        .await
        .map_err(|e| e.to_string())?;
    for category in board.categories() {
        info!(
            order_number = category.order_number,
            products = board.product_count(category.id),
            "{}",
            category.name
        );
    }

    let order_id = panel.submit().await.map_err(|e| e.to_string())?;
    panel.refresh_if_triggered().await;
    info!(order_id = %order_id, header = %panel.header(), "Order submitted");

    drop(board);
    drop(panel);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}

async fn add_line<S: KeyValueStore>(
    system: &PosSystem,
    panel: &mut OrderPanel<S>,
    category: comanda::model::CategoryId,
    product: ProductId,
    variant: Option<&str>,
    quantity: u32,
) -> Result<(), String> {
    let menu = MenuPage::load(&system.category_client, &system.product_client, category)
        .await
        .map_err(|e| e.to_string())?;
    let line = menu
        .line_for(product, variant, quantity)
        .ok_or_else(|| format!("{product} is not on the {category} menu"))?;
    panel.cart_mut().add_item(line).map_err(|e| e.to_string())
}

fn print_summary<S: KeyValueStore>(panel: &OrderPanel<S>) {
    let summary = panel.summary();
    if summary.is_empty() {
        println!("La Comanda está Vacía");
        return;
    }
    println!("{}", panel.header());
    for group in &summary.groups {
        println!("{}", group.category.name);
        for item in &group.items {
            let name = match &item.variant {
                Some(variant) => format!("{} ({variant})", item.name),
                None => item.name.clone(),
            };
            println!(
                "  {} x {:<24} {}",
                item.quantity,
                name,
                format_currency(item.line_total())
            );
        }
    }
    println!("Subtotal {}", format_currency(summary.totals.subtotal));
    println!("IGV      {}", format_currency(summary.totals.igv));
    println!("Total    {}", format_currency(summary.totals.total));
}
