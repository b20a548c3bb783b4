//! Demo run: sign in, shop, check out, and print the ledger summary.

use actor_store::ActorClient;
use storefront::config::StoreConfig;
use storefront::lifecycle::{setup_tracing, StoreSystem};
use storefront::model::{ShippingInfo, ADMIN_EMAIL, ADMIN_PASSWORD};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = StoreConfig::from_env()?;
    info!(?config, "Starting storefront");
    let system = StoreSystem::start(&config)?;

    let signed_in = system.identity.login(ADMIN_EMAIL, ADMIN_PASSWORD).await?;
    info!(signed_in, "Login attempted");

    let categories = system.catalog.categories().await?;
    info!(?categories, "Catalog loaded");

    let span = tracing::info_span!("shopping");
    async {
        let products = system.catalog.list().await?;
        for product in products.iter().take(2) {
            system.cart.add_product(product).await?;
        }
        if let Some(first) = products.first() {
            system.cart.add_product(first).await?;
        }
        let totals = system.cart.totals().await?;
        info!(total = %totals.total, item_count = totals.item_count, "Cart filled");
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    let shipping_info = ShippingInfo {
        name: "Administrator".into(),
        email: ADMIN_EMAIL.into(),
        phone: "555-0100".into(),
        address: "1 Commerce Way".into(),
        city: "Springfield".into(),
        state: "IL".into(),
        zip_code: "62701".into(),
        card_number: "4111111111111111".into(),
        expiry_date: "12/30".into(),
        cvv: "123".into(),
        card_name: "ADMINISTRATOR".into(),
    };

    match system.checkout.place_order(shipping_info).await {
        Ok(order) => info!(
            order_id = %order.id,
            total = %order.total,
            status = %order.status,
            "Order placed"
        ),
        Err(e) => error!(error = %e, "Checkout failed"),
    }

    let summary = system.orders.aggregate().await?;
    info!(
        count = summary.count,
        total_revenue = %summary.total_revenue,
        "Ledger summary"
    );

    // Shutdown system gracefully
    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
