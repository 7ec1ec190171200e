use cupcake_order::OrderStore;
use cupcake_submit::{HttpTransport, SubmissionService, SubmitConfig};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cupcake_submit=debug,cupcake_order=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SubmitConfig::load().expect("Failed to load config");
    tracing::info!("Submitting orders to {}", config.endpoint.url);

    for cake_type in cupcake_catalog::product::all_cake_types() {
        tracing::debug!("Flavor {}: {}", cake_type.index, cake_type.name);
    }

    // A sample ordering session: the display layer would drive these
    // setters from form controls.
    let store = OrderStore::new();
    store.set_cake_type_index(1);
    store.set_quantity(4);
    store.set_showing_toppings(true);
    store.set_extra_frosting(true);
    store.set_name("Dorothy Gale".to_string());
    store.set_street_address("1 Yellow Brick Road".to_string());
    store.set_city("Emerald City".to_string());
    store.set_zip_code("12345".to_string());

    let order = store.snapshot();
    if !order.has_valid_address() {
        eprintln!("Delivery address is incomplete");
        std::process::exit(1);
    }
    tracing::info!("Your total order is $ {:.2}", order.total_cost());

    let transport = HttpTransport::new(&config.endpoint).expect("Failed to build HTTP client");
    let service = SubmissionService::new(Arc::new(transport));

    match service.submit(&order).await {
        Ok(confirmation) => {
            println!(
                "Your order for {} x {} cupcakes is on its way! Total $ {:.2}",
                confirmation.quantity, confirmation.cake_type, confirmation.total_cost
            );
        }
        Err(e) => {
            eprintln!("Order failed: {e}");
            std::process::exit(1);
        }
    }
}
