use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agrimarket_store::{
    config::AppConfig,
    dto::params::ProduceQuery,
    services::{cart_service, catalog_service},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,agrimarket_store=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let state = AppState::open(&config)?;
    tracing::info!(
        catalog_key = %config.catalog_key,
        cart_key = %config.cart_key,
        items = state.catalog.len(),
        cart_lines = state.cart.len(),
        "stores opened"
    );

    let produce = catalog_service::list_produce(&state, ProduceQuery::default()).await?;
    let cart = cart_service::cart_summary(&state).await?;

    println!("{}", serde_json::to_string_pretty(&produce)?);
    println!("{}", serde_json::to_string_pretty(&cart)?);

    Ok(())
}
