use agrimarket_store::{
    config::AppConfig, dto::catalog::ProduceDraft, services::catalog_service, state::AppState,
};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    if config.data_dir.is_none() {
        anyhow::bail!("AGRIMARKET_DATA_DIR must be set, seeding in-memory storage has no effect");
    }

    let state = AppState::open(&config)?;
    if !state.catalog.is_empty() {
        println!(
            "Catalog already has {} items, skipping seed",
            state.catalog.len()
        );
        return Ok(());
    }

    seed_produce(&state).await?;
    println!("Seed completed. Catalog items: {}", state.catalog.len());
    Ok(())
}

async fn seed_produce(state: &AppState) -> anyhow::Result<()> {
    let produce: Vec<(&str, &str, &str, i64, i64)> = vec![
        ("Organic Tomatoes", "Green Valley Farm", "Nashik", 50, 40),
        ("Fresh Apples", "Hillside Orchards", "Shimla", 120, 150),
        ("Basmati Rice", "Golden Fields", "Karnal", 500, 90),
        ("Sweet Corn", "Sunrise Acres", "Pune", 80, 30),
        ("Fresh Basil", "Herb Haven", "Bengaluru", 10, 200),
    ];

    for (name, farmer, location, quantity, price) in produce {
        let draft = ProduceDraft::new(name, quantity, Decimal::from(price))
            .farmer_name(farmer)
            .location(location);
        let created = catalog_service::list_produce_item(state, draft).await?;
        if let Some(item) = created.data {
            println!("Listed {} ({}) at {}/kg", item.name, item.category, item.price);
        }
    }

    Ok(())
}
