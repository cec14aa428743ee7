use agrimarket_store::{
    dto::{
        cart::AddToCartRequest,
        catalog::ProduceDraft,
        params::{Pagination, ProduceQuery},
    },
    error::AppError,
    models::Category,
    response::Meta,
    services::{cart_service, catalog_service, order_service},
    state::AppState,
};
use rust_decimal_macros::dec;
use uuid::Uuid;

// Producer lists produce -> buyer filters, fills the cart and checks out.
#[tokio::test]
async fn list_browse_add_and_checkout_flow() -> anyhow::Result<()> {
    let state = AppState::in_memory()?;

    let listed = catalog_service::list_produce_item(
        &state,
        ProduceDraft::new("Tomato", 50, dec!(20)).farmer_name("Green Valley Farm"),
    )
    .await?;
    assert!(listed.message.starts_with("Produce listed successfully"));
    let tomato = listed.data.unwrap();

    catalog_service::list_produce_item(&state, ProduceDraft::new("Fresh Apples", 40, dec!(150)))
        .await?;

    let vegetables = catalog_service::list_produce(
        &state,
        ProduceQuery {
            category: Some(Category::Vegetables),
            ..ProduceQuery::default()
        },
    )
    .await?;
    let items = vegetables.data.unwrap().items;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, tomato.id);

    let added = cart_service::add_to_cart(
        &state,
        AddToCartRequest {
            item_id: tomato.id,
            quantity: 10,
        },
    )
    .await?;
    assert_eq!(added.message, "Added 10kg of Tomato to cart!");
    assert_eq!(added.meta, Some(Meta::empty()));

    cart_service::add_to_cart(
        &state,
        AddToCartRequest {
            item_id: tomato.id,
            quantity: 10,
        },
    )
    .await?;

    let summary = cart_service::cart_summary(&state).await?.data.unwrap();
    assert_eq!(summary.count, 2);
    assert_eq!(summary.total, dec!(400));

    let receipt = order_service::checkout(&state).await?;
    assert_eq!(receipt.message, "Thank you for your order! Total: ₹400");
    let receipt = receipt.data.unwrap();
    assert_eq!(receipt.total_amount, dec!(400));
    assert_eq!(receipt.line_count, 2);

    let summary = cart_service::cart_summary(&state).await?.data.unwrap();
    assert_eq!(summary.count, 0);
    assert_eq!(summary.total, dec!(0));

    assert!(matches!(
        order_service::checkout(&state).await,
        Err(AppError::EmptyCart)
    ));
    Ok(())
}

#[tokio::test]
async fn adding_unknown_item_is_not_found() -> anyhow::Result<()> {
    let state = AppState::in_memory()?;
    let result = cart_service::add_to_cart(
        &state,
        AddToCartRequest {
            item_id: Uuid::new_v4(),
            quantity: 1,
        },
    )
    .await;
    assert!(matches!(result, Err(AppError::NotFound)));
    assert!(matches!(
        catalog_service::get_produce(&state, Uuid::new_v4()).await,
        Err(AppError::NotFound)
    ));
    Ok(())
}

#[tokio::test]
async fn invalid_listing_surfaces_validation_error() -> anyhow::Result<()> {
    let state = AppState::in_memory()?;
    let result = catalog_service::list_produce_item(
        &state,
        ProduceDraft {
            name: "Carrot".into(),
            quantity_available: Some(-5),
            ..ProduceDraft::default()
        },
    )
    .await;

    match result {
        Err(AppError::Validation(v)) => {
            assert!(v.has_field("quantityAvailable"));
            assert!(v.has_field("price"));
            assert!(!v.has_field("name"));
        }
        other => panic!("expected validation error, got {:?}", other.map(|r| r.message)),
    }
    assert!(state.catalog.is_empty());
    Ok(())
}

#[tokio::test]
async fn listing_is_paginated_in_catalog_order() -> anyhow::Result<()> {
    let state = AppState::in_memory()?;
    for i in 1..=5 {
        catalog_service::list_produce_item(&state, ProduceDraft::new(format!("Lot {i}"), 10, dec!(5)))
            .await?;
    }

    let page = catalog_service::list_produce(
        &state,
        ProduceQuery {
            pagination: Pagination {
                page: Some(2),
                per_page: Some(2),
            },
            ..ProduceQuery::default()
        },
    )
    .await?;

    let meta = page.meta.clone().unwrap();
    assert_eq!(meta.total, Some(5));
    assert_eq!(meta.page, Some(2));
    let names: Vec<_> = page.data.unwrap().items.into_iter().map(|i| i.name).collect();
    assert_eq!(names, ["Lot 3", "Lot 4"]);
    Ok(())
}

#[tokio::test]
async fn removals_are_idempotent() -> anyhow::Result<()> {
    let state = AppState::in_memory()?;
    let item = catalog_service::list_produce_item(&state, ProduceDraft::new("Spinach", 6, dec!(30)))
        .await?
        .data
        .unwrap();

    let first = catalog_service::remove_produce(&state, item.id).await?;
    assert_eq!(first.data.unwrap()["removed"], true);
    let second = catalog_service::remove_produce(&state, item.id).await?;
    assert_eq!(second.data.unwrap()["removed"], false);

    let cart = cart_service::remove_from_cart(&state, Uuid::new_v4()).await?;
    assert_eq!(cart.data.unwrap().count, 0);
    Ok(())
}

#[tokio::test]
async fn page_far_past_the_end_is_empty() -> anyhow::Result<()> {
    let state = AppState::in_memory()?;
    for name in ["Carrot", "Banana", "Wheat"] {
        catalog_service::list_produce_item(&state, ProduceDraft::new(name, 10, dec!(5))).await?;
    }

    let page = catalog_service::list_produce(
        &state,
        ProduceQuery {
            pagination: Pagination {
                page: Some(i64::MAX),
                per_page: Some(50),
            },
            ..ProduceQuery::default()
        },
    )
    .await?;

    let meta = page.meta.clone().unwrap();
    assert_eq!(meta.total, Some(3));
    assert_eq!(meta.page, Some(i64::MAX));
    assert!(page.data.unwrap().items.is_empty());
    Ok(())
}

#[tokio::test]
async fn category_query_is_case_insensitive() -> anyhow::Result<()> {
    let state = AppState::in_memory()?;
    let apple = catalog_service::list_produce_item(&state, ProduceDraft::new("Apple", 10, dec!(150)))
        .await?
        .data
        .unwrap();
    catalog_service::list_produce_item(&state, ProduceDraft::new("Tomato", 10, dec!(20))).await?;

    for raw in [r#"{"category":"Fruits"}"#, r#"{"category":"FRUITS"}"#, r#"{"category":"fruits"}"#] {
        let query: ProduceQuery = serde_json::from_str(raw)?;
        assert_eq!(query.category, Some(Category::Fruits));

        let items = catalog_service::list_produce(&state, query).await?.data.unwrap().items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, apple.id);
    }

    assert!(serde_json::from_str::<ProduceQuery>(r#"{"category":"nuts"}"#).is_err());
    assert_eq!("Herbs".parse::<Category>()?, Category::Herbs);
    Ok(())
}
