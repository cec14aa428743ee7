use std::sync::Arc;

use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::{
        catalog::{ProduceDraft, ProduceList},
        params::ProduceQuery,
    },
    error::{AppError, AppResult},
    models::CatalogItem,
    response::{ApiResponse, Meta},
    services::run_blocking,
    state::AppState,
};

pub async fn list_produce(
    state: &AppState,
    query: ProduceQuery,
) -> AppResult<ApiResponse<ProduceList>> {
    let (page, limit, offset) = query.pagination.normalize();
    let listing = state.catalog.list_items(query.filter());

    let total = listing.count() as i64;
    let items = listing
        .iter()
        .skip(usize::try_from(offset).unwrap_or(usize::MAX))
        .take(usize::try_from(limit).unwrap_or(usize::MAX))
        .cloned()
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Products", ProduceList { items }, Some(meta)))
}

pub async fn get_produce(state: &AppState, id: Uuid) -> AppResult<ApiResponse<CatalogItem>> {
    let item = match state.catalog.get_item(id) {
        Some(item) => item,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Product", item, None))
}

pub async fn list_produce_item(
    state: &AppState,
    draft: ProduceDraft,
) -> AppResult<ApiResponse<CatalogItem>> {
    let catalog = Arc::clone(&state.catalog);
    let item = run_blocking(move || catalog.add_item(draft)).await?;

    log_audit(
        "produce_create",
        Some("catalog"),
        Some(serde_json::json!({ "item_id": item.id, "name": item.name })),
    );

    Ok(ApiResponse::success(
        "Produce listed successfully! It's now available in the market for buyers.",
        item,
        Some(Meta::empty()),
    ))
}

pub async fn remove_produce(
    state: &AppState,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let catalog = Arc::clone(&state.catalog);
    let removed = run_blocking(move || catalog.remove_item(id)).await?;

    if removed {
        log_audit(
            "produce_delete",
            Some("catalog"),
            Some(serde_json::json!({ "item_id": id })),
        );
    }

    let message = if removed { "Deleted" } else { "Already removed" };
    Ok(ApiResponse::success(
        message,
        serde_json::json!({ "removed": removed }),
        Some(Meta::empty()),
    ))
}
