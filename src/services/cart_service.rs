use std::sync::Arc;

use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::cart::{AddToCartRequest, AddedToCart, CartView},
    error::{AppError, AppResult},
    response::{ApiResponse, Meta},
    services::run_blocking,
    state::AppState,
};

pub async fn cart_summary(state: &AppState) -> AppResult<ApiResponse<CartView>> {
    Ok(ApiResponse::success("OK", cart_view(state), Some(Meta::empty())))
}

pub async fn add_to_cart(
    state: &AppState,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<AddedToCart>> {
    let item = state
        .catalog
        .get_item(payload.item_id)
        .ok_or(AppError::NotFound)?;

    let cart = Arc::clone(&state.cart);
    let quantity = payload.quantity;
    let line_item = item.clone();
    let line_id = run_blocking(move || cart.add_line(&line_item, quantity)).await?;

    log_audit(
        "cart_update",
        Some("cart"),
        Some(serde_json::json!({ "item_id": item.id, "line_id": line_id, "quantity": quantity })),
    );

    let data = AddedToCart {
        line_id,
        cart: cart_view(state),
    };
    Ok(ApiResponse::success(
        format!("Added {quantity}kg of {} to cart!", item.name),
        data,
        Some(Meta::empty()),
    ))
}

pub async fn remove_from_cart(
    state: &AppState,
    line_id: Uuid,
) -> AppResult<ApiResponse<CartView>> {
    let cart = Arc::clone(&state.cart);
    let removed = run_blocking(move || cart.remove_line(line_id)).await?;

    if removed {
        log_audit(
            "cart_remove",
            Some("cart"),
            Some(serde_json::json!({ "line_id": line_id })),
        );
    }

    Ok(ApiResponse::success(
        "Removed from cart",
        cart_view(state),
        Some(Meta::empty()),
    ))
}

fn cart_view(state: &AppState) -> CartView {
    let snapshot = state.cart.snapshot();
    CartView {
        total: snapshot.total(),
        count: snapshot.len(),
        lines: snapshot.lines().to_vec(),
    }
}
