use std::sync::Arc;

use crate::{
    audit::log_audit,
    error::AppResult,
    models::ReceiptSummary,
    response::{ApiResponse, Meta, format_rupees},
    services::run_blocking,
    state::AppState,
};

pub async fn checkout(state: &AppState) -> AppResult<ApiResponse<ReceiptSummary>> {
    let cart = Arc::clone(&state.cart);
    let receipt = run_blocking(move || cart.checkout()).await?;

    log_audit(
        "checkout",
        Some("cart"),
        Some(serde_json::json!({
            "total_amount": receipt.total_amount,
            "line_count": receipt.line_count,
        })),
    );

    Ok(ApiResponse::success(
        format!(
            "Thank you for your order! Total: {}",
            format_rupees(receipt.total_amount)
        ),
        receipt,
        Some(Meta::empty()),
    ))
}
