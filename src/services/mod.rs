pub mod cart_service;
pub mod catalog_service;
pub mod order_service;

use crate::error::{AppError, AppResult};

/// Runs a store mutation on the blocking pool; saves may hit the disk.
pub(crate) async fn run_blocking<T, F>(op: F) -> AppResult<T>
where
    F: FnOnce() -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(op)
        .await
        .map_err(|err| AppError::Internal(err.into()))?
}
