use std::sync::Arc;

use crate::{
    config::AppConfig,
    error::AppResult,
    storage::{MemoryStorage, Storage, open_storage},
    store::{CartStore, CatalogStore},
};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub cart: Arc<CartStore>,
}

impl AppState {
    /// Opens both stores on the storage selected by `config`.
    pub fn open(config: &AppConfig) -> AppResult<Self> {
        Self::with_storage(open_storage(config), config)
    }

    pub fn with_storage(storage: Arc<dyn Storage>, config: &AppConfig) -> AppResult<Self> {
        let catalog = CatalogStore::open(Arc::clone(&storage), &config.catalog_key)?;
        let cart = CartStore::open(storage, &config.cart_key)?;
        Ok(Self {
            catalog: Arc::new(catalog),
            cart: Arc::new(cart),
        })
    }

    pub fn in_memory() -> AppResult<Self> {
        Self::with_storage(Arc::new(MemoryStorage::new()), &AppConfig::default())
    }
}
