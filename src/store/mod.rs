//! Catalog and cart state, each persisted as one snapshot under its own key.

pub mod cart;
pub mod catalog;
pub mod category;

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    error::{AppResult, PersistenceError},
    storage::Storage,
};

pub use cart::{CartSnapshot, CartStore};
pub use catalog::{CatalogListing, CatalogStore};

/// An ordered list mirrored to storage after every change.
///
/// Mutations run under the lock: the closure edits a private copy, the copy is
/// saved, and only then does it replace the published list. Readers clone the
/// published `Arc` and never see a half-applied change.
pub(crate) struct PersistedList<T> {
    key: String,
    storage: Arc<dyn Storage>,
    items: Mutex<Arc<Vec<T>>>,
}

impl<T> PersistedList<T>
where
    T: Clone + Serialize + DeserializeOwned,
{
    pub(crate) fn load(storage: Arc<dyn Storage>, key: &str) -> AppResult<Self> {
        let items = match storage.load(key)? {
            Some(raw) => serde_json::from_str::<Vec<T>>(&raw).map_err(|source| {
                PersistenceError::Corrupt {
                    key: key.to_string(),
                    source,
                }
            })?,
            None => Vec::new(),
        };
        tracing::debug!(key, count = items.len(), "loaded snapshot");

        Ok(Self {
            key: key.to_string(),
            storage,
            items: Mutex::new(Arc::new(items)),
        })
    }

    pub(crate) fn snapshot(&self) -> Arc<Vec<T>> {
        Arc::clone(&self.items.lock())
    }

    /// Applies `mutate` to a copy of the list. `Ok(None)` from the closure
    /// means nothing changed and nothing is written.
    pub(crate) fn update<R>(
        &self,
        mutate: impl FnOnce(&mut Vec<T>) -> AppResult<Option<R>>,
    ) -> AppResult<Option<R>> {
        let mut published = self.items.lock();
        let mut next: Vec<T> = (**published).clone();

        let Some(outcome) = mutate(&mut next)? else {
            return Ok(None);
        };

        let encoded = serde_json::to_string(&next).map_err(PersistenceError::Encode)?;
        if let Err(err) = self.storage.save(&self.key, &encoded) {
            tracing::warn!(key = %self.key, error = %err, "save failed, change discarded");
            return Err(err.into());
        }

        *published = Arc::new(next);
        Ok(Some(outcome))
    }
}
