use std::{slice, sync::Arc};

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    dto::catalog::{CatalogFilter, ProduceDraft},
    error::{AppResult, ValidationError},
    models::CatalogItem,
    storage::Storage,
    store::{
        PersistedList,
        category::{category_for, image_tag_for},
    },
};

pub const DEFAULT_FARMER_NAME: &str = "Your Farm";
pub const DEFAULT_LOCATION: &str = "Local Farm";

/// Producer-listed items in listing order.
pub struct CatalogStore {
    items: PersistedList<CatalogItem>,
}

impl CatalogStore {
    pub fn open(storage: Arc<dyn Storage>, key: &str) -> AppResult<Self> {
        Ok(Self {
            items: PersistedList::load(storage, key)?,
        })
    }

    /// Validates the draft, derives category and image tag from the name and
    /// appends the new item.
    pub fn add_item(&self, draft: ProduceDraft) -> AppResult<CatalogItem> {
        let item = build_item(draft)?;
        let created = item.clone();
        self.items.update(move |items| {
            items.push(item);
            Ok(Some(()))
        })?;

        tracing::debug!(
            id = %created.id,
            name = %created.name,
            category = %created.category,
            "catalog item listed"
        );
        Ok(created)
    }

    /// Removing an unknown id is a no-op. Returns whether anything was removed.
    pub fn remove_item(&self, id: Uuid) -> AppResult<bool> {
        let removed = self.items.update(|items| {
            Ok(items
                .iter()
                .position(|item| item.id == id)
                .map(|idx| items.remove(idx)))
        })?;

        match &removed {
            Some(item) => tracing::debug!(%id, name = %item.name, "catalog item removed"),
            None => tracing::debug!(%id, "catalog item not found, nothing removed"),
        }
        Ok(removed.is_some())
    }

    pub fn get_item(&self, id: Uuid) -> Option<CatalogItem> {
        self.items.snapshot().iter().find(|item| item.id == id).cloned()
    }

    pub fn list_items(&self, filter: CatalogFilter) -> CatalogListing {
        CatalogListing {
            items: self.items.snapshot(),
            filter,
        }
    }

    pub fn len(&self) -> usize {
        self.items.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn build_item(draft: ProduceDraft) -> AppResult<CatalogItem> {
    let mut errors = ValidationError::new();

    let name = draft.name.trim().to_string();
    if name.is_empty() {
        errors.push("name", "is required");
    }

    let quantity_available = match draft.quantity_available {
        None => {
            errors.push("quantityAvailable", "is required");
            0
        }
        Some(q) if q <= 0 => {
            errors.push("quantityAvailable", "must be greater than 0");
            0
        }
        Some(q) => u32::try_from(q).unwrap_or_else(|_| {
            errors.push("quantityAvailable", "is too large");
            0
        }),
    };

    let price = match draft.price {
        None => {
            errors.push("price", "is required");
            Decimal::ZERO
        }
        Some(p) if p < Decimal::ZERO => {
            errors.push("price", "must not be negative");
            Decimal::ZERO
        }
        Some(p) => p,
    };

    errors.into_result()?;

    let farmer_name = non_blank(draft.farmer_name).unwrap_or_else(|| DEFAULT_FARMER_NAME.into());
    let description = non_blank(draft.description)
        .unwrap_or_else(|| format!("Fresh {} from local farm.", name.to_lowercase()));
    let location = non_blank(draft.location).unwrap_or_else(|| DEFAULT_LOCATION.into());

    Ok(CatalogItem {
        id: Uuid::new_v4(),
        category: category_for(&name),
        image_tag: image_tag_for(&name).to_string(),
        name,
        farmer_name,
        description,
        quantity_available,
        price,
        location,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Filtered view over one catalog snapshot. Iterating is lazy and can be
/// repeated; later catalog changes are not reflected.
#[derive(Debug, Clone)]
pub struct CatalogListing {
    items: Arc<Vec<CatalogItem>>,
    filter: CatalogFilter,
}

impl CatalogListing {
    pub fn iter(&self) -> ListingIter<'_> {
        ListingIter {
            inner: self.items.iter(),
            filter: &self.filter,
        }
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn to_vec(&self) -> Vec<CatalogItem> {
        self.iter().cloned().collect()
    }
}

impl<'a> IntoIterator for &'a CatalogListing {
    type Item = &'a CatalogItem;
    type IntoIter = ListingIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct ListingIter<'a> {
    inner: slice::Iter<'a, CatalogItem>,
    filter: &'a CatalogFilter,
}

impl<'a> Iterator for ListingIter<'a> {
    type Item = &'a CatalogItem;

    fn next(&mut self) -> Option<Self::Item> {
        let filter = self.filter;
        self.inner.by_ref().find(|item| filter.matches(item))
    }
}
