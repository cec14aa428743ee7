use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CatalogItem, Category};

/// What a producer submits to list produce. Only `name`, `quantity_available`
/// and `price` are required; the display fields fall back to defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProduceDraft {
    pub name: String,
    pub quantity_available: Option<i64>,
    pub price: Option<Decimal>,
    pub farmer_name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
}

impl ProduceDraft {
    pub fn new(name: impl Into<String>, quantity_available: i64, price: Decimal) -> Self {
        Self {
            name: name.into(),
            quantity_available: Some(quantity_available),
            price: Some(price),
            ..Self::default()
        }
    }

    pub fn farmer_name(mut self, farmer_name: impl Into<String>) -> Self {
        self.farmer_name = Some(farmer_name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Listing criteria. Every field that is set must match.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFilter {
    pub category: Option<Category>,
    pub max_price: Option<Decimal>,
    pub search_text: Option<String>,
}

impl CatalogFilter {
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn max_price(mut self, max_price: Decimal) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    pub fn matches(&self, item: &CatalogItem) -> bool {
        if self.category.is_some_and(|c| c != item.category) {
            return false;
        }
        if self.max_price.is_some_and(|max| item.price > max) {
            return false;
        }
        match self.search_text.as_deref().filter(|s| !s.is_empty()) {
            Some(text) => {
                let needle = text.to_lowercase();
                item.name.to_lowercase().contains(&needle)
                    || item.farmer_name.to_lowercase().contains(&needle)
            }
            None => true,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ProduceList {
    pub items: Vec<CatalogItem>,
}
