use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{dto::catalog::CatalogFilter, models::Category};

#[derive(Debug, Default, Deserialize)]
pub struct Pagination {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl Pagination {
    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        let offset = page.saturating_sub(1).saturating_mul(per_page);
        (page, per_page, offset)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ProduceQuery {
    #[serde(flatten)]
    pub pagination: Pagination,
    pub q: Option<String>,
    pub category: Option<Category>,
    pub max_price: Option<Decimal>,
}

impl ProduceQuery {
    pub fn filter(&self) -> CatalogFilter {
        CatalogFilter {
            category: self.category,
            max_price: self.max_price,
            search_text: self.q.clone().filter(|s| !s.is_empty()),
        }
    }
}
