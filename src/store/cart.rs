use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult, ValidationError},
    models::{CartLine, CatalogItem, ReceiptSummary},
    storage::Storage,
    store::PersistedList,
};

pub struct CartStore {
    lines: PersistedList<CartLine>,
}

impl CartStore {
    pub fn open(storage: Arc<dyn Storage>, key: &str) -> AppResult<Self> {
        Ok(Self {
            lines: PersistedList::load(storage, key)?,
        })
    }

    /// Appends a snapshot of `item` for `quantity` kg.
    ///
    /// The catalog item's available quantity is only used as an upper bound;
    /// it is not decremented.
    pub fn add_line(&self, item: &CatalogItem, quantity: i64) -> AppResult<Uuid> {
        if quantity <= 0 {
            return Err(ValidationError::single("quantity", "must be greater than 0").into());
        }
        let quantity_requested = match u32::try_from(quantity) {
            Ok(q) if q <= item.quantity_available => q,
            _ => {
                return Err(ValidationError::single(
                    "quantity",
                    format!(
                        "exceeds the {}kg available for {}",
                        item.quantity_available, item.name
                    ),
                )
                .into());
            }
        };

        let line = CartLine {
            id: Uuid::new_v4(),
            name: item.name.clone(),
            farmer: item.farmer_name.clone(),
            price: item.price,
            quantity_requested,
            line_total: item.price * Decimal::from(quantity_requested),
        };
        let line_id = line.id;
        let line_total = line.line_total;

        self.lines.update(move |lines| {
            lines.push(line);
            Ok(Some(()))
        })?;

        tracing::debug!(%line_id, item_id = %item.id, quantity, %line_total, "cart line added");
        Ok(line_id)
    }

    /// Removing an unknown id is a no-op. Returns whether a line was removed.
    pub fn remove_line(&self, id: Uuid) -> AppResult<bool> {
        let removed = self.lines.update(|lines| {
            Ok(lines
                .iter()
                .position(|line| line.id == id)
                .map(|idx| lines.remove(idx)))
        })?;

        if removed.is_some() {
            tracing::debug!(%id, "cart line removed");
        }
        Ok(removed.is_some())
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.lines.snapshot(),
        }
    }

    pub fn lines(&self) -> Vec<CartLine> {
        self.snapshot().lines().to_vec()
    }

    pub fn total(&self) -> Decimal {
        self.snapshot().total()
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Captures the receipt and empties the cart in one step. Fails with
    /// [`AppError::EmptyCart`] without touching storage when there is nothing
    /// to check out.
    pub fn checkout(&self) -> AppResult<ReceiptSummary> {
        let receipt = self.lines.update(|lines| {
            if lines.is_empty() {
                return Err(AppError::EmptyCart);
            }
            let receipt = ReceiptSummary {
                total_amount: sum_line_totals(lines),
                line_count: lines.len(),
                placed_at: Utc::now(),
            };
            lines.clear();
            Ok(Some(receipt))
        })?;

        let receipt = receipt.ok_or(AppError::EmptyCart)?;
        tracing::debug!(
            total = %receipt.total_amount,
            lines = receipt.line_count,
            "cart checked out"
        );
        Ok(receipt)
    }
}

/// The cart as it stood at one instant.
#[derive(Debug, Clone)]
pub struct CartSnapshot {
    lines: Arc<Vec<CartLine>>,
}

impl CartSnapshot {
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn total(&self) -> Decimal {
        sum_line_totals(&self.lines)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn sum_line_totals(lines: &[CartLine]) -> Decimal {
    lines.iter().map(|line| line.line_total).sum()
}
