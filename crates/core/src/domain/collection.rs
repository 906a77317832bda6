use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::product::{Product, ProductId};

/// One (product, quantity) pair inside a collection. The product is a
/// snapshot of the catalog record taken when the line was added; `quantity`
/// is the quantity within this collection, distinct from the product's own
/// stock level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product: Product,
    pub quantity: u32,
}

impl LineItem {
    pub fn line_total(&self) -> Decimal {
        self.product.unit_price * Decimal::from(self.quantity)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddOutcome {
    Added,
    /// The product was already present; `quantity` is the new accumulated
    /// quantity for that line.
    Accumulated { quantity: u32 },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RemoveOutcome {
    Removed(LineItem),
    NotFound,
}

/// Insertion-ordered line items with at most one entry per product id.
/// Adding a product that is already present accumulates quantity instead of
/// appending a duplicate line.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductCollection {
    items: Vec<LineItem>,
}

impl ProductCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, product: Product, quantity: u32) -> AddOutcome {
        if let Some(item) = self.items.iter_mut().find(|item| item.product.id == product.id) {
            item.quantity += quantity;
            return AddOutcome::Accumulated { quantity: item.quantity };
        }

        self.items.push(LineItem { product, quantity });
        AddOutcome::Added
    }

    /// Removing an absent product id is a reported no-op, not an error.
    pub fn remove(&mut self, product_id: &ProductId) -> RemoveOutcome {
        match self.items.iter().position(|item| &item.product.id == product_id) {
            Some(index) => RemoveOutcome::Removed(self.items.remove(index)),
            None => RemoveOutcome::NotFound,
        }
    }

    pub fn total(&self) -> Decimal {
        self.items.iter().map(LineItem::line_total).sum()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
