use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A catalog record. `quantity` is the stock level held by the catalog, not
/// the quantity inside any order; it is mutable only through `set_quantity`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub unit_price: Decimal,
    quantity: u32,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        unit_price: Decimal,
        quantity: u32,
    ) -> Self {
        Self { id, name: name.into(), unit_price, quantity }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product ID: {}, Name: {}, Price: {}, Quantity: {}",
            self.id, self.name, self.unit_price, self.quantity
        )
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{Product, ProductId};

    #[test]
    fn stock_level_is_updated_through_setter() {
        let mut product =
            Product::new(ProductId("P1".to_owned()), "Widget", Decimal::new(500, 2), 100);
        product.set_quantity(75);
        assert_eq!(product.quantity(), 75);
    }

    #[test]
    fn display_includes_all_fields() {
        let product =
            Product::new(ProductId("P1".to_owned()), "Widget", Decimal::new(500, 2), 100);
        assert_eq!(
            product.to_string(),
            "Product ID: P1, Name: Widget, Price: 5.00, Quantity: 100"
        );
    }
}
