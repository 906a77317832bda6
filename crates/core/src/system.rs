use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::collection::ProductCollection;
use crate::domain::customer::{Customer, CustomerId};
use crate::domain::order::{Order, OrderId};
use crate::domain::product::{Product, ProductId};
use crate::errors::DomainError;

/// Structured result of `create_order`, for the presentation layer to
/// render. `missing_products` lists requested ids that were absent from the
/// catalog and therefore skipped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub customer_id: CustomerId,
    pub order_id: OrderId,
    pub total: Decimal,
    pub missing_products: Vec<ProductId>,
}

/// Canonical registries for products and customers, and the only place
/// orders are created. Registry inserts overwrite on duplicate id; the
/// accumulate-on-duplicate policy exists only inside `ProductCollection`.
#[derive(Debug, Default)]
pub struct ShoppingSystem {
    products: BTreeMap<ProductId, Product>,
    customers: BTreeMap<CustomerId, Customer>,
}

impl ShoppingSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a product, replacing any existing catalog entry with the
    /// same id. The one validation the boundary performs is rejecting a
    /// negative unit price; stock quantity is unsigned by construction.
    pub fn add_product(&mut self, product: Product) -> Result<(), DomainError> {
        if product.unit_price < Decimal::ZERO {
            return Err(DomainError::Validation(format!(
                "product {} has negative unit price {}",
                product.id, product.unit_price
            )));
        }

        info!(product_id = %product.id, name = %product.name, "product registered");
        self.products.insert(product.id.clone(), product);
        Ok(())
    }

    pub fn add_customer(&mut self, customer: Customer) {
        info!(customer_id = %customer.id, name = %customer.name, "customer registered");
        self.customers.insert(customer.id.clone(), customer);
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn product_mut(&mut self, id: &ProductId) -> Option<&mut Product> {
        self.products.get_mut(id)
    }

    pub fn customer(&self, id: &CustomerId) -> Option<&Customer> {
        self.customers.get(id)
    }

    pub fn customer_mut(&mut self, id: &CustomerId) -> Option<&mut Customer> {
        self.customers.get_mut(id)
    }

    /// Builds an order for `customer_id` from the requested line items.
    /// Unknown product ids are skipped and reported in the receipt rather
    /// than failing the order, so the order may end up with fewer lines than
    /// requested, or none at all. The order id is the customer's current
    /// order count plus one; ids are unique per customer, not system-wide.
    pub fn create_order(
        &mut self,
        customer_id: &CustomerId,
        requested: &[(ProductId, u32)],
    ) -> Result<OrderReceipt, DomainError> {
        if !self.customers.contains_key(customer_id) {
            return Err(DomainError::CustomerNotFound { id: customer_id.clone() });
        }

        let mut items = ProductCollection::new();
        let mut missing_products = Vec::new();
        for (product_id, quantity) in requested {
            match self.products.get(product_id) {
                Some(product) => {
                    items.add(product.clone(), *quantity);
                }
                None => {
                    warn!(product_id = %product_id, "requested product not in catalog, skipping line");
                    missing_products.push(product_id.clone());
                }
            }
        }

        let customer = self
            .customers
            .get_mut(customer_id)
            .ok_or_else(|| DomainError::CustomerNotFound { id: customer_id.clone() })?;
        let order_id = OrderId(customer.orders().len() as u32 + 1);
        let order = Order::new(order_id, items);
        let total = order.total();

        info!(
            customer_id = %customer_id,
            order_id = %order_id,
            total = %total,
            skipped = missing_products.len(),
            "order created"
        );
        customer.add_order(order);

        Ok(OrderReceipt {
            customer_id: customer_id.clone(),
            order_id,
            total,
            missing_products,
        })
    }

    pub fn customer_orders(&self, customer_id: &CustomerId) -> Result<&[Order], DomainError> {
        self.customers
            .get(customer_id)
            .map(Customer::orders)
            .ok_or_else(|| DomainError::CustomerNotFound { id: customer_id.clone() })
    }

    /// Alias of `customer_orders`: the original interface exposes "view
    /// orders" and "view order history" as separate operations over the same
    /// data.
    pub fn order_history(&self, customer_id: &CustomerId) -> Result<&[Order], DomainError> {
        self.customer_orders(customer_id)
    }
}
