use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::order::Order;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CustomerId(pub String);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered customer and the orders it exclusively owns, in creation
/// order. Order ids are assigned by the registry before `add_order`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    email: String,
    orders: Vec<Order>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
}

impl Customer {
    pub fn new(id: CustomerId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { id, name: name.into(), email: email.into(), orders: Vec::new() }
    }

    pub fn add_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// The same list backs both "view orders" and "view order history".
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn orders_mut(&mut self) -> &mut [Order] {
        &mut self.orders
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Direct mutator, no validation.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn profile(&self) -> CustomerProfile {
        CustomerProfile { id: self.id.clone(), name: self.name.clone(), email: self.email.clone() }
    }
}
