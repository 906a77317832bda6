pub mod domain;
pub mod errors;
pub mod system;

pub use domain::collection::{AddOutcome, LineItem, ProductCollection, RemoveOutcome};
pub use domain::customer::{Customer, CustomerId, CustomerProfile};
pub use domain::order::{Order, OrderDetails, OrderId, OrderStatus};
pub use domain::product::{Product, ProductId};
pub use errors::DomainError;
pub use system::{OrderReceipt, ShoppingSystem};
