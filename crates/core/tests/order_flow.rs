use rust_decimal::Decimal;

use storefront_core::{
    Customer, CustomerId, DomainError, OrderStatus, Product, ProductId, ShoppingSystem,
};

fn widget() -> Product {
    Product::new(ProductId("1".to_owned()), "Widget", Decimal::new(500, 2), 100)
}

#[test]
fn full_order_lifecycle_from_registration_to_completion() {
    let mut system = ShoppingSystem::new();
    system.add_product(widget()).expect("valid product");
    system.add_customer(Customer::new(CustomerId("C1".to_owned()), "Alice", "a@x.com"));

    let c1 = CustomerId("C1".to_owned());
    let receipt = system
        .create_order(&c1, &[(ProductId("1".to_owned()), 3)])
        .expect("customer and product are registered");

    assert_eq!(receipt.total, Decimal::new(1500, 2));
    assert!(receipt.missing_products.is_empty());

    {
        let customer = system.customer_mut(&c1).expect("registered customer");
        let order = &mut customer.orders_mut()[0];
        assert_eq!(order.status(), OrderStatus::Pending);
        order.complete().expect("order has a line item");
    }

    let orders = system.customer_orders(&c1).expect("registered customer");
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].status(), OrderStatus::Completed);
    assert_eq!(orders[0].total(), Decimal::new(1500, 2));

    // History is the same view over the same orders.
    assert_eq!(system.order_history(&c1).expect("registered customer"), orders);
}

#[test]
fn viewing_orders_for_an_unregistered_customer_reports_not_found() {
    let system = ShoppingSystem::new();

    let error = system
        .customer_orders(&CustomerId("nobody".to_owned()))
        .expect_err("customer was never registered");

    assert_eq!(error, DomainError::CustomerNotFound { id: CustomerId("nobody".to_owned()) });
}

#[test]
fn order_details_serialize_for_the_presentation_layer() {
    let mut system = ShoppingSystem::new();
    system.add_product(widget()).expect("valid product");
    system.add_customer(Customer::new(CustomerId("C1".to_owned()), "Alice", "a@x.com"));
    let c1 = CustomerId("C1".to_owned());
    system.create_order(&c1, &[(ProductId("1".to_owned()), 2)]).expect("order created");

    let details = system.customer_orders(&c1).expect("registered customer")[0].details();
    let json = serde_json::to_value(&details).expect("details serialize");

    assert_eq!(json["id"], 1);
    assert_eq!(json["status"], "Pending");
    assert_eq!(json["line_items"].as_array().map(Vec::len), Some(1));
    assert_eq!(json["total"], "10.00");
}
