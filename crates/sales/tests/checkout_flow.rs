//! Storefront flow across products, parties and sales.

use std::sync::Arc;

use anyhow::Result;
use chrono::{TimeZone, Utc};

use tessera_core::{Candidate, FixedClock};
use tessera_parties::Customer;
use tessera_products::Product;
use tessera_sales::{
    process_order, Order, PaymentProcessor, ProductCatalog, ShippingCalculator, ShoppingCart,
};

fn clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap())
}

#[test]
fn customer_checks_out_a_mixed_cart() -> Result<()> {
    tessera_observability::init();

    let laptop = Arc::new(Product::create_electronics("P1", "Laptop", 800.0, 2.5)?);
    let tshirt = Arc::new(Product::create_clothing("P2", "T-Shirt", 20.0, 0.3)?);

    let mut customer = Customer::new("C1", "user@email.com", Some("Alice".into()), &clock())?;
    customer.set_preferred_language(Some("English".to_string()));

    let mut cart = ShoppingCart::new("Cart1", customer.customer_id());
    assert!(cart.add_item(Arc::clone(&laptop), 1));
    assert!(cart.add_item(Arc::clone(&tshirt), 3));
    assert_eq!(cart.item_count(), 4);
    assert_eq!(cart.total_amount(), 860.0);

    assert!(cart.add_item(Arc::clone(&tshirt), 1));
    assert_eq!(cart.total_amount(), 860.0 + 20.0 - 20.0);

    let order = Order::new("O1", &clock());
    assert!(process_order(
        &Candidate::from(order),
        &Candidate::from(customer.clone())
    ));

    let payments = PaymentProcessor::new("Pay1", "SEC123");
    assert!(payments.process_payment(cart.total_amount()));

    let shipping = ShippingCalculator::new([("US", 15.0), ("IN", 10.0)]);
    assert_eq!(shipping.calculate_shipping("IN", laptop.weight()), 11.25);
    assert_eq!(shipping.calculate_shipping("FR", 0.0), 10.0);

    assert_eq!(laptop.calculate_tax("us"), 800.0 * 0.07);

    let mut catalog = ProductCatalog::new();
    catalog.add_product("P1", (*laptop).clone());
    assert_eq!(catalog.get_product("P1").map(|p| p.name()), Some("Laptop"));
    Ok(())
}

#[test]
fn split_and_bulk_carts_agree_at_the_threshold() -> Result<()> {
    let shirt = Arc::new(Product::create_clothing("P2", "T-Shirt", 40.0, 0.3)?);

    let mut split = ShoppingCart::new("A", "C1");
    let first = split.try_add_item(Arc::clone(&shirt), 3)?;
    let second = split.try_add_item(Arc::clone(&shirt), 2)?;
    assert_eq!((first.discount, second.discount), (0.0, 20.0));

    let mut bulk = ShoppingCart::new("B", "C1");
    bulk.add_item(Arc::clone(&shirt), 5);

    assert_eq!(split.total_amount(), 200.0 - 20.0);
    assert_eq!(split.total_amount(), bulk.total_amount());
    Ok(())
}

#[test]
fn unrecognized_inputs_are_refused_quietly() {
    let mut cart = ShoppingCart::new("Cart1", "C1");
    assert!(!cart.add_item(Candidate::<Arc<Product>>::unrecognized("voucher"), 2));
    assert_eq!(cart.item_count(), 0);

    let guest = Candidate::<Customer>::unrecognized("guest checkout");
    let order = Candidate::from(Order::new("O2", &clock()));
    assert!(!process_order(&order, &guest));
}
