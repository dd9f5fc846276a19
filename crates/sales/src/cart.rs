//! Shopping cart with an incrementally applied bulk discount.
//!
//! The discount is evaluated on every successful `add_item` against the
//! running unit count *after* that call, and subtracted from that call's line
//! total. Once the threshold is reached every further call is discounted
//! again; the total is never recomputed from scratch.

use std::sync::Arc;

use serde::Serialize;

use tessera_core::{Candidate, DomainError, DomainResult, StepDiscount};
use tessera_products::Product;

/// Charge booked by one successful `add_item` call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AddedLine {
    pub quantity: i64,
    pub gross: f64,
    pub discount: f64,
}

impl AddedLine {
    pub fn net(&self) -> f64 {
        self.gross - self.discount
    }
}

#[derive(Debug, Clone)]
pub struct ShoppingCart {
    cart_id: String,
    customer_id: String,
    items: Vec<Arc<Product>>,
    item_count: i64,
    total_amount: f64,
    discount: StepDiscount,
}

impl ShoppingCart {
    /// Empty cart using the standard bulk discount.
    pub fn new(cart_id: impl Into<String>, customer_id: impl Into<String>) -> Self {
        Self::with_discount(cart_id, customer_id, StepDiscount::BULK)
    }

    pub fn with_discount(
        cart_id: impl Into<String>,
        customer_id: impl Into<String>,
        discount: StepDiscount,
    ) -> Self {
        Self {
            cart_id: cart_id.into(),
            customer_id: customer_id.into(),
            items: Vec::new(),
            item_count: 0,
            total_amount: 0.0,
            discount,
        }
    }

    /// Add `quantity` units of a product.
    ///
    /// Returns `false` and leaves the cart untouched for anything that is not
    /// a product or for a non-positive quantity.
    pub fn add_item(&mut self, item: impl Into<Candidate<Arc<Product>>>, quantity: i64) -> bool {
        match self.try_add_item(item, quantity) {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!(cart_id = %self.cart_id, reason = %err, "item rejected");
                false
            }
        }
    }

    /// Like [`add_item`](Self::add_item), returning the charge that was booked.
    pub fn try_add_item(
        &mut self,
        item: impl Into<Candidate<Arc<Product>>>,
        quantity: i64,
    ) -> DomainResult<AddedLine> {
        let product = item
            .into()
            .into_recognized()
            .map_err(|offered| DomainError::rejected(format!("'{offered}' is not a product")))?;
        if quantity <= 0 {
            return Err(DomainError::rejected(format!(
                "quantity must be positive (got {quantity})"
            )));
        }
        let item_count = self
            .item_count
            .checked_add(quantity)
            .ok_or_else(|| DomainError::rejected("item count overflow"))?;
        let copies = usize::try_from(quantity)
            .map_err(|_| DomainError::rejected("quantity too large"))?;
        self.items
            .try_reserve(copies)
            .map_err(|_| DomainError::rejected(format!("quantity too large (got {quantity})")))?;

        let line = AddedLine {
            quantity,
            gross: product.base_price() * quantity as f64,
            discount: self.discount.amount_for(item_count),
        };

        self.items.extend(std::iter::repeat_n(product, copies));
        self.item_count = item_count;
        self.total_amount += line.net();

        tracing::debug!(summary = %self.summary(), discount = line.discount, "item added");
        Ok(line)
    }

    pub fn cart_id(&self) -> &str {
        &self.cart_id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    /// One entry per unit, in insertion order. The list is a copy; the
    /// products themselves are shared.
    pub fn items(&self) -> Vec<Arc<Product>> {
        self.items.clone()
    }

    pub fn item_count(&self) -> i64 {
        self.item_count
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    pub(crate) fn summary(&self) -> String {
        format!(
            "Cart{{{}, items={}, total={}}}",
            self.cart_id, self.item_count, self.total_amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn product(price: f64) -> Arc<Product> {
        Arc::new(Product::create_clothing("P2", "T-Shirt", price, 0.3).unwrap())
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = ShoppingCart::new("Cart1", "C1");
        assert_eq!(cart.cart_id(), "Cart1");
        assert_eq!(cart.customer_id(), "C1");
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total_amount(), 0.0);
        assert!(cart.items().is_empty());
    }

    #[test]
    fn below_threshold_no_discount() {
        let mut cart = ShoppingCart::new("Cart1", "C1");
        assert!(cart.add_item(product(20.0), 3));
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total_amount(), 60.0);
        assert_eq!(cart.items().len(), 3);
    }

    #[test]
    fn crossing_threshold_discounts_that_call_only() {
        let shirt = product(40.0);
        let mut cart = ShoppingCart::new("Cart1", "C1");

        let first = cart.try_add_item(Arc::clone(&shirt), 3).unwrap();
        assert_eq!(first.discount, 0.0);
        let second = cart.try_add_item(Arc::clone(&shirt), 2).unwrap();
        assert_eq!(second.discount, 20.0);

        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.total_amount(), 120.0 + 80.0 - 20.0);
    }

    #[test]
    fn bulk_and_split_additions_reach_same_total() {
        let shirt = product(40.0);

        let mut split = ShoppingCart::new("A", "C1");
        split.add_item(Arc::clone(&shirt), 3);
        split.add_item(Arc::clone(&shirt), 2);

        let mut bulk = ShoppingCart::new("B", "C1");
        let line = bulk.try_add_item(Arc::clone(&shirt), 5).unwrap();
        assert_eq!(line.discount, 20.0);

        assert_eq!(split.total_amount(), bulk.total_amount());
        assert_eq!(bulk.total_amount(), 180.0);
    }

    #[test]
    fn discount_repeats_on_every_call_past_threshold() {
        let shirt = product(10.0);
        let mut cart = ShoppingCart::new("Cart1", "C1");
        cart.add_item(Arc::clone(&shirt), 5);
        cart.add_item(Arc::clone(&shirt), 1);
        cart.add_item(Arc::clone(&shirt), 1);

        // 70 gross, discounted 20 on each of the three calls.
        assert_eq!(cart.total_amount(), 70.0 - 60.0);
        assert_eq!(cart.item_count(), 7);
    }

    #[test]
    fn one_at_a_time_differs_from_bulk() {
        let shirt = product(10.0);

        let mut singles = ShoppingCart::new("A", "C1");
        for _ in 0..6 {
            singles.add_item(Arc::clone(&shirt), 1);
        }
        let mut bulk = ShoppingCart::new("B", "C1");
        bulk.add_item(Arc::clone(&shirt), 6);

        assert_eq!(singles.total_amount(), 60.0 - 40.0);
        assert_eq!(bulk.total_amount(), 60.0 - 20.0);
    }

    #[test]
    fn rejects_non_products_and_non_positive_quantities() {
        let mut cart = ShoppingCart::new("Cart1", "C1");
        assert!(!cart.add_item(Candidate::<Arc<Product>>::unrecognized("gift card"), 1));
        assert!(!cart.add_item(product(20.0), 0));
        assert!(!cart.add_item(product(20.0), -3));

        let err = cart.try_add_item(product(20.0), 0).unwrap_err();
        assert!(matches!(err, DomainError::Rejected(_)));

        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total_amount(), 0.0);
        assert!(cart.items().is_empty());
    }

    #[test]
    fn unallocatable_quantity_is_rejected_without_changes() {
        let shirt = product(20.0);
        let mut empty = ShoppingCart::new("Cart0", "C1");
        assert!(!empty.add_item(Arc::clone(&shirt), i64::MAX));
        assert_eq!(empty.item_count(), 0);
        assert_eq!(empty.total_amount(), 0.0);
        assert!(empty.items().is_empty());

        let mut cart = ShoppingCart::new("Cart1", "C1");
        cart.add_item(Arc::clone(&shirt), 2);

        assert!(!cart.add_item(Arc::clone(&shirt), i64::MAX));
        let err = cart.try_add_item(Arc::clone(&shirt), i64::MAX - 2).unwrap_err();
        assert!(matches!(err, DomainError::Rejected(_)));

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total_amount(), 40.0);
        assert_eq!(cart.items().len(), 2);
    }

    #[test]
    fn items_list_is_a_copy() {
        let mut cart = ShoppingCart::new("Cart1", "C1");
        cart.add_item(product(20.0), 2);

        let mut items = cart.items();
        items.clear();
        assert_eq!(cart.items().len(), 2);
    }

    #[test]
    fn custom_discount_is_used() {
        let mut cart = ShoppingCart::with_discount("Cart1", "C1", StepDiscount::new(2, 5.0));
        cart.add_item(product(10.0), 2);
        assert_eq!(cart.total_amount(), 15.0);
    }

    #[test]
    fn summary_reports_count_and_total() {
        let mut cart = ShoppingCart::new("Cart1", "C1");
        cart.add_item(product(20.0), 3);
        assert_eq!(cart.summary(), "Cart{Cart1, items=3, total=60}");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the total equals the sum of each call's gross minus the
        /// discount due on the running count after that call.
        #[test]
        fn total_follows_running_count(quantities in prop::collection::vec(1i64..8, 1..12)) {
            let shirt = product(10.0);
            let mut cart = ShoppingCart::new("Cart1", "C1");

            let mut running = 0i64;
            let mut expected = 0.0f64;
            for q in &quantities {
                running += q;
                expected += 10.0 * *q as f64 - if running >= 5 { 20.0 } else { 0.0 };
                prop_assert!(cart.add_item(Arc::clone(&shirt), *q));
            }

            prop_assert_eq!(cart.item_count(), running);
            prop_assert_eq!(cart.items().len() as i64, running);
            prop_assert!((cart.total_amount() - expected).abs() < 1e-9);
        }
    }
}
