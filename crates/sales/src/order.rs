use chrono::{DateTime, Utc};
use serde::Serialize;

use tessera_core::{Candidate, Clock, Entity};
use tessera_parties::Customer;

/// A placed order, stamped with the time it was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    order_id: String,
    order_time: DateTime<Utc>,
}

impl Order {
    pub fn new(order_id: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            order_id: order_id.into(),
            order_time: clock.now(),
        }
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn order_time(&self) -> DateTime<Utc> {
        self.order_time
    }
}

impl Entity for Order {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.order_id
    }
}

/// Whether an order can be processed for a customer: both must be of the
/// expected kind. No access policy is consulted and nothing is recorded.
pub fn process_order(order: &Candidate<Order>, customer: &Candidate<Customer>) -> bool {
    order.is_recognized() && customer.is_recognized()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tessera_core::FixedClock;

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap())
    }

    fn customer() -> Customer {
        Customer::new("C1", "user@email.com", Some("Alice".into()), &clock()).unwrap()
    }

    #[test]
    fn order_time_comes_from_clock() {
        let order = Order::new("O1", &clock());
        assert_eq!(order.order_id(), "O1");
        assert_eq!(order.order_time(), clock().now());
    }

    #[test]
    fn order_and_customer_are_processable() {
        let order = Candidate::from(Order::new("O1", &clock()));
        assert!(process_order(&order, &Candidate::from(customer())));
    }

    #[test]
    fn anything_else_is_not() {
        let order: Candidate<Order> = Order::new("O1", &clock()).into();
        assert!(!process_order(&Candidate::unrecognized("receipt"), &Candidate::from(customer())));
        assert!(!process_order(&order, &Candidate::unrecognized("guest")));
        assert!(!process_order(
            &Candidate::unrecognized("receipt"),
            &Candidate::unrecognized("guest")
        ));
    }
}
