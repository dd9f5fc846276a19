//! Sales domain module (carts, shipping, orders, payments).
//!
//! This crate contains business rules for selling catalog products,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod cart;
pub mod catalog;
pub mod order;
pub mod payment;
pub mod shipping;

pub use cart::{AddedLine, ShoppingCart};
pub use catalog::ProductCatalog;
pub use order::{process_order, Order};
pub use payment::PaymentProcessor;
pub use shipping::ShippingCalculator;
