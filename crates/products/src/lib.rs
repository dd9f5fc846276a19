//! Products domain module (catalog entries and their tax rules).
//!
//! This crate contains business rules for products, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod product;
pub mod tax;

pub use product::{NewProduct, Product};
pub use tax::TaxTable;
