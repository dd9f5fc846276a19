//! Domain building blocks shared by every tessera crate.
//!
//! This crate contains **pure domain** primitives shared by every bounded
//! context: the error model, entity/value-object traits, field validation,
//! rule tables, and the ports through which time and identifiers enter the
//! domain. No IO happens here.

pub mod candidate;
pub mod entity;
pub mod error;
pub mod ports;
pub mod rules;
pub mod validate;
pub mod value_object;

pub use candidate::Candidate;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use ports::{Clock, FixedClock, IdGenerator, SequentialIds, SystemClock, UuidIdGenerator};
pub use rules::{RateTable, StepDiscount};
pub use value_object::ValueObject;
