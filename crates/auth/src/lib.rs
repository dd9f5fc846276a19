//! Staff identities and the access policy that gates them.
//!
//! This crate is intentionally decoupled from any registry or storage: it
//! only answers "may this actor act on this resource?".

pub mod authorize;
pub mod roles;
pub mod staff;

pub use authorize::{authorize, AccessDecision, AccessPolicy, AuthzError, StaffAccessPolicy};
pub use roles::{AccessLevel, Actor};
pub use staff::{Administrator, Doctor, Nurse};
