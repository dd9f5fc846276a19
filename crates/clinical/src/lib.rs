//! Clinical domain module (medical records, patients, admissions).
//!
//! This crate contains business rules for the hospital side, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage).

pub mod medical_record;
pub mod patient;
pub mod registry;

pub use medical_record::{MedicalRecord, NewMedicalRecord};
pub use patient::{Patient, PatientAdmission, PublicSummary};
pub use registry::{PatientRegistry, HOSPITAL_RULES, PRIVACY_POLICY};
