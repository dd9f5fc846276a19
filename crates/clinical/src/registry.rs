//! Patient registry gated by an access policy.
//!
//! The registry is a plain in-memory map with no internal locking; callers
//! sharing one instance across threads wrap it in a single `Mutex`.

use std::collections::HashMap;

use tessera_auth::{AccessDecision, AccessLevel, AccessPolicy, Actor, StaffAccessPolicy};
use tessera_core::{Candidate, DomainError, DomainResult, Entity};

use crate::patient::Patient;

pub const PRIVACY_POLICY: &str = "HIPAA-STRICT";
pub const HOSPITAL_RULES: &str = "Patients' data classified";

/// Admitted patients keyed by patient id.
#[derive(Debug)]
pub struct PatientRegistry<P = StaffAccessPolicy> {
    patients: HashMap<String, Patient>,
    policy: P,
}

impl PatientRegistry {
    pub fn new() -> Self {
        Self::with_policy(StaffAccessPolicy)
    }
}

impl Default for PatientRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> PatientRegistry<P>
where
    P: AccessPolicy<Patient>,
{
    pub fn with_policy(policy: P) -> Self {
        Self {
            patients: HashMap::new(),
            policy,
        }
    }

    /// Admit a patient on behalf of `actor`.
    ///
    /// Returns `false` (leaving the registry untouched) when the candidate is
    /// not a patient or the policy denies the actor. A patient whose id is
    /// already registered replaces the earlier entry.
    pub fn admit(&mut self, candidate: impl Into<Candidate<Patient>>, actor: &Actor) -> bool {
        match self.try_admit(candidate, actor) {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!(actor = actor.role(), reason = %err, "admission rejected");
                false
            }
        }
    }

    /// Like [`admit`](Self::admit), reporting why an admission was refused.
    pub fn try_admit(
        &mut self,
        candidate: impl Into<Candidate<Patient>>,
        actor: &Actor,
    ) -> DomainResult<AccessLevel> {
        let patient = candidate.into().into_recognized().map_err(|offered| {
            DomainError::rejected(format!("'{offered}' is not an admittable patient"))
        })?;

        let level = match self.policy.decide(actor, &patient) {
            AccessDecision::Allow(level) => level,
            AccessDecision::Deny => return Err(DomainError::Unauthorized),
        };

        let key = patient.id().clone();
        let replaced = self.patients.insert(key.clone(), patient).is_some();
        tracing::info!(
            patient_id = %key,
            actor = actor.role(),
            staff_id = actor.staff_id().unwrap_or("-"),
            access = %level,
            replaced,
            "patient admitted"
        );
        Ok(level)
    }

    pub fn get(&self, patient_id: &str) -> Option<&Patient> {
        self.patients.get(patient_id)
    }

    pub fn contains(&self, patient_id: &str) -> bool {
        self.patients.contains_key(patient_id)
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    /// Registered patient ids, sorted.
    pub fn patient_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.patients.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Emit one audit event per admitted patient and return the sorted ids.
    ///
    /// Audit events carry the identifying summary, so they go to the log sink
    /// only; callers get nothing more than the keys.
    pub fn audit(&self) -> Vec<String> {
        let ids = self.patient_ids();
        for id in &ids {
            if let Some(patient) = self.patients.get(id) {
                tracing::info!(
                    policy = PRIVACY_POLICY,
                    entry = %patient.internal_summary(),
                    "registry audit"
                );
            }
        }
        ids
    }
}
