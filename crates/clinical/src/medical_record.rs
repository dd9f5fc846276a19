use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use serde::Serialize;

use tessera_core::{validate, Clock, DomainResult, Entity, ValueObject};

/// Input for [`MedicalRecord::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMedicalRecord {
    pub record_id: String,
    pub patient_dna: String,
    pub allergies: Vec<String>,
    pub medical_history: Vec<String>,
    pub birth_date: NaiveDate,
    pub blood_type: String,
}

/// Immutable medical record.
///
/// Validated once at construction. Equality and hashing consider only the
/// record id and the DNA sequence.
#[derive(Debug, Clone, Serialize)]
pub struct MedicalRecord {
    record_id: String,
    patient_dna: String,
    allergies: Vec<String>,
    medical_history: Vec<String>,
    birth_date: NaiveDate,
    blood_type: String,
}

impl MedicalRecord {
    /// Validate and build a record. `clock` decides what "the future" is for
    /// the birth date check.
    pub fn new(new: NewMedicalRecord, clock: &dyn Clock) -> DomainResult<Self> {
        validate::non_blank("record_id", &new.record_id)?;
        validate::non_blank("patient_dna", &new.patient_dna)?;
        validate::not_in_future("birth_date", new.birth_date, clock.today())?;
        validate::non_blank("blood_type", &new.blood_type)?;

        Ok(Self {
            record_id: new.record_id,
            patient_dna: new.patient_dna,
            allergies: new.allergies,
            medical_history: new.medical_history,
            birth_date: new.birth_date,
            blood_type: new.blood_type,
        })
    }

    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    pub fn patient_dna(&self) -> &str {
        &self.patient_dna
    }

    pub fn allergies(&self) -> Vec<String> {
        self.allergies.clone()
    }

    pub fn medical_history(&self) -> Vec<String> {
        self.medical_history.clone()
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn blood_type(&self) -> &str {
        &self.blood_type
    }

    /// Case-insensitive membership test over the allergy list.
    pub fn is_allergic_to(&self, substance: &str) -> bool {
        let substance = substance.to_lowercase();
        self.allergies
            .iter()
            .any(|allergy| allergy.to_lowercase() == substance)
    }
}

impl PartialEq for MedicalRecord {
    fn eq(&self, other: &Self) -> bool {
        self.record_id == other.record_id && self.patient_dna == other.patient_dna
    }
}

impl Eq for MedicalRecord {}

impl Hash for MedicalRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.record_id.hash(state);
        self.patient_dna.hash(state);
    }
}

impl ValueObject for MedicalRecord {}

impl Entity for MedicalRecord {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.record_id
    }
}

impl core::fmt::Display for MedicalRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "MedicalRecord{{recordId='{}', bloodType='{}', birthDate={}, allergies={:?}, medicalHistory entries={}}}",
            self.record_id,
            self.blood_type,
            self.birth_date,
            self.allergies,
            self.medical_history.len()
        )
    }
}
