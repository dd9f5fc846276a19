use serde::Serialize;

use tessera_core::{validate, DomainResult, Entity, IdGenerator};

use crate::medical_record::MedicalRecord;

/// Placeholder contact for patients admitted without one.
pub const UNKNOWN_CONTACT: &str = "Unknown";
/// Insurance placeholder for emergency admissions.
pub const PENDING_INSURANCE: &str = "Pending";
/// Insurance placeholder for transfers from another facility.
pub const IMPORTED_INSURANCE: &str = "Imported";
pub const UNASSIGNED_PHYSICIAN: &str = "Unassigned";
/// Room number of a patient who has not been given a room yet.
pub const UNASSIGNED_ROOM: i32 = -1;

/// Input for a full admission with every field supplied by the caller.
#[derive(Debug, Clone)]
pub struct PatientAdmission {
    pub patient_id: String,
    pub medical_record: Option<MedicalRecord>,
    pub name: String,
    pub emergency_contact: Option<String>,
    pub insurance_info: Option<String>,
    pub room_number: i32,
    pub attending_physician: Option<String>,
}

/// A patient: fixed identity and medical record, re-validated mutable details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patient {
    patient_id: String,
    medical_record: Option<MedicalRecord>,
    name: String,
    emergency_contact: Option<String>,
    insurance_info: Option<String>,
    room_number: i32,
    attending_physician: Option<String>,
}

/// What anyone may see about a patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicSummary {
    pub name: String,
    pub room_number: i32,
}

impl core::fmt::Display for PublicSummary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Patient: {} (Room {})", self.name, self.room_number)
    }
}

/// Identifying summary. Only code inside this crate may build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct InternalSummary {
    pub(crate) patient_id: String,
    pub(crate) name: String,
    pub(crate) room_number: i32,
}

impl core::fmt::Display for InternalSummary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "PatientID={}, Name={}, Room={}",
            self.patient_id, self.name, self.room_number
        )
    }
}

impl Patient {
    /// Full admission. Every other admission mode ends up here.
    pub fn new(admission: PatientAdmission) -> DomainResult<Self> {
        validate::non_blank("patient_id", &admission.patient_id)?;
        validate::non_blank("name", &admission.name)?;

        Ok(Self {
            patient_id: admission.patient_id,
            medical_record: admission.medical_record,
            name: admission.name,
            emergency_contact: admission.emergency_contact,
            insurance_info: admission.insurance_info,
            room_number: admission.room_number,
            attending_physician: admission.attending_physician,
        })
    }

    /// Emergency admission: generated id, no record, placeholder details.
    pub fn emergency(name: impl Into<String>, ids: &dyn IdGenerator) -> DomainResult<Self> {
        Self::new(PatientAdmission {
            patient_id: ids.next_id(),
            medical_record: None,
            name: name.into(),
            emergency_contact: Some(UNKNOWN_CONTACT.to_string()),
            insurance_info: Some(PENDING_INSURANCE.to_string()),
            room_number: UNASSIGNED_ROOM,
            attending_physician: Some(UNASSIGNED_PHYSICIAN.to_string()),
        })
    }

    /// Transfer admission: generated id, existing record carried over.
    pub fn transfer(
        record: MedicalRecord,
        name: impl Into<String>,
        ids: &dyn IdGenerator,
    ) -> DomainResult<Self> {
        Self::new(PatientAdmission {
            patient_id: ids.next_id(),
            medical_record: Some(record),
            name: name.into(),
            emergency_contact: Some(UNKNOWN_CONTACT.to_string()),
            insurance_info: Some(IMPORTED_INSURANCE.to_string()),
            room_number: UNASSIGNED_ROOM,
            attending_physician: Some(UNASSIGNED_PHYSICIAN.to_string()),
        })
    }

    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    pub fn medical_record(&self) -> Option<&MedicalRecord> {
        self.medical_record.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the patient. A blank name is refused and the old one kept.
    pub fn set_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        validate::non_blank("name", &name)?;
        self.name = name;
        Ok(())
    }

    pub fn emergency_contact(&self) -> Option<&str> {
        self.emergency_contact.as_deref()
    }

    pub fn set_emergency_contact(&mut self, contact: Option<String>) {
        self.emergency_contact = contact;
    }

    pub fn insurance_info(&self) -> Option<&str> {
        self.insurance_info.as_deref()
    }

    pub fn set_insurance_info(&mut self, insurance: Option<String>) {
        self.insurance_info = insurance;
    }

    pub fn room_number(&self) -> i32 {
        self.room_number
    }

    pub fn set_room_number(&mut self, room: i32) {
        self.room_number = room;
    }

    pub fn attending_physician(&self) -> Option<&str> {
        self.attending_physician.as_deref()
    }

    pub fn set_attending_physician(&mut self, physician: Option<String>) {
        self.attending_physician = physician;
    }

    pub fn public_summary(&self) -> PublicSummary {
        PublicSummary {
            name: self.name.clone(),
            room_number: self.room_number,
        }
    }

    pub(crate) fn internal_summary(&self) -> InternalSummary {
        InternalSummary {
            patient_id: self.patient_id.clone(),
            name: self.name.clone(),
            room_number: self.room_number,
        }
    }
}

impl Entity for Patient {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.patient_id
    }
}
