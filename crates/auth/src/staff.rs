//! Medical staff identities.
//!
//! Collections handed to a constructor are copied in, and accessors hand out
//! fresh copies, so no caller ever shares a container with a staff record.

use std::collections::BTreeSet;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Doctor {
    license_number: String,
    specialty: String,
    certifications: BTreeSet<String>,
}

impl Doctor {
    pub fn new<S: Into<String>>(
        license_number: impl Into<String>,
        specialty: impl Into<String>,
        certifications: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            license_number: license_number.into(),
            specialty: specialty.into(),
            certifications: certifications.into_iter().map(Into::into).collect(),
        }
    }

    pub fn license_number(&self) -> &str {
        &self.license_number
    }

    pub fn specialty(&self) -> &str {
        &self.specialty
    }

    pub fn certifications(&self) -> BTreeSet<String> {
        self.certifications.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Nurse {
    nurse_id: String,
    shift: String,
    qualifications: Vec<String>,
}

impl Nurse {
    pub fn new<S: Into<String>>(
        nurse_id: impl Into<String>,
        shift: impl Into<String>,
        qualifications: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            nurse_id: nurse_id.into(),
            shift: shift.into(),
            qualifications: qualifications.into_iter().map(Into::into).collect(),
        }
    }

    pub fn nurse_id(&self) -> &str {
        &self.nurse_id
    }

    pub fn shift(&self) -> &str {
        &self.shift
    }

    pub fn qualifications(&self) -> Vec<String> {
        self.qualifications.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Administrator {
    admin_id: String,
    access_permissions: Vec<String>,
}

impl Administrator {
    pub fn new<S: Into<String>>(
        admin_id: impl Into<String>,
        access_permissions: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            admin_id: admin_id.into(),
            access_permissions: access_permissions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn admin_id(&self) -> &str {
        &self.admin_id
    }

    pub fn access_permissions(&self) -> Vec<String> {
        self.access_permissions.clone()
    }
}
