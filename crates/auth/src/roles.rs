use serde::Serialize;

use crate::staff::{Administrator, Doctor, Nurse};

/// Who is asking. A closed set of recognized staff roles plus a catch-all.
///
/// `Other` stands for anything that is not a recognized staff member (a
/// visitor badge, a stray string, ...). Policies must treat it as denied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
    Doctor(Doctor),
    Nurse(Nurse),
    Administrator(Administrator),
    Other(String),
}

impl Actor {
    pub fn other(description: impl Into<String>) -> Self {
        Self::Other(description.into())
    }

    /// Short role tag for logs.
    pub fn role(&self) -> &'static str {
        match self {
            Actor::Doctor(_) => "doctor",
            Actor::Nurse(_) => "nurse",
            Actor::Administrator(_) => "administrator",
            Actor::Other(_) => "other",
        }
    }

    /// Identifier of the staff member, if this is one.
    pub fn staff_id(&self) -> Option<&str> {
        match self {
            Actor::Doctor(d) => Some(d.license_number()),
            Actor::Nurse(n) => Some(n.nurse_id()),
            Actor::Administrator(a) => Some(a.admin_id()),
            Actor::Other(_) => None,
        }
    }
}

impl From<Doctor> for Actor {
    fn from(value: Doctor) -> Self {
        Actor::Doctor(value)
    }
}

impl From<Nurse> for Actor {
    fn from(value: Nurse) -> Self {
        Actor::Nurse(value)
    }
}

impl From<Administrator> for Actor {
    fn from(value: Administrator) -> Self {
        Actor::Administrator(value)
    }
}

/// Breadth of access a recognized role carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    Full,
    Limited,
    Administrative,
}

impl core::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            AccessLevel::Full => "full",
            AccessLevel::Limited => "limited",
            AccessLevel::Administrative => "administrative",
        };
        f.write_str(s)
    }
}
