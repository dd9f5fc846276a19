use serde::Serialize;
use thiserror::Error;

use tessera_core::DomainError;

use crate::roles::{AccessLevel, Actor};

/// Outcome of a policy check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "decision", content = "level")]
pub enum AccessDecision {
    Allow(AccessLevel),
    Deny,
}

impl AccessDecision {
    pub fn is_allowed(self) -> bool {
        matches!(self, AccessDecision::Allow(_))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("unrecognized actor '{0}'")]
    UnrecognizedActor(String),
}

impl From<AuthzError> for DomainError {
    fn from(_: AuthzError) -> Self {
        DomainError::Unauthorized
    }
}

/// Decision function over (actor, resource).
///
/// Implementations must be total over [`Actor`] and must deny `Actor::Other`.
pub trait AccessPolicy<R: ?Sized> {
    fn decide(&self, actor: &Actor, resource: &R) -> AccessDecision;
}

/// Default hospital policy: every recognized staff role is allowed at its
/// own access level, anything else is denied.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaffAccessPolicy;

impl<R: ?Sized> AccessPolicy<R> for StaffAccessPolicy {
    fn decide(&self, actor: &Actor, _resource: &R) -> AccessDecision {
        match authorize(actor) {
            Ok(level) => AccessDecision::Allow(level),
            Err(_) => AccessDecision::Deny,
        }
    }
}

/// Resolve the access level of an actor.
///
/// - No IO
/// - No panics
/// - Unrecognized actors are denied
pub fn authorize(actor: &Actor) -> Result<AccessLevel, AuthzError> {
    let level = match actor {
        Actor::Doctor(_) => AccessLevel::Full,
        Actor::Nurse(_) => AccessLevel::Limited,
        Actor::Administrator(_) => AccessLevel::Administrative,
        Actor::Other(description) => {
            tracing::debug!(actor = %description, "denying unrecognized actor");
            return Err(AuthzError::UnrecognizedActor(description.clone()));
        }
    };
    Ok(level)
}
