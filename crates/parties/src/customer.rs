use chrono::{DateTime, Utc};
use serde::Serialize;

use tessera_core::{validate, Clock, DomainResult, Entity};

/// A shop customer: fixed id, email and creation time; editable profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    customer_id: String,
    email: String,
    name: Option<String>,
    phone_number: Option<String>,
    preferred_language: Option<String>,
    account_creation_date: DateTime<Utc>,
}

/// What a customer shows to other users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicProfile {
    pub name: Option<String>,
    pub preferred_language: Option<String>,
}

impl core::fmt::Display for PublicProfile {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Customer: {}, Language: {}",
            self.name.as_deref().unwrap_or("-"),
            self.preferred_language.as_deref().unwrap_or("-")
        )
    }
}

impl Customer {
    /// Register a customer. The id and email are required; a name may be
    /// supplied later, but if given it must not be blank.
    pub fn new(
        customer_id: impl Into<String>,
        email: impl Into<String>,
        name: Option<String>,
        clock: &dyn Clock,
    ) -> DomainResult<Self> {
        let customer_id = customer_id.into();
        let email = email.into();
        validate::non_blank("customer_id", &customer_id)?;
        validate::non_blank("email", &email)?;
        if let Some(name) = &name {
            validate::non_blank("name", name)?;
        }

        Ok(Self {
            customer_id,
            email,
            name,
            phone_number: None,
            preferred_language: None,
            account_creation_date: clock.now(),
        })
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Rename the customer. A blank name is refused and the old one kept.
    pub fn set_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        validate::non_blank("name", &name)?;
        self.name = Some(name);
        Ok(())
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn set_phone_number(&mut self, phone_number: Option<String>) {
        self.phone_number = phone_number;
    }

    pub fn preferred_language(&self) -> Option<&str> {
        self.preferred_language.as_deref()
    }

    pub fn set_preferred_language(&mut self, language: Option<String>) {
        self.preferred_language = language;
    }

    pub fn account_creation_date(&self) -> DateTime<Utc> {
        self.account_creation_date
    }

    pub fn public_profile(&self) -> PublicProfile {
        PublicProfile {
            name: self.name.clone(),
            preferred_language: self.preferred_language.clone(),
        }
    }
}

impl Entity for Customer {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.customer_id
    }
}
