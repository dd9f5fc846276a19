//! Field-level validation helpers shared by entity constructors and mutators.

use chrono::NaiveDate;

use crate::error::{DomainError, DomainResult};

/// Require a string field to contain at least one non-whitespace character.
pub fn non_blank(field: &'static str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(field, format!("{field} cannot be blank")));
    }
    Ok(())
}

/// Require a numeric field to be zero or positive. NaN is rejected.
pub fn non_negative(field: &'static str, value: f64) -> DomainResult<()> {
    if !(value >= 0.0) {
        return Err(DomainError::validation(
            field,
            format!("{field} must be non-negative (got {value})"),
        ));
    }
    Ok(())
}

/// Require a date not to lie after `today`.
pub fn not_in_future(field: &'static str, date: NaiveDate, today: NaiveDate) -> DomainResult<()> {
    if date > today {
        return Err(DomainError::validation(
            field,
            format!("{field} {date} is in the future"),
        ));
    }
    Ok(())
}
