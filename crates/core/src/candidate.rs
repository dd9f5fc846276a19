//! Inputs that may or may not be of the kind an operation accepts.

/// A value handed to an operation that only accepts `T`.
///
/// Operations such as registry admission or cart insertion answer with a
/// rejection (not an error) when given something they do not recognize.
/// `Unrecognized` carries a description of what was offered, for logging.
#[derive(Debug, Clone, PartialEq)]
pub enum Candidate<T> {
    Recognized(T),
    Unrecognized(String),
}

impl<T> Candidate<T> {
    pub fn unrecognized(description: impl Into<String>) -> Self {
        Self::Unrecognized(description.into())
    }

    pub fn is_recognized(&self) -> bool {
        matches!(self, Candidate::Recognized(_))
    }

    pub fn as_recognized(&self) -> Option<&T> {
        match self {
            Candidate::Recognized(value) => Some(value),
            Candidate::Unrecognized(_) => None,
        }
    }

    pub fn into_recognized(self) -> Result<T, String> {
        match self {
            Candidate::Recognized(value) => Ok(value),
            Candidate::Unrecognized(description) => Err(description),
        }
    }
}

impl<T> From<T> for Candidate<T> {
    fn from(value: T) -> Self {
        Candidate::Recognized(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_value_is_recognized() {
        let c: Candidate<u32> = 7.into();
        assert!(c.is_recognized());
        assert_eq!(c.as_recognized(), Some(&7));
        assert_eq!(c.into_recognized(), Ok(7));
    }

    #[test]
    fn unrecognized_keeps_its_description() {
        let c: Candidate<u32> = Candidate::unrecognized("a string");
        assert!(!c.is_recognized());
        assert_eq!(c.as_recognized(), None);
        assert_eq!(c.into_recognized(), Err("a string".to_string()));
    }
}
