/// Payment gateway handle.
#[derive(Clone)]
pub struct PaymentProcessor {
    processor_id: String,
    security_key: String,
}

impl PaymentProcessor {
    pub fn new(processor_id: impl Into<String>, security_key: impl Into<String>) -> Self {
        Self {
            processor_id: processor_id.into(),
            security_key: security_key.into(),
        }
    }

    pub fn processor_id(&self) -> &str {
        &self.processor_id
    }

    /// Accepts any strictly positive amount.
    pub fn process_payment(&self, amount: f64) -> bool {
        let accepted = amount > 0.0;
        tracing::info!(
            processor_id = %self.processor_id,
            amount,
            accepted,
            keyed = !self.security_key.is_empty(),
            "payment processed"
        );
        accepted
    }
}

impl core::fmt::Debug for PaymentProcessor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PaymentProcessor")
            .field("processor_id", &self.processor_id)
            .field("security_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_amounts_succeed() {
        let pp = PaymentProcessor::new("Pay1", "SEC123");
        assert!(pp.process_payment(860.0));
        assert!(pp.process_payment(0.01));
        assert_eq!(pp.processor_id(), "Pay1");
    }

    #[test]
    fn zero_negative_and_nan_fail() {
        let pp = PaymentProcessor::new("Pay1", "SEC123");
        assert!(!pp.process_payment(0.0));
        assert!(!pp.process_payment(-5.0));
        assert!(!pp.process_payment(f64::NAN));
    }

    #[test]
    fn debug_output_hides_the_key() {
        let pp = PaymentProcessor::new("Pay1", "SEC123");
        let debug = format!("{pp:?}");
        assert!(debug.contains("Pay1"));
        assert!(!debug.contains("SEC123"));
    }
}
