//! Region-based shipping cost.

use tessera_core::RateTable;

/// Base charge for regions missing from the rate table.
pub const DEFAULT_SHIPPING_RATE: f64 = 10.0;
/// Surcharge per unit of weight.
pub const PER_WEIGHT_RATE: f64 = 0.5;

/// `cost = base rate for region (or fallback) + weight * per-weight rate`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShippingCalculator {
    rates: RateTable,
    per_weight: f64,
}

impl ShippingCalculator {
    /// Calculator over the caller's region rates with the standard fallback
    /// and weight surcharge. Region codes differing only by case share one
    /// entry, taking the later rate.
    pub fn new<K: AsRef<str>>(rates: impl IntoIterator<Item = (K, f64)>) -> Self {
        Self::with_fallback(rates, DEFAULT_SHIPPING_RATE, PER_WEIGHT_RATE)
    }

    pub fn with_fallback<K: AsRef<str>>(
        rates: impl IntoIterator<Item = (K, f64)>,
        fallback: f64,
        per_weight: f64,
    ) -> Self {
        Self {
            rates: RateTable::new(rates, fallback),
            per_weight,
        }
    }

    pub fn calculate_shipping<'a>(&self, region: impl Into<Option<&'a str>>, weight: f64) -> f64 {
        self.rates.rate_for(region) + weight * self.per_weight
    }
}
