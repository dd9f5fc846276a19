//! Region-based sales tax.

use std::sync::LazyLock;

use serde::Serialize;

use tessera_core::RateTable;

/// Rate applied to regions without an entry.
pub const DEFAULT_TAX_RATE: f64 = 0.10;

static STANDARD: LazyLock<TaxTable> = LazyLock::new(|| {
    TaxTable::new(RateTable::new(
        [("US", 0.07), ("EU", 0.20), ("IN", 0.18)],
        DEFAULT_TAX_RATE,
    ))
});

/// Region code → tax rate, matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TaxTable(RateTable);

impl TaxTable {
    pub fn new(rates: RateTable) -> Self {
        Self(rates)
    }

    /// US 7%, EU 20%, IN 18%, everything else 10%.
    pub fn standard() -> &'static TaxTable {
        &STANDARD
    }

    pub fn rate_for<'a>(&self, region: impl Into<Option<&'a str>>) -> f64 {
        self.0.rate_for(region)
    }

    /// Tax owed on `amount` in `region`.
    pub fn tax_on<'a>(&self, amount: f64, region: impl Into<Option<&'a str>>) -> f64 {
        amount * self.rate_for(region)
    }
}
