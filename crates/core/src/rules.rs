//! Rule tables: deterministic lookups that turn a discrete key into a number.
//!
//! Two shapes are supported:
//!
//! - [`RateTable`]: region code → rate, with an explicit default for unmapped
//!   (or absent) keys. Keys are matched case-insensitively.
//! - [`StepDiscount`]: a step function over an accumulated quantity.

use std::collections::BTreeMap;

use serde::Serialize;

/// Immutable key → rate mapping with a default.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateTable {
    rates: BTreeMap<String, f64>,
    default_rate: f64,
}

impl RateTable {
    /// Build a table from `(key, rate)` pairs.
    ///
    /// Keys are trimmed and folded to upper case before storage, so pairs
    /// whose keys differ only by case or padding name the same entry; the
    /// last such pair wins.
    pub fn new<K>(rates: impl IntoIterator<Item = (K, f64)>, default_rate: f64) -> Self
    where
        K: AsRef<str>,
    {
        let rates = rates
            .into_iter()
            .map(|(key, rate)| (normalize(key.as_ref()), rate))
            .collect();
        Self {
            rates,
            default_rate,
        }
    }

    /// Rate for `key`; the default when the key is unmapped, empty or absent.
    pub fn rate_for<'a>(&self, key: impl Into<Option<&'a str>>) -> f64 {
        key.into()
            .and_then(|k| self.rates.get(&normalize(k)))
            .copied()
            .unwrap_or(self.default_rate)
    }

    /// Whether `key` has an explicit entry.
    pub fn contains(&self, key: &str) -> bool {
        self.rates.contains_key(&normalize(key))
    }

    pub fn default_rate(&self) -> f64 {
        self.default_rate
    }

    /// Copy of the explicit entries, keyed by normalized (upper-case) code.
    pub fn entries(&self) -> BTreeMap<String, f64> {
        self.rates.clone()
    }
}

fn normalize(key: &str) -> String {
    key.trim().to_uppercase()
}

/// Flat amount granted once an accumulated quantity reaches a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepDiscount {
    pub threshold: i64,
    pub amount: f64,
}

impl StepDiscount {
    /// The bulk discount: 20.0 off once five or more units are held.
    pub const BULK: StepDiscount = StepDiscount {
        threshold: 5,
        amount: 20.0,
    };

    pub const fn new(threshold: i64, amount: f64) -> Self {
        Self { threshold, amount }
    }

    pub fn amount_for(&self, accumulated_quantity: i64) -> f64 {
        if accumulated_quantity >= self.threshold {
            self.amount
        } else {
            0.0
        }
    }
}

impl Default for StepDiscount {
    fn default() -> Self {
        Self::BULK
    }
}
