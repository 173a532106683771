//! Display-formatted prices.
//!
//! Prices are kept exactly as they are shown (e.g. `"$14.90"`). No arithmetic
//! is ever performed on them; the numeric amount is only read back out when
//! a table is sorted by price.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Currency symbol prepended to entered prices.
pub const CURRENCY_SYMBOL: &str = "$";

/// A price as shown in the tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayPrice(String);

impl DisplayPrice {
    /// Wrap an already formatted price string.
    #[must_use]
    pub fn new(display: impl Into<String>) -> Self {
        Self(display.into())
    }

    /// Build a price from a raw form entry such as `"19.99"`.
    ///
    /// The entry is not validated: whatever was typed is shown after the
    /// currency symbol.
    #[must_use]
    pub fn from_entry(entry: &str) -> Self {
        Self(format!("{CURRENCY_SYMBOL}{entry}"))
    }

    /// The display string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Read the numeric amount out of the display string.
    ///
    /// Returns `None` when the string does not hold a readable amount.
    #[must_use]
    pub fn amount(&self) -> Option<Decimal> {
        let digits: String = self
            .0
            .trim()
            .trim_start_matches(CURRENCY_SYMBOL)
            .chars()
            .filter(|c| *c != ',')
            .collect();
        Decimal::from_str(digits.trim()).ok()
    }
}

impl fmt::Display for DisplayPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DisplayPrice {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
