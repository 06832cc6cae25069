//! Monetary amounts.
//!
//! Values are fixed-point decimals (`rust_decimal::Decimal`) and travel on the wire as
//! strings, so `"120.00"` keeps its scale through a decode/encode cycle.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ModelError, Result};

/// A sum of money in a given currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// Decimal value, e.g. `120.00`.
    pub value: Decimal,
    /// ISO 4217 currency code, e.g. `"RUB"`.
    pub currency: String,
}

impl Amount {
    /// Create an amount from an already-parsed decimal.
    #[must_use]
    pub fn new(value: Decimal, currency: impl Into<String>) -> Self {
        Self {
            value,
            currency: currency.into(),
        }
    }

    /// Parse an amount from its string form.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidAmount`] if `value` is not a decimal number and
    /// [`ModelError::InvalidCurrency`] if `currency` is not three ASCII letters.
    pub fn parse(value: &str, currency: &str) -> Result<Self> {
        let value =
            Decimal::from_str(value).map_err(|_| ModelError::InvalidAmount(value.to_string()))?;

        if currency.len() != 3 || !currency.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(ModelError::InvalidCurrency(currency.to_string()));
        }

        Ok(Self::new(value, currency.to_ascii_uppercase()))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}
