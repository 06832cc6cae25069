//! Store (shop account) settings.

use serde::{Deserialize, Serialize};

/// Settings of the store the OAuth token belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    /// Store ID.
    pub account_id: String,
    /// Whether the store is in test mode.
    pub test: bool,
    /// Whether receipts are sent to the tax service.
    pub fiscalization_enabled: bool,
    /// Payment method types enabled for the store.
    #[serde(default)]
    pub payment_methods: Vec<String>,
}

impl Store {
    /// Whether the store accepts the given payment method type (e.g. `"bank_card"`).
    #[must_use]
    pub fn supports(&self, method: &str) -> bool {
        self.payment_methods.iter().any(|m| m == method)
    }
}
