//! Refunds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Amount, Receipt};

/// Refund status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundStatus {
    /// Being processed.
    Pending,
    /// Completed.
    Succeeded,
    /// Rejected.
    Canceled,
}

/// Part of a refund taken from a specific store (marketplaces).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Store ID the money is taken from.
    pub account_id: String,
    /// Amount taken from that store.
    pub amount: Amount,
}

/// Request to refund a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefundRequest {
    /// Payment to refund.
    pub payment_id: String,
    /// Amount to refund.
    pub amount: Amount,
    /// Reason shown to the payer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Refund receipt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<Receipt>,
    /// Split between stores.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Source>,
}

impl RefundRequest {
    /// Refund `amount` of the payment `payment_id`.
    #[must_use]
    pub fn new(payment_id: impl Into<String>, amount: Amount) -> Self {
        Self {
            payment_id: payment_id.into(),
            amount,
            description: None,
            receipt: None,
            sources: Vec::new(),
        }
    }
}

/// A refund object as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refund {
    /// Refund ID.
    pub id: String,
    /// Refunded payment.
    pub payment_id: String,
    /// Status.
    pub status: RefundStatus,
    /// When the refund was created.
    pub created_at: DateTime<Utc>,
    /// Refunded amount.
    pub amount: Amount,
    /// Reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Receipt registration status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_registration: Option<String>,
    /// Split between stores.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Source>,
}
