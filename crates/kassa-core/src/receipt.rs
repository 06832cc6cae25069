//! Fiscal receipts (54-FZ).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Amount;

/// Buyer contact details printed on the receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Full name or organization name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Taxpayer identification number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inn: Option<String>,
    /// Email the receipt is sent to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone the receipt is sent to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Supplier of an item sold on an agent's behalf.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    /// Supplier name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Supplier phone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Supplier taxpayer identification number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inn: Option<String>,
}

/// A receipt line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Product or service name.
    pub description: String,
    /// Quantity; may be fractional.
    pub quantity: Decimal,
    /// Price per unit including VAT.
    pub amount: Amount,
    /// VAT code (1..=6).
    pub vat_code: u32,
    /// Payment subject attribute, e.g. `"commodity"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_subject: Option<String>,
    /// Payment mode attribute, e.g. `"full_payment"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_mode: Option<String>,
    /// Product code (hex string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
    /// Country of origin, ISO 3166-1 alpha-2.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_of_origin_code: Option<String>,
    /// Customs declaration number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customs_declaration_number: Option<String>,
    /// Excise amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excise: Option<String>,
    /// Supplier details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<Supplier>,
    /// Agent type, when selling on behalf of a supplier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_type: Option<String>,
}

impl Item {
    /// Create a line with the mandatory fields set.
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        quantity: Decimal,
        amount: Amount,
        vat_code: u32,
    ) -> Self {
        Self {
            description: description.into(),
            quantity,
            amount,
            vat_code,
            payment_subject: None,
            payment_mode: None,
            product_code: None,
            country_of_origin_code: None,
            customs_declaration_number: None,
            excise: None,
            supplier: None,
            agent_type: None,
        }
    }
}

/// How a part of the receipt total was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementType {
    /// Non-cash payment.
    Cashless,
    /// Prepayment.
    Prepayment,
    /// Postpayment (credit).
    Postpayment,
    /// Counter-provision.
    Consideration,
}

/// A settlement line of a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Settlement type.
    #[serde(rename = "type")]
    pub kind: SettlementType,
    /// Settled amount.
    pub amount: Amount,
}

/// Whether a receipt is issued for a payment or for a refund.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptType {
    /// Receipt for an incoming payment.
    Payment,
    /// Receipt for a refund.
    Refund,
}

/// Registration status of a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptStatus {
    /// Being registered.
    Pending,
    /// Registered.
    Succeeded,
    /// Registration failed.
    Canceled,
}

/// A receipt.
///
/// Embedded in payment and refund requests with only `items`, contact and tax fields set;
/// returned by the receipts API with the registration fields filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Receipt ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Receipt type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ReceiptType>,
    /// Payment the receipt belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    /// Refund the receipt belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_id: Option<String>,
    /// Registration status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ReceiptStatus>,
    /// Fiscal document number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiscal_document_number: Option<String>,
    /// Fiscal storage number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiscal_storage_number: Option<String>,
    /// Fiscal attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiscal_attribute: Option<String>,
    /// When the receipt was registered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<DateTime<Utc>>,
    /// Fiscal provider's receipt ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiscal_provider_id: Option<String>,
    /// Settlements.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub settlements: Vec<Settlement>,
    /// Buyer details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    /// Receipt lines.
    #[serde(default)]
    pub items: Vec<Item>,
    /// Tax system code (1..=6).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_system_code: Option<u32>,
    /// Buyer phone (legacy field, prefer `customer`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Buyer email (legacy field, prefer `customer`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Store ID on whose behalf the receipt is issued.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<String>,
}

/// Request to register a standalone receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptRequest {
    /// Receipt type.
    #[serde(rename = "type")]
    pub kind: ReceiptType,
    /// Payment the receipt belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    /// Refund the receipt belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_id: Option<String>,
    /// Buyer details.
    pub customer: Customer,
    /// Receipt lines.
    pub items: Vec<Item>,
    /// Tax system code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_system_code: Option<u32>,
    /// Whether to send the receipt to the buyer right away.
    pub send: bool,
    /// Settlements.
    pub settlements: Vec<Settlement>,
    /// Store ID on whose behalf the receipt is issued.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<String>,
}
