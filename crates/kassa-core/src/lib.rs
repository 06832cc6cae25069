//! Request and response records for the Yandex.Kassa payment API (v3).
//!
//! This crate holds the passive data types exchanged with the API:
//!
//! - **Money**: `Amount` (fixed-point `Decimal` plus currency code)
//! - **Payments**: `PaymentRequest`, `CaptureRequest`, `Payment`, `PaymentStatus`
//! - **Payment methods**: `PaymentMethodData` (request sum type), `PaymentMethod` (response)
//! - **Receipts**: `Receipt`, `ReceiptRequest`, `Item`, `Settlement`
//! - **Refunds**: `RefundRequest`, `Refund`
//! - **Store / webhooks**: `Store`, `WebhookRequest`, `Webhook`, `WebhookList`
//! - **Idempotence**: `IdempotenceKey`
//!
//! # Money
//!
//! Amounts are never binary floats. `Decimal` values are serialized as strings, so
//! `"120.00"` survives a decode/encode cycle unchanged.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod amount;
pub mod error;
pub mod ids;
pub mod payment;
pub mod payment_method;
pub mod receipt;
pub mod refund;
pub mod store;
pub mod webhook;

pub use amount::Amount;
pub use error::{ModelError, Result};
pub use ids::IdempotenceKey;
pub use payment::{
    Airline, AuthorizationDetails, CancellationDetails, CaptureRequest, Confirmation,
    ConfirmationType, Leg, Metadata, Passenger, Payment, PaymentRequest, PaymentStatus,
    Recipient, Transfer,
};
pub use payment_method::{
    Card, CardDetails, PayerBankDetails, PaymentMethod, PaymentMethodData, PaymentMethodType,
    VatData,
};
pub use receipt::{
    Customer, Item, Receipt, ReceiptRequest, ReceiptStatus, ReceiptType, Settlement,
    SettlementType, Supplier,
};
pub use refund::{Refund, RefundRequest, RefundStatus, Source};
pub use store::Store;
pub use webhook::{Webhook, WebhookEvent, WebhookList, WebhookRequest};

pub use rust_decimal::Decimal;
