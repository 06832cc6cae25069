//! Yandex.Kassa Client SDK.
//!
//! This crate provides an async client for the Kassa payment API (v3): payments,
//! refunds, receipts, store info and webhooks.
//!
//! # Example
//!
//! ```no_run
//! use kassa_client::{Credentials, KassaClient};
//! use kassa_core::{Amount, Card, Confirmation, IdempotenceKey, PaymentRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = KassaClient::new(Credentials::shop("123456", "qwerty"))?;
//!
//! let request = PaymentRequest::new(Amount::parse("120.00", "EUR")?)
//!     .with_confirmation(Confirmation::redirect("https://www.merchant-website.com/return_url"))
//!     .with_bank_card(Card {
//!         number: "1234567812345678".into(),
//!         expiry_year: "2022".into(),
//!         expiry_month: "07".into(),
//!         csc: Some("123".into()),
//!         cardholder: Some("John Travola".into()),
//!     });
//!
//! let payment = client
//!     .create_payment(IdempotenceKey::generate(), &request)
//!     .await?;
//!
//! println!("Payment {} is {:?}", payment.id, payment.status);
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Every operation returns [`ClientError`]: `Transport` when no response arrived
//! (status 500), `Api` for non-200 responses, `Decode` for bodies of the wrong shape.
//! Nothing is retried; retry with the same [`IdempotenceKey`](kassa_core::IdempotenceKey)
//! to avoid duplicate effects.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod auth;
mod client;
mod config;
mod error;
pub mod form;
mod resources;
mod types;

pub use auth::{Auth, Credentials, ShopCredentials};
pub use client::{ApiRequest, KassaClient, IDEMPOTENCE_KEY_HEADER};
pub use config::{BodyEncoding, ClientOptions, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use error::{ClientError, TRANSPORT_ERROR_STATUS};
pub use types::ApiErrorResponse;

pub use reqwest::Method;
