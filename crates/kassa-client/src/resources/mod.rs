//! Resource operations.
//!
//! Each operation serializes its request record, dispatches it through
//! [`KassaClient::send`](crate::KassaClient::send) and decodes the matching response
//! record. Errors are passed through unchanged.

mod payments;
mod receipts;
mod refunds;
mod store;
mod webhooks;
