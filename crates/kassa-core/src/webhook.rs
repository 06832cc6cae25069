//! Webhook subscriptions.

use serde::{Deserialize, Serialize};

/// Event a webhook fires on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WebhookEvent {
    /// Payment authorized and waiting for capture.
    #[serde(rename = "payment.waiting_for_capture")]
    PaymentWaitingForCapture,
    /// Payment succeeded.
    #[serde(rename = "payment.succeeded")]
    PaymentSucceeded,
    /// Payment canceled.
    #[serde(rename = "payment.canceled")]
    PaymentCanceled,
    /// Refund succeeded.
    #[serde(rename = "refund.succeeded")]
    RefundSucceeded,
}

impl WebhookEvent {
    /// Wire name, e.g. `"payment.succeeded"`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PaymentWaitingForCapture => "payment.waiting_for_capture",
            Self::PaymentSucceeded => "payment.succeeded",
            Self::PaymentCanceled => "payment.canceled",
            Self::RefundSucceeded => "refund.succeeded",
        }
    }

    /// Parse a wire name; `None` for events this client does not model.
    #[must_use]
    pub fn from_wire(name: &str) -> Option<Self> {
        [
            Self::PaymentWaitingForCapture,
            Self::PaymentSucceeded,
            Self::PaymentCanceled,
            Self::RefundSucceeded,
        ]
        .into_iter()
        .find(|event| event.as_str() == name)
    }
}

impl std::fmt::Display for WebhookEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request to subscribe a URL to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookRequest {
    /// Event to subscribe to.
    pub event: WebhookEvent,
    /// Callback URL.
    pub url: String,
}

impl WebhookRequest {
    /// Subscribe `url` to `event`.
    #[must_use]
    pub fn new(event: WebhookEvent, url: impl Into<String>) -> Self {
        Self {
            event,
            url: url.into(),
        }
    }
}

/// A registered webhook.
///
/// The event is kept as its wire name so that webhooks for events added to the API
/// later still decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    /// Webhook ID.
    pub id: String,
    /// Event name, e.g. `"payment.succeeded"`.
    pub event: String,
    /// Callback URL.
    pub url: String,
}

impl Webhook {
    /// The event, if it is one this client models.
    #[must_use]
    pub fn known_event(&self) -> Option<WebhookEvent> {
        WebhookEvent::from_wire(&self.event)
    }
}

/// List of webhooks registered for the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookList {
    /// Always `"list"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Webhooks.
    pub items: Vec<Webhook>,
}
