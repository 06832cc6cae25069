//! Common test utilities for Kassa client integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use serde_json::{json, Value};
use wiremock::{MockServer, Request};

use kassa_client::{BodyEncoding, ClientOptions, Credentials, KassaClient};

/// Shop ID used by the harness.
pub const SHOP_ID: &str = "123456";
/// Secret key used by the harness.
pub const SECRET_KEY: &str = "qwerty";
/// OAuth token used by the harness.
pub const OAUTH_TOKEN: &str = "oauth-test-token";
/// `Basic base64("123456:qwerty")`.
pub const BASIC_AUTH: &str = "Basic MTIzNDU2OnF3ZXJ0eQ==";

/// Mock Kassa API plus a client pointed at it.
pub struct TestHarness {
    /// The mock API server.
    pub server: MockServer,
    /// Client with both shop credentials and an OAuth token.
    pub client: KassaClient,
}

impl TestHarness {
    /// Start a mock server with a form-encoding client.
    pub async fn new() -> Self {
        Self::with_encoding(BodyEncoding::Form).await
    }

    /// Start a mock server with a client using the given body encoding.
    pub async fn with_encoding(encoding: BodyEncoding) -> Self {
        let server = MockServer::start().await;
        let options = ClientOptions::with_base_url(server.uri())
            .timeout_seconds(5)
            .body_encoding(encoding);
        let credentials = Credentials::shop(SHOP_ID, SECRET_KEY).with_oauth_token(OAUTH_TOKEN);
        let client =
            KassaClient::with_options(credentials, options).expect("Failed to build client");

        Self { server, client }
    }

    /// All requests the mock server has seen.
    pub async fn requests(&self) -> Vec<Request> {
        self.server
            .received_requests()
            .await
            .expect("Request recording is enabled")
    }

    /// The single request the mock server has seen.
    pub async fn only_request(&self) -> Request {
        let mut requests = self.requests().await;
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.remove(0)
    }
}

/// Decode a form-encoded request body.
pub fn form_pairs(request: &Request) -> Vec<(String, String)> {
    url::form_urlencoded::parse(&request.body)
        .into_owned()
        .collect()
}

/// Look up a decoded form value.
pub fn form_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Header value as a string.
pub fn header<'a>(request: &'a Request, name: &str) -> Option<&'a str> {
    request.headers.get(name).and_then(|v| v.to_str().ok())
}

/// A pending bank-card payment for 120.00 EUR.
pub fn pending_payment_json() -> Value {
    json!({
        "id": "22e12f66-000f-5000-8000-18db351245c7",
        "status": "pending",
        "paid": false,
        "amount": {"value": "120.00", "currency": "EUR"},
        "confirmation": {
            "type": "redirect",
            "return_url": "https://www.merchant-website.com/return_url",
            "confirmation_url": "https://money.yandex.ru/payments/external/confirmation?orderId=22e12f66-000f-5000-8000-18db351245c7"
        },
        "created_at": "2018-07-18T10:51:18.139Z",
        "description": "Order 72",
        "metadata": {"order_id": "72"},
        "payment_method": {
            "type": "bank_card",
            "id": "22e12f66-000f-5000-8000-18db351245c7",
            "saved": false,
            "card": {
                "first6": "123456",
                "last4": "5678",
                "expiry_month": "07",
                "expiry_year": "2022",
                "card_type": "MasterCard"
            }
        },
        "recipient": {"account_id": "100500", "gateway_id": "100700"},
        "refundable": false,
        "test": false
    })
}

/// A succeeded payment.
pub fn succeeded_payment_json() -> Value {
    let mut payment = pending_payment_json();
    payment["status"] = json!("succeeded");
    payment["paid"] = json!(true);
    payment["refundable"] = json!(true);
    payment["captured_at"] = json!("2018-07-18T10:52:01.417Z");
    payment["income_amount"] = json!({"value": "115.80", "currency": "EUR"});
    payment["authorization_details"] = json!({"rrn": "10000000000", "auth_code": "000000"});
    payment
}

/// A succeeded refund.
pub fn refund_json() -> Value {
    json!({
        "id": "216749f7-0016-50be-b000-078d43a63ae4",
        "payment_id": "22e12f66-000f-5000-8000-18db351245c7",
        "status": "succeeded",
        "created_at": "2018-07-18T11:05:40.712Z",
        "amount": {"value": "20.50", "currency": "EUR"},
        "description": "Damaged item",
        "sources": [
            {"account_id": "456", "amount": {"value": "20.50", "currency": "EUR"}}
        ]
    })
}

/// A registered payment receipt.
pub fn receipt_json() -> Value {
    json!({
        "id": "rt_1da5c87d-0984-50e8-a7f3-8de646dd9ec9",
        "type": "payment",
        "payment_id": "22e12f66-000f-5000-8000-18db351245c7",
        "status": "succeeded",
        "fiscal_document_number": "3986",
        "fiscal_storage_number": "9288000100115785",
        "fiscal_attribute": "2617603921",
        "registered_at": "2019-05-13T17:56:00.123Z",
        "fiscal_provider_id": "fd9e9404-eaca-4000-8ec9-dc228ead2345",
        "items": [{
            "description": "Tea",
            "quantity": "2.000",
            "amount": {"value": "60.00", "currency": "EUR"},
            "vat_code": 2,
            "payment_mode": "full_payment",
            "payment_subject": "commodity"
        }],
        "settlements": [
            {"type": "cashless", "amount": {"value": "120.00", "currency": "EUR"}}
        ],
        "tax_system_code": 1
    })
}

/// Store settings.
pub fn store_json() -> Value {
    json!({
        "account_id": "123456",
        "test": true,
        "fiscalization_enabled": false,
        "payment_methods": ["bank_card", "yandex_money", "qiwi"]
    })
}

/// A webhook subscription.
pub fn webhook_json() -> Value {
    json!({
        "id": "wh-e44e8088-bd73-43b1-959a-954f3a7d0c54",
        "event": "payment.succeeded",
        "url": "https://www.merchant-website.com/notification_url"
    })
}

/// The error envelope for an invalid amount.
pub fn invalid_request_json() -> Value {
    json!({
        "type": "error",
        "id": "abc",
        "code": "invalid_request",
        "description": "bad amount"
    })
}
