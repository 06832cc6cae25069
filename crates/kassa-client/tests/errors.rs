//! Dispatcher behavior: errors, headers and body encodings.

mod common;

use common::{header, invalid_request_json, pending_payment_json, TestHarness, BASIC_AUTH};
use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use kassa_client::{
    ApiRequest, Auth, BodyEncoding, ClientError, ClientOptions, Credentials, KassaClient,
    ShopCredentials, TRANSPORT_ERROR_STATUS,
};
use kassa_core::{Amount, IdempotenceKey, PaymentRequest};

fn request() -> PaymentRequest {
    PaymentRequest::new(Amount::new(dec!(120.00), "EUR"))
        .with_description("Order 72")
        .with_qiwi("79001234567")
}

// ============================================================================
// Error envelope
// ============================================================================

#[tokio::test]
async fn error_envelope_becomes_api_error() {
    let harness = TestHarness::new().await;

    Mock::given(method("POST"))
        .and(path("/payments"))
        .respond_with(ResponseTemplate::new(400).set_body_json(invalid_request_json()))
        .mount(&harness.server)
        .await;

    let err = harness
        .client
        .create_payment("key-1", &request())
        .await
        .unwrap_err();

    assert!(err.is_api());
    assert_eq!(err.status_code(), Some(400));
    assert_eq!(err.api_code(), Some("invalid_request"));
    match err {
        ClientError::Api {
            message, id, parameter, ..
        } => {
            assert_eq!(message, "bad amount");
            assert_eq!(id.as_deref(), Some("abc"));
            assert_eq!(parameter, None);
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_envelope_keeps_parameter() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/payments/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "type": "error",
            "id": "def",
            "code": "not_found",
            "description": "Payment doesn't exist or access denied",
            "parameter": "payment_id"
        })))
        .mount(&harness.server)
        .await;

    let err = harness.client.get_payment("missing").await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));
    assert!(matches!(
        err,
        ClientError::Api { ref parameter, .. } if parameter.as_deref() == Some("payment_id")
    ));
}

#[tokio::test]
async fn non_200_success_codes_are_errors() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/payments/p1"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "type": "error",
            "code": "processing",
            "description": "Request accepted, retry later"
        })))
        .mount(&harness.server)
        .await;

    let err = harness.client.get_payment("p1").await.unwrap_err();
    assert_eq!(err.status_code(), Some(202));
    assert_eq!(err.api_code(), Some("processing"));
}

#[tokio::test]
async fn non_json_error_body_is_decode_error() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/payments/p1"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&harness.server)
        .await;

    let err = harness.client.get_payment("p1").await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
    assert!(!err.is_api());
}

#[tokio::test]
async fn malformed_success_body_is_decode_error() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/payments/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "p1"})))
        .mount(&harness.server)
        .await;

    let err = harness.client.get_payment("p1").await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
    assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn transport_failure_reports_500() {
    // Reserve a port and release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let options = ClientOptions::with_base_url(format!("http://{address}")).timeout_seconds(2);
    let client =
        KassaClient::with_options(Credentials::shop("123456", "qwerty"), options).unwrap();

    let err = client.get_payment("p1").await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(err.status_code(), Some(TRANSPORT_ERROR_STATUS));
}

// ============================================================================
// Headers
// ============================================================================

#[tokio::test]
async fn get_never_carries_idempotence_key() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/payments/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pending_payment_json()))
        .mount(&harness.server)
        .await;

    let shop = ShopCredentials::new("123456", "qwerty");
    let key = IdempotenceKey::new("should-not-be-sent");
    let request = ApiRequest::get("/payments/p1", Auth::Basic(&shop)).idempotence_key(&key);
    harness.client.send(request).await.unwrap();

    let received = harness.only_request().await;
    assert!(received.headers.get("Idempotence-Key").is_none());
    assert!(received.headers.get("Content-Type").is_none());
    assert_eq!(header(&received, "Authorization"), Some(BASIC_AUTH));
}

#[tokio::test]
async fn get_payload_goes_to_query_string() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/payments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&harness.server)
        .await;

    let shop = ShopCredentials::new("123456", "qwerty");
    let request = ApiRequest::get("/payments", Auth::Basic(&shop))
        .payload(&json!({"status": "succeeded", "created_at": {"gte": "2018-07-18"}}))
        .unwrap();
    let body = harness.client.send(request).await.unwrap();
    assert_eq!(serde_json::from_slice::<serde_json::Value>(&body).unwrap(), json!({"items": []}));

    let received = harness.only_request().await;
    let query: Vec<(String, String)> = received.url.query_pairs().into_owned().collect();
    assert!(query.contains(&("status".into(), "succeeded".into())));
    assert!(query.contains(&("created_at[gte]".into(), "2018-07-18".into())));
    assert!(received.body.is_empty());
}

#[tokio::test]
async fn idempotence_key_is_sent_verbatim() {
    let harness = TestHarness::new().await;

    Mock::given(method("POST"))
        .and(path("/payments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pending_payment_json()))
        .mount(&harness.server)
        .await;

    let key = IdempotenceKey::generate();
    harness
        .client
        .create_payment(&key, &request())
        .await
        .unwrap();

    let received = harness.only_request().await;
    assert_eq!(header(&received, "Idempotence-Key"), Some(key.as_str()));
}

#[tokio::test]
async fn invalid_idempotence_key_fails_before_sending() {
    let harness = TestHarness::new().await;

    Mock::given(method("POST"))
        .and(path("/payments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pending_payment_json()))
        .expect(0)
        .mount(&harness.server)
        .await;

    let err = harness
        .client
        .create_payment("bad\nkey", &request())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Configuration(_)));
    assert_eq!(err.status_code(), None);
    assert!(harness.requests().await.is_empty());
}

#[tokio::test]
async fn missing_oauth_token_fails_before_sending() {
    let harness = TestHarness::new().await;
    let client = harness
        .client
        .with_credentials(Credentials::shop("123456", "qwerty"));

    let err = client.get_store().await.unwrap_err();
    assert!(matches!(err, ClientError::Configuration(_)));
    assert!(harness.requests().await.is_empty());
}

// ============================================================================
// JSON encoding
// ============================================================================

#[tokio::test]
async fn json_encoding_sends_json_body() {
    let harness = TestHarness::with_encoding(BodyEncoding::Json).await;

    Mock::given(method("POST"))
        .and(path("/payments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pending_payment_json()))
        .mount(&harness.server)
        .await;

    harness
        .client
        .create_payment("key-1", &request())
        .await
        .unwrap();

    let received = harness.only_request().await;
    assert_eq!(header(&received, "Content-Type"), Some("application/json"));

    let body: serde_json::Value = serde_json::from_slice(&received.body).unwrap();
    assert_eq!(
        body,
        json!({
            "amount": {"value": "120.00", "currency": "EUR"},
            "description": "Order 72",
            "payment_method_data": {"type": "qiwi", "phone": "79001234567"}
        })
    );
}
