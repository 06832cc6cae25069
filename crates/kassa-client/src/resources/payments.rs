//! Payments API (Basic auth).

use kassa_core::{CaptureRequest, IdempotenceKey, Payment, PaymentRequest};

use crate::client::{ApiRequest, KassaClient};
use crate::error::ClientError;

impl KassaClient {
    /// Create a payment.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create_payment(
        &self,
        idempotence_key: impl Into<IdempotenceKey>,
        request: &PaymentRequest,
    ) -> Result<Payment, ClientError> {
        let key = idempotence_key.into();
        let request = ApiRequest::post("/payments", self.shop_auth()?)
            .idempotence_key(&key)
            .payload(request)?;

        self.call(request).await
    }

    /// Get a payment by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_payment(&self, payment_id: &str) -> Result<Payment, ClientError> {
        let request = ApiRequest::get(format!("/payments/{payment_id}"), self.shop_auth()?);

        self.call(request).await
    }

    /// Capture an authorized payment, fully or partially.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn capture_payment(
        &self,
        idempotence_key: impl Into<IdempotenceKey>,
        payment_id: &str,
        request: &CaptureRequest,
    ) -> Result<Payment, ClientError> {
        let key = idempotence_key.into();
        let request = ApiRequest::post(format!("/payments/{payment_id}/capture"), self.shop_auth()?)
            .idempotence_key(&key)
            .payload(request)?;

        self.call(request).await
    }

    /// Cancel a payment that is waiting for capture.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn cancel_payment(
        &self,
        idempotence_key: impl Into<IdempotenceKey>,
        payment_id: &str,
    ) -> Result<Payment, ClientError> {
        let key = idempotence_key.into();
        let request = ApiRequest::post(format!("/payments/{payment_id}/cancel"), self.shop_auth()?)
            .idempotence_key(&key);

        self.call(request).await
    }
}
