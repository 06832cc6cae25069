//! Refunds API (Basic auth).

use kassa_core::{IdempotenceKey, Refund, RefundRequest};

use crate::client::{ApiRequest, KassaClient};
use crate::error::ClientError;

impl KassaClient {
    /// Refund a payment.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create_refund(
        &self,
        idempotence_key: impl Into<IdempotenceKey>,
        request: &RefundRequest,
    ) -> Result<Refund, ClientError> {
        let key = idempotence_key.into();
        let request = ApiRequest::post("/refunds", self.shop_auth()?)
            .idempotence_key(&key)
            .payload(request)?;

        self.call(request).await
    }

    /// Get a refund by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_refund(&self, refund_id: &str) -> Result<Refund, ClientError> {
        self.call(ApiRequest::get(format!("/refunds/{refund_id}"), self.shop_auth()?))
            .await
    }
}
