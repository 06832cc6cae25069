//! Receipts API (Basic auth).

use kassa_core::{IdempotenceKey, Receipt, ReceiptRequest};

use crate::client::{ApiRequest, KassaClient};
use crate::error::ClientError;

impl KassaClient {
    /// Register a standalone receipt for a payment or refund.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create_receipt(
        &self,
        idempotence_key: impl Into<IdempotenceKey>,
        request: &ReceiptRequest,
    ) -> Result<Receipt, ClientError> {
        let key = idempotence_key.into();
        let request = ApiRequest::post("/receipts", self.shop_auth()?)
            .idempotence_key(&key)
            .payload(request)?;

        self.call(request).await
    }

    /// Get a receipt by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_receipt(&self, receipt_id: &str) -> Result<Receipt, ClientError> {
        self.call(ApiRequest::get(format!("/receipts/{receipt_id}"), self.shop_auth()?))
            .await
    }
}
