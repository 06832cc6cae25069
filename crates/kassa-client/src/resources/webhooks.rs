//! Webhooks API (OAuth).

use kassa_core::{IdempotenceKey, Webhook, WebhookList, WebhookRequest};

use crate::client::{ApiRequest, KassaClient};
use crate::error::ClientError;

impl KassaClient {
    /// Subscribe a URL to an event.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn subscribe_webhook(
        &self,
        idempotence_key: impl Into<IdempotenceKey>,
        request: &WebhookRequest,
    ) -> Result<Webhook, ClientError> {
        let key = idempotence_key.into();
        let request = ApiRequest::post("/webhooks", self.oauth_auth()?)
            .idempotence_key(&key)
            .payload(request)?;

        self.call(request).await
    }

    /// List registered webhooks.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_webhooks(&self) -> Result<WebhookList, ClientError> {
        self.call(ApiRequest::get("/webhooks", self.oauth_auth()?)).await
    }

    /// Remove a webhook.
    ///
    /// The response body is not inspected on success.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn unsubscribe_webhook(&self, webhook_id: &str) -> Result<(), ClientError> {
        let request = ApiRequest::delete(format!("/webhooks/{webhook_id}"), self.oauth_auth()?);
        self.send(request).await?;
        Ok(())
    }
}
