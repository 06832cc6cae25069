//! Store info (OAuth).

use kassa_core::Store;

use crate::client::{ApiRequest, KassaClient};
use crate::error::ClientError;

impl KassaClient {
    /// Get settings of the store the OAuth token belongs to.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_store(&self) -> Result<Store, ClientError> {
        self.call(ApiRequest::get("/me", self.oauth_auth()?)).await
    }
}
