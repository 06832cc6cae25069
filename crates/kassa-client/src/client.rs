//! Kassa HTTP client and request dispatcher.

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use kassa_core::IdempotenceKey;

use crate::auth::{Auth, Credentials};
use crate::config::{BodyEncoding, ClientOptions};
use crate::error::ClientError;
use crate::form;
use crate::types::ApiErrorResponse;

/// Header carrying the idempotence key.
pub const IDEMPOTENCE_KEY_HEADER: &str = "Idempotence-Key";

/// A single logical API call.
///
/// Credentials travel with the request, so one [`KassaClient`] can dispatch calls for
/// several shops.
#[derive(Debug, Clone)]
pub struct ApiRequest<'a> {
    /// HTTP method.
    pub method: Method,
    /// Path relative to the API origin, e.g. `/payments`.
    pub path: String,
    /// Authentication for this call.
    pub auth: Auth<'a>,
    /// Idempotence key; never sent with GET.
    pub idempotence_key: Option<&'a IdempotenceKey>,
    /// Payload, already serialized with the record's serde tags.
    pub payload: Option<serde_json::Value>,
}

impl<'a> ApiRequest<'a> {
    /// A request without key or payload.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>, auth: Auth<'a>) -> Self {
        Self {
            method,
            path: path.into(),
            auth,
            idempotence_key: None,
            payload: None,
        }
    }

    /// GET request.
    #[must_use]
    pub fn get(path: impl Into<String>, auth: Auth<'a>) -> Self {
        Self::new(Method::GET, path, auth)
    }

    /// POST request.
    #[must_use]
    pub fn post(path: impl Into<String>, auth: Auth<'a>) -> Self {
        Self::new(Method::POST, path, auth)
    }

    /// DELETE request.
    #[must_use]
    pub fn delete(path: impl Into<String>, auth: Auth<'a>) -> Self {
        Self::new(Method::DELETE, path, auth)
    }

    /// Attach an idempotence key.
    #[must_use]
    pub fn idempotence_key(mut self, key: &'a IdempotenceKey) -> Self {
        self.idempotence_key = Some(key);
        self
    }

    /// Attach a payload record.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Encode`] if the record cannot be serialized.
    pub fn payload<T: Serialize + ?Sized>(mut self, record: &T) -> Result<Self, ClientError> {
        self.payload = Some(serde_json::to_value(record).map_err(ClientError::Encode)?);
        Ok(self)
    }
}

/// Kassa API client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct KassaClient {
    client: Client,
    base_url: String,
    body_encoding: BodyEncoding,
    credentials: Credentials,
}

impl KassaClient {
    /// Create a client for the production API.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the HTTP client cannot be built.
    pub fn new(credentials: Credentials) -> Result<Self, ClientError> {
        Self::with_options(credentials, ClientOptions::default())
    }

    /// Create a client with custom options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the HTTP client cannot be built.
    pub fn with_options(
        credentials: Credentials,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .user_agent(options.user_agent)
            .build()
            .map_err(|e| ClientError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: options.base_url.trim_end_matches('/').to_string(),
            body_encoding: options.body_encoding,
            credentials,
        })
    }

    /// Create a client from `.secrets/kassa.json` or `KASSA_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the HTTP client cannot be built.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::with_options(Credentials::from_env(), ClientOptions::from_env())
    }

    /// A client for another account sharing this client's connection pool and options.
    #[must_use]
    pub fn with_credentials(&self, credentials: Credentials) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            body_encoding: self.body_encoding,
            credentials,
        }
    }

    /// The configured API origin.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Basic auth from the configured shop credentials.
    pub(crate) fn shop_auth(&self) -> Result<Auth<'_>, ClientError> {
        self.credentials
            .shop
            .as_ref()
            .map(Auth::Basic)
            .ok_or_else(|| {
                ClientError::Configuration("shop ID and secret key not configured".into())
            })
    }

    /// Bearer auth from the configured OAuth token.
    pub(crate) fn oauth_auth(&self) -> Result<Auth<'_>, ClientError> {
        self.credentials
            .oauth_token
            .as_deref()
            .map(Auth::OAuth)
            .ok_or_else(|| ClientError::Configuration("OAuth token not configured".into()))
    }

    /// Dispatch a request and return the raw body of a 200 response.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Transport`] if no response was received.
    /// - [`ClientError::Api`] for any non-200 status with an error envelope.
    /// - [`ClientError::Decode`] if a non-200 body is not an error envelope.
    /// - [`ClientError::Configuration`] if credentials or the idempotence key are not
    ///   valid header values; nothing is sent.
    pub async fn send(&self, request: ApiRequest<'_>) -> Result<Vec<u8>, ClientError> {
        let url = format!("{}{}", self.base_url, request.path);
        let is_get = request.method == Method::GET;

        let mut auth_value = HeaderValue::from_str(&request.auth.header_value())
            .map_err(|e| ClientError::Configuration(format!("invalid credentials: {e}")))?;
        auth_value.set_sensitive(true);

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .header(AUTHORIZATION, auth_value);

        if let Some(key) = request.idempotence_key {
            if is_get {
                tracing::debug!(path = %request.path, "Dropping idempotence key from GET request");
            } else {
                let key_value = HeaderValue::from_str(key.as_str()).map_err(|e| {
                    ClientError::Configuration(format!("invalid idempotence key: {e}"))
                })?;
                builder = builder.header(IDEMPOTENCE_KEY_HEADER, key_value);
            }
        }

        if !is_get {
            builder = builder.header(CONTENT_TYPE, self.body_encoding.content_type());
        }

        if let Some(payload) = &request.payload {
            builder = if is_get {
                builder.query(&form::to_pairs(payload)?)
            } else {
                match self.body_encoding {
                    BodyEncoding::Form => builder.form(&form::to_pairs(payload)?),
                    BodyEncoding::Json => {
                        builder.body(serde_json::to_vec(payload).map_err(ClientError::Encode)?)
                    }
                }
            };
        }

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            auth = request.auth.scheme(),
            idempotent = request.idempotence_key.is_some() && !is_get,
            "Sending Kassa API request"
        );

        let response = builder.send().await.map_err(ClientError::Transport)?;
        let status = response.status();
        let body = response.bytes().await.map_err(ClientError::Transport)?;

        tracing::debug!(
            path = %request.path,
            status = status.as_u16(),
            bytes = body.len(),
            "Received Kassa API response"
        );

        if status != StatusCode::OK {
            let envelope: ApiErrorResponse =
                serde_json::from_slice(&body).map_err(ClientError::Decode)?;

            return Err(ClientError::Api {
                status: status.as_u16(),
                code: envelope.code,
                message: envelope.description,
                id: envelope.id,
                parameter: envelope.parameter,
            });
        }

        Ok(body.to_vec())
    }

    /// Dispatch a request and decode the response record.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        request: ApiRequest<'_>,
    ) -> Result<T, ClientError> {
        let body = self.send(request).await?;
        serde_json::from_slice(&body).map_err(ClientError::Decode)
    }
}
