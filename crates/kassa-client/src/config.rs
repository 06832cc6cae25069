//! Client configuration.

use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::auth::{Credentials, ShopCredentials};
use crate::error::ClientError;

/// Production API origin.
pub const DEFAULT_BASE_URL: &str = "https://payment.yandex.net/api/v3";

/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("kassa-client/", env!("CARGO_PKG_VERSION"));

/// How request payloads are written into the HTTP body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BodyEncoding {
    /// `application/x-www-form-urlencoded` with bracket-notation keys.
    #[default]
    Form,
    /// `application/json`.
    Json,
}

impl BodyEncoding {
    /// `Content-Type` header value for this encoding.
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Form => "application/x-www-form-urlencoded",
            Self::Json => "application/json",
        }
    }
}

impl FromStr for BodyEncoding {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "form" => Ok(Self::Form),
            "json" => Ok(Self::Json),
            other => Err(ClientError::Configuration(format!(
                "unknown body encoding: {other}"
            ))),
        }
    }
}

impl fmt::Display for BodyEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Form => "form",
            Self::Json => "json",
        })
    }
}

/// Client options for customization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// API origin (default: [`DEFAULT_BASE_URL`]).
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
    /// Request body encoding (default: form).
    pub body_encoding: BodyEncoding,
    /// User agent (default: [`DEFAULT_USER_AGENT`]).
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 30,
            body_encoding: BodyEncoding::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientOptions {
    /// Options pointing at a different API origin (sandbox, mock server).
    #[must_use]
    pub fn with_base_url(url: impl Into<String>) -> Self {
        Self {
            base_url: url.into(),
            ..Self::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Set the body encoding.
    #[must_use]
    pub fn body_encoding(mut self, encoding: BodyEncoding) -> Self {
        self.body_encoding = encoding;
        self
    }

    /// Load options from environment variables.
    ///
    /// Reads `KASSA_API_URL`, `KASSA_TIMEOUT_SECONDS` and `KASSA_BODY_ENCODING`; unset or
    /// unparsable values fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            base_url: lookup("KASSA_API_URL").unwrap_or(defaults.base_url),
            timeout_seconds: lookup("KASSA_TIMEOUT_SECONDS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.timeout_seconds),
            body_encoding: lookup("KASSA_BODY_ENCODING")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.body_encoding),
            user_agent: defaults.user_agent,
        }
    }
}

/// Secrets file structure.
#[derive(Debug, Deserialize)]
struct KassaSecrets {
    #[serde(default)]
    shop_id: Option<String>,
    #[serde(default)]
    secret_key: Option<String>,
    #[serde(default)]
    oauth_token: Option<String>,
}

impl KassaSecrets {
    fn into_credentials(self) -> Credentials {
        Credentials {
            shop: self
                .shop_id
                .zip(self.secret_key)
                .map(|(id, key)| ShopCredentials::new(id, key)),
            oauth_token: self.oauth_token.filter(|t| !t.is_empty()),
        }
    }
}

impl Credentials {
    /// Load credentials from a secrets file or the environment.
    ///
    /// Looks for `.secrets/kassa.json` first, then falls back to `KASSA_SHOP_ID`,
    /// `KASSA_SECRET_KEY` and `KASSA_OAUTH_TOKEN`.
    #[must_use]
    pub fn from_env() -> Self {
        let secret_paths = [".secrets/kassa.json", "../.secrets/kassa.json"];

        for path in &secret_paths {
            if let Ok(credentials) = Self::from_file(path) {
                tracing::debug!(path = %path, "Loaded Kassa credentials from file");
                return credentials;
            }
        }

        tracing::debug!("Kassa secrets file not found, using environment variables");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load credentials from a JSON secrets file with `shop_id`, `secret_key` and
    /// `oauth_token` keys.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ClientError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        let secrets: KassaSecrets = serde_json::from_str(&contents).map_err(|e| {
            ClientError::Configuration(format!("invalid secrets file {}: {e}", path.display()))
        })?;
        Ok(secrets.into_credentials())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        KassaSecrets {
            shop_id: lookup("KASSA_SHOP_ID"),
            secret_key: lookup("KASSA_SECRET_KEY"),
            oauth_token: lookup("KASSA_OAUTH_TOKEN"),
        }
        .into_credentials()
    }
}
