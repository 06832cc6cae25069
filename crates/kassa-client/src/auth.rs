//! Credentials and `Authorization` header construction.
//!
//! Payments, refunds and receipts authenticate with HTTP Basic auth (shop ID and secret
//! key). Store info and webhooks authenticate with an OAuth bearer token.

use base64::Engine;
use std::fmt;

/// Shop ID and secret key used for Basic auth.
#[derive(Clone, PartialEq, Eq)]
pub struct ShopCredentials {
    shop_id: String,
    secret_key: String,
}

impl ShopCredentials {
    /// Create shop credentials.
    #[must_use]
    pub fn new(shop_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            shop_id: shop_id.into(),
            secret_key: secret_key.into(),
        }
    }

    /// The shop ID.
    #[must_use]
    pub fn shop_id(&self) -> &str {
        &self.shop_id
    }

    /// `Basic base64(shop_id:secret_key)`.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        let token = base64::engine::general_purpose::STANDARD
            .encode(format!("{}:{}", self.shop_id, self.secret_key));
        format!("Basic {token}")
    }
}

impl fmt::Debug for ShopCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShopCredentials")
            .field("shop_id", &self.shop_id)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Everything the client may need to authenticate.
///
/// Either half may be missing; operations that need it fail with
/// [`ClientError::Configuration`](crate::ClientError::Configuration).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Shop ID and secret key (payments, refunds, receipts).
    pub shop: Option<ShopCredentials>,
    /// OAuth token (store info, webhooks).
    pub oauth_token: Option<String>,
}

impl Credentials {
    /// Credentials for Basic-auth resources only.
    #[must_use]
    pub fn shop(shop_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            shop: Some(ShopCredentials::new(shop_id, secret_key)),
            oauth_token: None,
        }
    }

    /// Credentials for OAuth resources only.
    #[must_use]
    pub fn oauth(token: impl Into<String>) -> Self {
        Self {
            shop: None,
            oauth_token: Some(token.into()),
        }
    }

    /// Add an OAuth token.
    #[must_use]
    pub fn with_oauth_token(mut self, token: impl Into<String>) -> Self {
        self.oauth_token = Some(token.into());
        self
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("shop", &self.shop)
            .field("oauth_token", &self.oauth_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Authentication used for a single request.
#[derive(Clone, Copy)]
pub enum Auth<'a> {
    /// Basic auth with shop credentials.
    Basic(&'a ShopCredentials),
    /// Bearer auth with an OAuth token.
    OAuth(&'a str),
}

impl Auth<'_> {
    /// Value of the `Authorization` header.
    #[must_use]
    pub fn header_value(&self) -> String {
        match self {
            Self::Basic(shop) => shop.authorization_header(),
            Self::OAuth(token) => format!("Bearer {token}"),
        }
    }

    /// Short scheme name for logs.
    #[must_use]
    pub const fn scheme(&self) -> &'static str {
        match self {
            Self::Basic(_) => "basic",
            Self::OAuth(_) => "oauth",
        }
    }
}

impl fmt::Debug for Auth<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic(shop) => f.debug_tuple("Basic").field(shop).finish(),
            Self::OAuth(_) => f.debug_tuple("OAuth").field(&"<redacted>").finish(),
        }
    }
}
