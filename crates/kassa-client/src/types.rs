//! Wire types private to the client.

use serde::Deserialize;

/// Error envelope returned with non-200 responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// Always `"error"`.
    #[serde(rename = "type", default)]
    pub error_type: String,
    /// Error ID.
    #[serde(default)]
    pub id: Option<String>,
    /// Error code.
    pub code: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Offending request parameter.
    #[serde(default)]
    pub parameter: Option<String>,
}
