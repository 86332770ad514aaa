//! Network responses.

// ============================================================================
// Imports
// ============================================================================

use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;

// ============================================================================
// Response
// ============================================================================

/// A settled network response.
///
/// Produced by a [`NetworkClient`](crate::host::NetworkClient). A non-2xx
/// status is still a response, not an error; only resolution and
/// transport failures surface as [`Error`](crate::Error).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,

    /// HTTP status text.
    pub status_text: String,

    /// Final URL after any redirects.
    pub url: String,

    /// Response headers.
    pub headers: FxHashMap<String, String>,

    /// Response body as text.
    pub body: String,
}

// ============================================================================
// Response - Constructors
// ============================================================================

impl Response {
    /// Creates a `200 OK` response with the given final URL and body.
    #[must_use]
    pub fn ok_with_body(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status: 200,
            status_text: "OK".to_string(),
            url: url.into(),
            headers: FxHashMap::default(),
            body: body.into(),
        }
    }
}

// ============================================================================
// Response - Accessors
// ============================================================================

impl Response {
    /// Returns `true` if the status is in the 2xx range.
    #[inline]
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserializes the body as JSON.
    ///
    /// # Errors
    ///
    /// [`Error::Json`](crate::Error::Json) if the body is not valid JSON
    /// for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

// ============================================================================
// Tests
// ============================================================================
