//! Request configuration.
//!
//! [`RequestInit`] is the caller-supplied, mutable configuration attached
//! to a dispatched request. [`FormFetch::fetch`](crate::fetch::FormFetch::fetch)
//! augments it in place rather than replacing it: `method` is filled only
//! when absent, `body` is recomputed from the form contents for POST
//! submissions, and everything else is left exactly as the caller set it.

// ============================================================================
// Imports
// ============================================================================

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::body::Body;

// ============================================================================
// RequestInit
// ============================================================================

/// Mutable request configuration.
///
/// # Example
///
/// ```
/// use form_fetch::RequestInit;
///
/// let init = RequestInit::new()
///     .with_method("post")
///     .with_header("X-Requested-With", "form-fetch");
///
/// assert_eq!(init.method.as_deref(), Some("post"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestInit {
    /// HTTP method; filled from the form during method resolution when
    /// absent.
    pub method: Option<String>,

    /// Request headers.
    pub headers: FxHashMap<String, String>,

    /// Request body; recomputed from form contents for POST submissions.
    pub body: Option<Body>,
}

// ============================================================================
// RequestInit - Construction
// ============================================================================

impl RequestInit {
    /// Creates an empty configuration.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the HTTP method.
    #[inline]
    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Adds a request header.
    #[inline]
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let init = RequestInit::new();
        assert!(init.method.is_none());
        assert!(init.headers.is_empty());
        assert!(init.body.is_none());
    }

    #[test]
    fn test_with_header() {
        let init = RequestInit::new().with_header("Accept", "text/html");
        assert_eq!(init.headers.get("Accept").map(String::as_str), Some("text/html"));
    }
}
