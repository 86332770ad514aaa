//! Request body data.

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::form::FormData;

// ============================================================================
// Body
// ============================================================================

/// Request body computed from form contents.
///
/// Which variant a POST submission produces depends on the form's
/// encoding type:
///
/// | Enctype | Body |
/// |---------|------|
/// | `application/x-www-form-urlencoded` (and anything else) | [`Body::UrlEncoded`] |
/// | `multipart/form-data` | [`Body::Multipart`] |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Body {
    /// URL-encoded name/value pairs.
    UrlEncoded(String),

    /// Raw field-data container; the network client is responsible for
    /// multipart framing and boundary generation.
    Multipart(FormData),
}

// ============================================================================
// Body - Constructors
// ============================================================================

impl Body {
    /// Creates a URL-encoded body from collected form data.
    #[inline]
    #[must_use]
    pub fn urlencoded(data: &FormData) -> Self {
        Self::UrlEncoded(data.to_urlencoded())
    }

    /// Creates a multipart body holding the raw field-data container.
    #[inline]
    #[must_use]
    pub fn multipart(data: FormData) -> Self {
        Self::Multipart(data)
    }

    /// Returns the content type this body implies, without any multipart
    /// boundary parameter.
    #[must_use]
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::UrlEncoded(_) => "application/x-www-form-urlencoded",
            Self::Multipart(_) => "multipart/form-data",
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urlencoded_body() {
        let data: FormData = [("a", "1"), ("b", "2")].into_iter().collect();
        let body = Body::urlencoded(&data);
        assert_eq!(body, Body::UrlEncoded("a=1&b=2".to_string()));
        assert_eq!(body.content_type(), "application/x-www-form-urlencoded");
    }

    #[test]
    fn test_multipart_keeps_container() {
        let data: FormData = [("file", "contents")].into_iter().collect();
        let body = Body::multipart(data.clone());

        if let Body::Multipart(inner) = body {
            assert_eq!(inner, data);
        } else {
            panic!("Expected Multipart body");
        }
    }
}
