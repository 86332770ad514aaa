//! Error types for form-fetch.
//!
//! This module defines all error types used throughout the crate.
//!
//! # Usage
//!
//! All fallible operations return [`Result<T>`] which uses [`Error`]:
//!
//! ```ignore
//! use form_fetch::{Result, Error};
//!
//! async fn example(client: &FormFetch, form: &Form) -> Result<()> {
//!     let mut init = RequestInit::new();
//!     let response = client.fetch(form, None, &mut init, None).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Resolution | [`Error::InvalidAction`], [`Error::Url`] |
//! | Network | [`Error::Network`], [`Error::RequestAborted`] |
//! | External | [`Error::Json`] |
//!
//! The crate performs no field validation of its own, so there is no
//! validation category: a submission either resolves and dispatches, or
//! fails with one of the variants above.

// ============================================================================
// Imports
// ============================================================================

use std::result::Result as StdResult;

use thiserror::Error;
use url::ParseError;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
///
/// All fallible operations in this crate return this type.
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
///
/// Each variant includes relevant context for debugging.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Resolution Errors
    // ========================================================================
    /// Action address could not be resolved.
    ///
    /// Returned when a form action or submitter `formaction` override does
    /// not parse as a URL relative to the form's base document URL.
    #[error("Invalid action address: {action}: {source}")]
    InvalidAction {
        /// The action text that failed to resolve.
        action: String,
        /// Underlying URL parse failure.
        source: ParseError,
    },

    // ========================================================================
    // Network Errors
    // ========================================================================
    /// Network dispatch failed.
    ///
    /// Raised by the [`NetworkClient`](crate::host::NetworkClient)
    /// implementation for connectivity and transport failures.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network failure.
        message: String,
    },

    /// Request was aborted before a response arrived.
    ///
    /// Raised by [`NetworkClient`](crate::host::NetworkClient)
    /// implementations that support cancellation.
    #[error("Request aborted: {url}")]
    RequestAborted {
        /// URL of the aborted request.
        url: String,
    },

    // ========================================================================
    // External Errors
    // ========================================================================
    /// URL parsing error.
    #[error("URL error: {0}")]
    Url(#[from] ParseError),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates an invalid action error.
    #[inline]
    pub fn invalid_action(action: impl Into<String>, source: ParseError) -> Self {
        Self::InvalidAction {
            action: action.into(),
            source,
        }
    }

    /// Creates a network error.
    #[inline]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates a request aborted error.
    #[inline]
    pub fn request_aborted(url: impl Into<String>) -> Self {
        Self::RequestAborted { url: url.into() }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if this is a resolution error.
    ///
    /// Resolution errors mean the request was never dispatched.
    #[inline]
    #[must_use]
    pub fn is_resolution_error(&self) -> bool {
        matches!(self, Self::InvalidAction { .. } | Self::Url(_))
    }

    /// Returns `true` if this is a network error.
    #[inline]
    #[must_use]
    pub fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::RequestAborted { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::network("connection refused");
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_invalid_action_display() {
        let source = url::Url::parse("not a url").unwrap_err();
        let err = Error::invalid_action("not a url", source);
        assert!(
            err.to_string()
                .starts_with("Invalid action address: not a url")
        );
    }

    #[test]
    fn test_is_resolution_error() {
        let source = url::Url::parse("not a url").unwrap_err();
        let action_err = Error::invalid_action("not a url", source);
        let net_err = Error::network("test");

        assert!(action_err.is_resolution_error());
        assert!(!net_err.is_resolution_error());
    }

    #[test]
    fn test_is_network_error() {
        let net_err = Error::network("test");
        let abort_err = Error::request_aborted("https://example.com/");
        let json_err: Error = serde_json::from_str::<String>("invalid").unwrap_err().into();

        assert!(net_err.is_network_error());
        assert!(abort_err.is_network_error());
        assert!(!json_err.is_network_error());
    }

    #[test]
    fn test_from_parse_error() {
        let parse_err = url::Url::parse("http://[invalid").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Url(_)));
    }
}
