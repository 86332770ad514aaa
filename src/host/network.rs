//! Network dispatch capability.

// ============================================================================
// Imports
// ============================================================================

use async_trait::async_trait;
use url::Url;

use crate::error::Result;
use crate::request::{RequestInit, Response};

// ============================================================================
// NetworkClient
// ============================================================================

/// The network-call primitive a host platform supplies.
///
/// [`FormFetch::fetch`](crate::fetch::FormFetch::fetch) dispatches every
/// request through this trait. Implementations map the resolved URL plus
/// the augmented [`RequestInit`] onto whatever HTTP machinery the host
/// has; errors are propagated to the caller untransformed.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use form_fetch::host::NetworkClient;
/// use form_fetch::{RequestInit, Response, Result};
/// use url::Url;
///
/// struct EchoClient;
///
/// #[async_trait]
/// impl NetworkClient for EchoClient {
///     async fn send(&self, url: Url, _init: &RequestInit) -> Result<Response> {
///         Ok(Response::ok_with_body(url, "echo"))
///     }
/// }
/// ```
#[async_trait]
pub trait NetworkClient: Send + Sync {
    /// Dispatches a request and resolves once it settles.
    ///
    /// # Errors
    ///
    /// Whatever the underlying transport raises, expressed as crate
    /// [`Error`](crate::Error) variants.
    async fn send(&self, url: Url, init: &RequestInit) -> Result<Response>;
}
