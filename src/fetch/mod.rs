//! Request building and dispatch.
//!
//! [`FormFetch`] turns a form into a fully configured network request and
//! dispatches it through the injected [`NetworkClient`]:
//!
//! - POST submissions carry the collected fields as a body, URL-encoded
//!   or multipart depending on the form's encoding type
//! - every other method merges the fields into the action URL's query
//!   string, preserving existing parameters
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use form_fetch::host::NetworkClient;
//! use form_fetch::{Field, Form, FormFetch, RequestInit, Response, Result};
//! use url::Url;
//!
//! struct HostClient;
//!
//! #[async_trait]
//! impl NetworkClient for HostClient {
//!     async fn send(&self, url: Url, _init: &RequestInit) -> Result<Response> {
//!         // bind to the host platform's HTTP machinery here
//!         Ok(Response::ok_with_body(url, ""))
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let client = FormFetch::new(Arc::new(HostClient));
//! let form = Form::builder("https://example.com/search")
//!     .field(Field::text("q", "rust"))
//!     .build()?;
//!
//! let mut init = RequestInit::new();
//! let response = client.fetch(&form, None, &mut init, None).await?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Submission method resolution.
pub mod method;

// ============================================================================
// Re-exports
// ============================================================================

pub use method::resolve_method;

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use tracing::debug;
use url::Url;

use crate::error::Result;
use crate::form::{Control, Form};
use crate::host::{FieldCollector, NetworkClient, StandardCollector};
use crate::request::{Body, RequestInit, Response};

// ============================================================================
// FormFetch
// ============================================================================

/// Request builder bound to a network client and a field collector.
///
/// Cheap to clone; clones share the injected capabilities.
#[derive(Clone)]
pub struct FormFetch {
    /// Network dispatch capability.
    net: Arc<dyn NetworkClient>,

    /// Field collection capability.
    collector: Arc<dyn FieldCollector>,
}

// ============================================================================
// FormFetch - Constructors
// ============================================================================

impl FormFetch {
    /// Creates a builder using the standard field collection semantics.
    #[must_use]
    pub fn new(net: Arc<dyn NetworkClient>) -> Self {
        Self::with_collector(net, Arc::new(StandardCollector))
    }

    /// Creates a builder with a custom field collector.
    #[inline]
    #[must_use]
    pub fn with_collector(net: Arc<dyn NetworkClient>, collector: Arc<dyn FieldCollector>) -> Self {
        Self { net, collector }
    }
}

// ============================================================================
// FormFetch - Dispatch
// ============================================================================

impl FormFetch {
    /// Builds a request from `form` and dispatches it.
    ///
    /// `action` overrides the form's own action when present; `submitter`
    /// selects which fields are included. `init` is augmented in place:
    /// `method` is filled only when absent and `body` is recomputed for
    /// POST submissions, while everything else the caller set is left
    /// untouched. The form itself is never mutated.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidAction`](crate::Error::InvalidAction) if the
    ///   effective action does not resolve
    /// - whatever the [`NetworkClient`] raises, untransformed
    pub async fn fetch(
        &self,
        form: &Form,
        action: Option<&str>,
        init: &mut RequestInit,
        submitter: Option<&Control>,
    ) -> Result<Response> {
        let data = self.collector.collect(form, submitter);
        let mut url = match action {
            Some(address) => form.resolve(address)?,
            None => form.action()?,
        };

        let method = resolve_method(form, init);
        if method.eq_ignore_ascii_case("post") {
            init.body = Some(if form.enctype().eq_ignore_ascii_case("multipart/form-data") {
                Body::multipart(data)
            } else {
                Body::urlencoded(&data)
            });
        } else {
            merge_query(&mut url, &data.to_urlencoded());
        }

        debug!(%url, %method, form_id = %form.id(), "Dispatching form submission");
        self.net.send(url, init).await
    }
}

// ============================================================================
// Query Merging
// ============================================================================

/// Merges encoded pairs into a URL's query string.
///
/// Existing parameters are preserved; new pairs are appended after a `&`
/// separator only when the existing query is non-empty.
fn merge_query(url: &mut Url, pairs: &str) {
    let existing = url.query().unwrap_or("").to_string();
    let merged = match (existing.is_empty(), pairs.is_empty()) {
        (true, _) => pairs.to_string(),
        (false, true) => existing,
        (false, false) => format!("{existing}&{pairs}"),
    };
    url.set_query((!merged.is_empty()).then_some(merged.as_str()));
}

// ============================================================================
// Tests
// ============================================================================
