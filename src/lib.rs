//! form-fetch - AJAX-style form submission without a framework.
//!
//! This library intercepts form submission, serializes the form's fields
//! into a network request, and dispatches it asynchronously in place of
//! native navigation.
//!
//! # Architecture
//!
//! Two cooperating pieces, no reverse dependencies:
//!
//! - **Request builder** ([`FormFetch`]): collects field data, resolves
//!   the effective method and action, and either builds a POST body or
//!   merges the fields into the action URL's query string, then
//!   dispatches through an injected network client.
//! - **Submission interceptor** ([`Interceptor`]): hooks a form's submit
//!   event (idempotently, one hook per form), suppresses default
//!   navigation, honors the submitter's `formaction`/`formtarget`
//!   overrides, and delivers the settled result to caller callbacks.
//!
//! The ambient browser environment is abstracted into three injected
//! capabilities (field collection, network dispatch, and event
//! registration) so the logic runs and tests without a browser host.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use form_fetch::host::{EventBus, NetworkClient};
//! use form_fetch::{Field, Form, FormFetch, Interceptor, RequestInit, Response, Result};
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
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let form = Form::builder("https://example.com/login")
//!         .action("/session")
//!         .method("post")
//!         .field(Field::text("user", "alice"))
//!         .build()?;
//!
//!     let bus = Arc::new(EventBus::new());
//!     let events: Arc<EventBus> = Arc::clone(&bus);
//!     let interceptor = Interceptor::new(FormFetch::new(Arc::new(HostClient)), events);
//!
//!     interceptor.attach(
//!         &form,
//!         Arc::new(|response, target, _form| {
//!             println!("{} -> {target}", response.status);
//!         }),
//!         None,
//!         None,
//!     );
//!
//!     // A real host forwards DOM submit events; the bus stands in here.
//!     bus.submit(&form, None).await;
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error types and [`Result`] alias |
//! | [`fetch`] | Request building and dispatch |
//! | [`form`] | Form, field, and control entities |
//! | [`host`] | Injected host capability interfaces |
//! | [`identifiers`] | Type-safe ID wrappers |
//! | [`request`] | Request configuration, bodies, responses |
//! | [`submit`] | Submission interception |

// ============================================================================
// Modules
// ============================================================================

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// Request building and dispatch.
///
/// [`FormFetch::fetch`] builds a request from a form and dispatches it;
/// [`resolve_method`] implements the method precedence rules.
pub mod fetch;

/// Form entities: [`Form`], [`Field`], [`Control`], [`FormData`].
pub mod form;

/// Host capability interfaces.
///
/// Field collection, network dispatch, and event registration are
/// injected rather than ambient.
pub mod host;

/// Type-safe identifiers for form entities.
pub mod identifiers;

/// Request configuration, bodies, and responses.
pub mod request;

/// Submission interception.
///
/// [`Interceptor::attach`] wires a one-time submit hook per form.
pub mod submit;

// ============================================================================
// Re-exports
// ============================================================================

// Form types
pub use form::{Control, Field, FieldKind, Form, FormBuilder, FormData};

// Fetch types
pub use fetch::{FormFetch, resolve_method};

// Request types
pub use request::{Body, RequestInit, Response};

// Submit types
pub use submit::{AttachTarget, InitFactory, Interceptor, OnError, OnResponse};

// Error types
pub use error::{Error, Result};

// Identifier types
pub use identifiers::FormId;
