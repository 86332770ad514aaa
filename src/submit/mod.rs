//! Submission interception.
//!
//! [`Interceptor::attach`] wires a submit hook to a form: each submission
//! suppresses native navigation, resolves the effective action and target
//! (a submitter's `formaction`/`formtarget` overrides win), builds a
//! request through [`FormFetch`], and delivers the settled result to the
//! caller's callbacks.
//!
//! Attachment is idempotent per form: the second `attach` call is a
//! silent no-op, tracked in a side table rather than on the form itself.
//!
//! A failed submission is routed to the `on_error` callback when one was
//! supplied; otherwise it is logged at `debug` level and discarded. That
//! swallow is the single error-absorbing boundary in the crate: callers
//! that care about failures must pass `on_error`.

// ============================================================================
// Submodules
// ============================================================================

/// Attachment side table.
mod registry;

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::Error;
use crate::fetch::FormFetch;
use crate::form::{Control, Form};
use crate::host::{EventSource, SubmitEvent, SubmitHandler};
use crate::request::{RequestInit, Response};

use registry::AttachRegistry;

// ============================================================================
// Callbacks
// ============================================================================

/// Success callback: `(response, target_frame, form)`.
pub type OnResponse = Arc<dyn Fn(Response, String, Form) + Send + Sync>;

/// Per-submission configuration factory, invoked with the submitter.
pub type InitFactory = Arc<dyn Fn(&Control) -> RequestInit + Send + Sync>;

/// Error callback: `(error, action, target_frame)`.
pub type OnError = Arc<dyn Fn(Error, String, String) + Send + Sync>;

// ============================================================================
// AttachTarget
// ============================================================================

/// What [`Interceptor::attach`] accepts: a form itself, or a
/// form-associated control whose owning form is used instead.
#[derive(Debug, Clone)]
pub enum AttachTarget {
    /// A form.
    Form(Form),

    /// A submit control; attachment targets its owning form.
    Control(Control),
}

impl AttachTarget {
    /// Resolves the form this target designates.
    #[must_use]
    pub fn form(&self) -> Option<Form> {
        match self {
            Self::Form(form) => Some(form.clone()),
            Self::Control(control) => control.form.clone(),
        }
    }
}

impl From<Form> for AttachTarget {
    fn from(form: Form) -> Self {
        Self::Form(form)
    }
}

impl From<&Form> for AttachTarget {
    fn from(form: &Form) -> Self {
        Self::Form(form.clone())
    }
}

impl From<Control> for AttachTarget {
    fn from(control: Control) -> Self {
        Self::Control(control)
    }
}

// ============================================================================
// Interceptor
// ============================================================================

/// Submission interceptor bound to a request builder and an event source.
pub struct Interceptor {
    /// Request builder invoked per submission.
    fetcher: FormFetch,

    /// Submit-event registration capability.
    events: Arc<dyn EventSource>,

    /// Idempotency side table.
    registry: AttachRegistry,
}

// ============================================================================
// Interceptor - Constructor
// ============================================================================

impl Interceptor {
    /// Creates an interceptor.
    #[must_use]
    pub fn new(fetcher: FormFetch, events: Arc<dyn EventSource>) -> Self {
        Self {
            fetcher,
            events,
            registry: AttachRegistry::new(),
        }
    }
}

// ============================================================================
// Interceptor - Attach
// ============================================================================

impl Interceptor {
    /// Attaches a submit hook to the form `element` designates.
    ///
    /// No-op when the element has no resolvable form or when the form is
    /// already attached. Per submission the hook:
    ///
    /// 1. suppresses default navigation
    /// 2. resolves the effective action and target from the submitter's
    ///    overrides, falling back to the form's own
    /// 3. builds a fresh configuration via `init_factory(submitter)` when
    ///    both the factory and a submitter are present
    /// 4. dispatches through [`FormFetch::fetch`] and awaits settlement
    /// 5. calls `on_response(response, target, form)` on success, or
    ///    `on_error(error, action, target)` on failure; without
    ///    `on_error` the failure is logged and swallowed
    pub fn attach(
        &self,
        element: impl Into<AttachTarget>,
        on_response: OnResponse,
        init_factory: Option<InitFactory>,
        on_error: Option<OnError>,
    ) {
        let Some(form) = element.into().form() else {
            trace!("Attach target has no owning form; ignoring");
            return;
        };
        if !self.registry.mark_attached(form.id()) {
            trace!(form_id = %form.id(), "Submit hook already attached");
            return;
        }

        debug!(form_id = %form.id(), "Attaching submit hook");
        let fetcher = self.fetcher.clone();
        let handler_form = form.clone();
        let handler: SubmitHandler = Arc::new(move |event: SubmitEvent| {
            event.prevent_default();

            let fetcher = fetcher.clone();
            let form = handler_form.clone();
            let on_response = Arc::clone(&on_response);
            let init_factory = init_factory.clone();
            let on_error = on_error.clone();

            Box::pin(async move {
                let submitter = event.submitter;
                let action_override = submitter
                    .as_ref()
                    .and_then(|s| s.action_override())
                    .map(str::to_string);
                let target = submitter
                    .as_ref()
                    .and_then(|s| s.target_override())
                    .map_or_else(|| form.target(), str::to_string);

                let mut init = match (&init_factory, &submitter) {
                    (Some(factory), Some(submitter)) => factory(submitter),
                    _ => RequestInit::new(),
                };

                let result = fetcher
                    .fetch(&form, action_override.as_deref(), &mut init, submitter.as_ref())
                    .await;
                match result {
                    Ok(response) => on_response(response, target, form),
                    Err(error) => {
                        let action = effective_action(&form, action_override.as_deref());
                        match on_error {
                            Some(callback) => callback(error, action, target),
                            None => {
                                debug!(%error, %action, "Submission failed; no error callback")
                            }
                        }
                    }
                }
            })
        });

        self.events.on_submit(&form, handler);
    }
}

// ============================================================================
// Action Resolution
// ============================================================================

/// Resolves the action string reported to the error callback.
///
/// Falls back to the unresolved override text when it does not parse, so
/// the callback still sees what the submission was aimed at.
fn effective_action(form: &Form, action_override: Option<&str>) -> String {
    match action_override {
        Some(address) => form
            .resolve(address)
            .map_or_else(|_| address.to_string(), String::from),
        None => form.action().map_or_else(|_| String::new(), String::from),
    }
}

// ============================================================================
// Tests
// ============================================================================
