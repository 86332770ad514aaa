//! Submission event capability.
//!
//! [`EventSource`] is the registration primitive for submit hooks. The
//! crate ships [`EventBus`], an in-memory binding used by the tests and
//! doc examples; a browser-backed host would instead forward real DOM
//! submit events into the registered handlers.

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures_util::future::BoxFuture;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::form::{Control, Form};
use crate::identifiers::FormId;

// ============================================================================
// SubmitEvent
// ============================================================================

/// A single submission event delivered to registered hooks.
///
/// Clones share the prevent-default flag, so any handler calling
/// [`prevent_default`](SubmitEvent::prevent_default) suppresses the
/// host's native navigation for this submission.
#[derive(Debug, Clone)]
pub struct SubmitEvent {
    /// The control that triggered this submission, if any.
    pub submitter: Option<Control>,

    /// Shared prevent-default flag.
    prevented: Arc<AtomicBool>,
}

impl SubmitEvent {
    /// Creates an event for a submission triggered by `submitter`.
    #[must_use]
    pub fn new(submitter: Option<Control>) -> Self {
        Self {
            submitter,
            prevented: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Suppresses the host's default navigation for this submission.
    #[inline]
    pub fn prevent_default(&self) {
        self.prevented.store(true, Ordering::Relaxed);
    }

    /// Returns `true` if default navigation was suppressed.
    #[inline]
    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.prevented.load(Ordering::Relaxed)
    }
}

// ============================================================================
// SubmitHandler
// ============================================================================

/// A registered submit hook.
///
/// Handlers are async: each invocation returns a boxed future that the
/// event source drives to completion.
pub type SubmitHandler = Arc<dyn Fn(SubmitEvent) -> BoxFuture<'static, ()> + Send + Sync>;

// ============================================================================
// EventSource
// ============================================================================

/// Registration primitive for submission events.
pub trait EventSource: Send + Sync {
    /// Registers a submit hook for `form`.
    ///
    /// The hook fires once per subsequent submission of that form.
    fn on_submit(&self, form: &Form, handler: SubmitHandler);
}

// ============================================================================
// EventBus
// ============================================================================

/// In-memory event source.
///
/// Dispatch a submission with [`EventBus::submit`]; every hook registered
/// for that form runs to completion, and the return value reports whether
/// any of them suppressed default navigation.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use form_fetch::host::{EventBus, EventSource, SubmitEvent};
///
/// # async fn example() -> form_fetch::Result<()> {
/// let bus = EventBus::new();
/// let form = form_fetch::Form::builder("https://example.com/").build()?;
///
/// bus.on_submit(&form, Arc::new(|event: SubmitEvent| {
///     event.prevent_default();
///     Box::pin(async {})
/// }));
///
/// let prevented = bus.submit(&form, None).await;
/// assert!(prevented);
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct EventBus {
    /// Registered hooks per form.
    handlers: Mutex<FxHashMap<FormId, Vec<SubmitHandler>>>,
}

impl EventBus {
    /// Creates an empty bus.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of hooks registered for `form`.
    #[must_use]
    pub fn handler_count(&self, form: &Form) -> usize {
        self.handlers
            .lock()
            .get(&form.id())
            .map_or(0, Vec::len)
    }

    /// Dispatches a submission of `form` triggered by `submitter`.
    ///
    /// Runs each registered hook to completion in registration order and
    /// returns `true` when default navigation was suppressed.
    pub async fn submit(&self, form: &Form, submitter: Option<Control>) -> bool {
        let handlers: Vec<SubmitHandler> = self
            .handlers
            .lock()
            .get(&form.id())
            .cloned()
            .unwrap_or_default();

        trace!(form_id = %form.id(), hooks = handlers.len(), "Dispatching submit event");

        let event = SubmitEvent::new(submitter);
        for handler in handlers {
            handler(event.clone()).await;
        }

        event.default_prevented()
    }
}

impl EventSource for EventBus {
    fn on_submit(&self, form: &Form, handler: SubmitHandler) {
        trace!(form_id = %form.id(), "Registering submit hook");
        self.handlers
            .lock()
            .entry(form.id())
            .or_default()
            .push(handler);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::AtomicUsize;

    fn form() -> Form {
        Form::builder("https://example.com/").build().unwrap()
    }

    #[tokio::test]
    async fn test_submit_runs_registered_hooks() {
        let bus = EventBus::new();
        let form = form();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        bus.on_submit(
            &form,
            Arc::new(move |_event| {
                let counter = Arc::clone(&counter);
                Box::pin(async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                })
            }),
        );

        bus.submit(&form, None).await;
        bus.submit(&form, None).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_submit_without_hooks_is_not_prevented() {
        let bus = EventBus::new();
        let prevented = bus.submit(&form(), None).await;
        assert!(!prevented);
    }

    #[tokio::test]
    async fn test_prevent_default_is_shared() {
        let bus = EventBus::new();
        let form = form();

        bus.on_submit(
            &form,
            Arc::new(|event: SubmitEvent| {
                event.prevent_default();
                Box::pin(async {})
            }),
        );

        assert!(bus.submit(&form, None).await);
    }

    #[tokio::test]
    async fn test_hooks_are_scoped_per_form() {
        let bus = EventBus::new();
        let first = form();
        let second = form();

        bus.on_submit(
            &first,
            Arc::new(|event: SubmitEvent| {
                event.prevent_default();
                Box::pin(async {})
            }),
        );

        assert_eq!(bus.handler_count(&first), 1);
        assert_eq!(bus.handler_count(&second), 0);
        assert!(!bus.submit(&second, None).await);
    }

    #[tokio::test]
    async fn test_submitter_reaches_hook() {
        let bus = EventBus::new();
        let form = form();
        let seen = Arc::new(Mutex::new(None::<String>));

        let sink = Arc::clone(&seen);
        bus.on_submit(
            &form,
            Arc::new(move |event: SubmitEvent| {
                let sink = Arc::clone(&sink);
                Box::pin(async move {
                    *sink.lock() = event.submitter.and_then(|s| s.name);
                })
            }),
        );

        bus.submit(&form, Some(Control::named("go", "1"))).await;
        assert_eq!(seen.lock().as_deref(), Some("go"));
    }
}
