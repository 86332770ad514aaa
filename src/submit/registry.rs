//! Attachment side table.
//!
//! The original stashed an ad-hoc idempotency flag directly on the form
//! object. Here attachment state lives in a side table owned by the
//! interceptor, keyed by [`FormId`], so the form entity stays clean.

// ============================================================================
// Imports
// ============================================================================

use parking_lot::Mutex;
use rustc_hash::FxHashSet;

use crate::identifiers::FormId;

// ============================================================================
// AttachRegistry
// ============================================================================

/// Tracks which forms already have a submit hook.
///
/// Per form the state machine is `unattached -> attached`, one-way; there
/// is no detach operation.
#[derive(Debug, Default)]
pub(crate) struct AttachRegistry {
    /// Forms with an attached hook.
    attached: Mutex<FxHashSet<FormId>>,
}

impl AttachRegistry {
    /// Creates an empty registry.
    #[inline]
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Marks `id` as attached.
    ///
    /// Returns `true` when this call performed the transition and `false`
    /// when the form was already attached. Check and set happen under one
    /// lock acquisition, so two racing callers cannot both observe
    /// `true`.
    pub(crate) fn mark_attached(&self, id: FormId) -> bool {
        self.attached.lock().insert(id)
    }

    /// Returns `true` if `id` has an attached hook.
    #[cfg(test)]
    pub(crate) fn is_attached(&self, id: FormId) -> bool {
        self.attached.lock().contains(&id)
    }
}

// ============================================================================
// Tests
// ============================================================================
