//! Type-safe identifiers for form entities.
//!
//! Newtype wrappers prevent mixing incompatible IDs at compile time and
//! give the attachment side table a stable key that survives cloning a
//! [`Form`](crate::Form) handle.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

// ============================================================================
// FormId
// ============================================================================

/// Unique identifier for a form.
///
/// Allocated from a process-wide counter when the form is built. All
/// clones of a [`Form`](crate::Form) handle share the same ID, which is
/// what makes the interceptor's idempotency side table work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormId(u64);

static NEXT_FORM_ID: AtomicU64 = AtomicU64::new(1);

impl FormId {
    /// Allocates the next form ID.
    #[inline]
    #[must_use]
    pub(crate) fn next() -> Self {
        Self(NEXT_FORM_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw numeric value.
    #[inline]
    #[must_use]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "form-{}", self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = FormId::next();
        let b = FormId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn test_display() {
        let id = FormId(42);
        assert_eq!(id.to_string(), "form-42");
    }

    #[test]
    fn test_as_u64() {
        let id = FormId(7);
        assert_eq!(id.as_u64(), 7);
    }
}
