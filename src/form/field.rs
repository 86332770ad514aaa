//! Form field types.
//!
//! A [`Field`] models one named input inside a form. The
//! [`StandardCollector`](crate::host::StandardCollector) decides which
//! fields contribute to a submission based on [`FieldKind`] and the
//! disabled flag.

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};

// ============================================================================
// FieldKind
// ============================================================================

/// Kind of a form field.
///
/// Determines whether a field participates in a submission:
///
/// | Kind | Collected |
/// |------|-----------|
/// | [`Text`](FieldKind::Text) | always (when named and enabled) |
/// | [`Hidden`](FieldKind::Hidden) | always (when named and enabled) |
/// | [`Checkbox`](FieldKind::Checkbox) | only when checked |
/// | [`Submit`](FieldKind::Submit) | never; the active submitter carries its own name/value |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// A text-like input (text, email, search, textarea, select, ...).
    Text,

    /// A hidden input.
    Hidden,

    /// A checkbox; collected only when checked.
    Checkbox {
        /// Whether the checkbox is currently checked.
        checked: bool,
    },

    /// A submit control that is part of the form's field list.
    ///
    /// Excluded from collection: only the control that actually triggered
    /// the submission contributes a name/value pair, and that one arrives
    /// as the submitter, not through the field list.
    Submit,
}

// ============================================================================
// Field
// ============================================================================

/// A single named input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name; fields with an empty name are never collected.
    pub name: String,

    /// Current field value.
    pub value: String,

    /// Disabled fields are never collected.
    pub disabled: bool,

    /// Field kind.
    pub kind: FieldKind,
}

// ============================================================================
// Field - Constructors
// ============================================================================

impl Field {
    /// Creates a text field.
    #[inline]
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            disabled: false,
            kind: FieldKind::Text,
        }
    }

    /// Creates a hidden field.
    #[inline]
    #[must_use]
    pub fn hidden(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            disabled: false,
            kind: FieldKind::Hidden,
        }
    }

    /// Creates a checkbox field.
    #[inline]
    #[must_use]
    pub fn checkbox(name: impl Into<String>, value: impl Into<String>, checked: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            disabled: false,
            kind: FieldKind::Checkbox { checked },
        }
    }

    /// Creates a submit control field.
    #[inline]
    #[must_use]
    pub fn submit(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            disabled: false,
            kind: FieldKind::Submit,
        }
    }

    /// Marks the field as disabled.
    #[inline]
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
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
    fn test_text_constructor() {
        let field = Field::text("email", "user@example.com");
        assert_eq!(field.name, "email");
        assert_eq!(field.value, "user@example.com");
        assert!(!field.disabled);
        assert_eq!(field.kind, FieldKind::Text);
    }

    #[test]
    fn test_checkbox_constructor() {
        let field = Field::checkbox("opt-in", "yes", true);
        assert_eq!(field.kind, FieldKind::Checkbox { checked: true });
    }

    #[test]
    fn test_disabled_marker() {
        let field = Field::text("name", "x").disabled();
        assert!(field.disabled);
    }
}
