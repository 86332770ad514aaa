//! Form-associated submit controls.
//!
//! A [`Control`] models a button or submit input. It plays two roles:
//!
//! - the element handed to
//!   [`Interceptor::attach`](crate::submit::Interceptor::attach), which
//!   resolves the owning form through it, and
//! - the submitter captured in a
//!   [`SubmitEvent`](crate::host::SubmitEvent), whose `formaction` /
//!   `formtarget` overrides take precedence over the form's own
//!   action/target.

// ============================================================================
// Imports
// ============================================================================

use super::core::Form;

// ============================================================================
// Control
// ============================================================================

/// A button or input that can trigger a form submission.
#[derive(Debug, Clone, Default)]
pub struct Control {
    /// Control name; when non-empty, the name/value pair is appended to
    /// the collected form data for submissions this control triggers.
    pub name: Option<String>,

    /// Control value.
    pub value: String,

    /// `formaction` override; takes precedence over the form's action.
    pub formaction: Option<String>,

    /// `formtarget` override; takes precedence over the form's target
    /// when non-empty.
    pub formtarget: Option<String>,

    /// Owning form, if associated with one.
    pub form: Option<Form>,
}

// ============================================================================
// Control - Constructors
// ============================================================================

impl Control {
    /// Creates an anonymous submit control.
    #[inline]
    #[must_use]
    pub fn submit() -> Self {
        Self::default()
    }

    /// Creates a named submit control.
    #[inline]
    #[must_use]
    pub fn named(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: value.into(),
            ..Self::default()
        }
    }

    /// Sets the `formaction` override.
    #[inline]
    #[must_use]
    pub fn with_formaction(mut self, action: impl Into<String>) -> Self {
        self.formaction = Some(action.into());
        self
    }

    /// Sets the `formtarget` override.
    #[inline]
    #[must_use]
    pub fn with_formtarget(mut self, target: impl Into<String>) -> Self {
        self.formtarget = Some(target.into());
        self
    }

    /// Associates the control with its owning form.
    #[inline]
    #[must_use]
    pub fn with_form(mut self, form: &Form) -> Self {
        self.form = Some(form.clone());
        self
    }
}

// ============================================================================
// Control - Accessors
// ============================================================================

impl Control {
    /// Returns the `formaction` override, treating an empty attribute as
    /// unset.
    #[must_use]
    pub fn action_override(&self) -> Option<&str> {
        self.formaction.as_deref().filter(|a| !a.is_empty())
    }

    /// Returns the `formtarget` override, treating an empty attribute as
    /// unset.
    #[must_use]
    pub fn target_override(&self) -> Option<&str> {
        self.formtarget.as_deref().filter(|t| !t.is_empty())
    }

    /// Returns the name/value pair this control contributes when it is
    /// the active submitter.
    #[must_use]
    pub fn submission_entry(&self) -> Option<(&str, &str)> {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .map(|n| (n, self.value.as_str()))
    }
}

// ============================================================================
// Tests
// ============================================================================
