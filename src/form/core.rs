//! Form entity.
//!
//! [`Form`] is a cheaply cloneable handle to shared, mutable form state.
//! Clones behave like multiple references to the same live element: field
//! edits through one handle are visible through all of them, and every
//! clone reports the same [`FormId`].
//!
//! # Example
//!
//! ```
//! use form_fetch::Form;
//!
//! # fn example() -> form_fetch::Result<()> {
//! let form = Form::builder("https://example.com/signup")
//!     .action("/register")
//!     .method("post")
//!     .build()?;
//!
//! assert_eq!(form.action()?.as_str(), "https://example.com/register");
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use url::Url;

use crate::error::{Error, Result};
use crate::identifiers::FormId;

use super::builder::FormBuilder;
use super::field::Field;

// ============================================================================
// Types
// ============================================================================

/// Internal shared state for a form.
pub(crate) struct FormInner {
    /// This form's unique ID.
    pub id: FormId,

    /// Base document URL; relative actions resolve against it.
    pub base: Url,

    /// `action` attribute, if declared.
    pub action: Option<String>,

    /// `method` attribute, lowercase.
    pub method: String,

    /// `data-method` attribute override, if declared.
    pub data_method: Option<String>,

    /// `enctype` attribute.
    pub enctype: String,

    /// `target` attribute.
    pub target: String,

    /// Fields in document order.
    pub fields: Vec<Field>,
}

// ============================================================================
// Form
// ============================================================================

/// A handle to a form's shared state.
///
/// Built with [`Form::builder`]. All metadata accessors return owned
/// snapshots so no lock is held across caller code.
#[derive(Clone)]
pub struct Form {
    /// Shared inner state.
    pub(crate) inner: Arc<RwLock<FormInner>>,
}

// ============================================================================
// Form - Display
// ============================================================================

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("Form")
            .field("id", &inner.id)
            .field("action", &inner.action)
            .field("method", &inner.method)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Form - Constructor
// ============================================================================

impl Form {
    /// Creates a builder for a form whose document lives at `base`.
    #[inline]
    #[must_use]
    pub fn builder(base: impl Into<String>) -> FormBuilder {
        FormBuilder::new(base)
    }

    /// Creates a form handle from validated parts.
    pub(crate) fn from_inner(inner: FormInner) -> Self {
        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }
}

// ============================================================================
// Form - Accessors
// ============================================================================

impl Form {
    /// Returns this form's ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> FormId {
        self.inner.read().id
    }

    /// Returns the declared submission method.
    #[must_use]
    pub fn method(&self) -> String {
        self.inner.read().method.clone()
    }

    /// Returns the `data-method` override, treating an empty attribute as
    /// unset.
    #[must_use]
    pub fn data_method(&self) -> Option<String> {
        self.inner
            .read()
            .data_method
            .clone()
            .filter(|m| !m.is_empty())
    }

    /// Returns the declared encoding type.
    #[must_use]
    pub fn enctype(&self) -> String {
        self.inner.read().enctype.clone()
    }

    /// Returns the declared target frame name.
    #[must_use]
    pub fn target(&self) -> String {
        self.inner.read().target.clone()
    }

    /// Returns a snapshot of the fields in document order.
    #[must_use]
    pub fn fields(&self) -> Vec<Field> {
        self.inner.read().fields.clone()
    }

    /// Resolves the form's action to an absolute URL.
    ///
    /// An absent or empty `action` attribute resolves to the document URL
    /// itself, matching the `HTMLFormElement.action` reflection rules.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidAction`] if the attribute does not parse relative
    /// to the base document URL.
    pub fn action(&self) -> Result<Url> {
        let inner = self.inner.read();
        match inner.action.as_deref().filter(|a| !a.is_empty()) {
            Some(action) => inner
                .base
                .join(action)
                .map_err(|source| Error::invalid_action(action, source)),
            None => Ok(inner.base.clone()),
        }
    }

    /// Resolves an arbitrary address against the form's base document URL.
    ///
    /// Used for submitter `formaction` overrides.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidAction`] if the address does not parse.
    pub fn resolve(&self, address: &str) -> Result<Url> {
        self.inner
            .read()
            .base
            .join(address)
            .map_err(|source| Error::invalid_action(address, source))
    }
}

// ============================================================================
// Form - Mutators
// ============================================================================

impl Form {
    /// Sets the value of the first field named `name`.
    ///
    /// Returns `false` when no such field exists.
    pub fn set_value(&self, name: &str, value: impl Into<String>) -> bool {
        let mut inner = self.inner.write();
        match inner.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Appends a field at the end of the form.
    pub fn push_field(&self, field: Field) {
        self.inner.write().fields.push(field);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> Form {
        Form::builder("https://example.com/page")
            .field(Field::text("a", "1"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_action_defaults_to_base() {
        let form = form();
        assert_eq!(form.action().unwrap().as_str(), "https://example.com/page");
    }

    #[test]
    fn test_action_resolves_relative() {
        let form = Form::builder("https://example.com/a/page")
            .action("submit")
            .build()
            .unwrap();
        assert_eq!(
            form.action().unwrap().as_str(),
            "https://example.com/a/submit"
        );
    }

    #[test]
    fn test_action_keeps_absolute() {
        let form = Form::builder("https://example.com/")
            .action("https://api.example.org/v1/forms")
            .build()
            .unwrap();
        assert_eq!(
            form.action().unwrap().as_str(),
            "https://api.example.org/v1/forms"
        );
    }

    #[test]
    fn test_empty_action_attribute_defaults_to_base() {
        let form = Form::builder("https://example.com/page")
            .action("")
            .build()
            .unwrap();
        assert_eq!(form.action().unwrap().as_str(), "https://example.com/page");
    }

    #[test]
    fn test_clones_share_state() {
        let form = form();
        let other = form.clone();

        assert!(other.set_value("a", "changed"));
        assert_eq!(form.fields()[0].value, "changed");
        assert_eq!(form.id(), other.id());
    }

    #[test]
    fn test_set_value_missing_field() {
        let form = form();
        assert!(!form.set_value("missing", "x"));
    }

    #[test]
    fn test_empty_data_method_is_unset() {
        let form = Form::builder("https://example.com/")
            .data_method("")
            .build()
            .unwrap();
        assert_eq!(form.data_method(), None);
    }
}
