//! Builder pattern for form construction.
//!
//! Provides a fluent API for assembling [`Form`] instances.
//!
//! # Example
//!
//! ```
//! use form_fetch::{Field, Form};
//!
//! # fn example() -> form_fetch::Result<()> {
//! let form = Form::builder("https://example.com/login")
//!     .action("/session")
//!     .method("post")
//!     .field(Field::text("user", "alice"))
//!     .field(Field::text("password", "hunter2"))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use url::Url;

use crate::error::Result;
use crate::identifiers::FormId;

use super::core::{Form, FormInner};
use super::field::Field;

// ============================================================================
// Defaults
// ============================================================================

/// Default submission method.
const DEFAULT_METHOD: &str = "get";

/// Default encoding type.
const DEFAULT_ENCTYPE: &str = "application/x-www-form-urlencoded";

// ============================================================================
// FormBuilder
// ============================================================================

/// Builder for configuring a [`Form`] instance.
///
/// Use [`Form::builder()`] to create a new builder.
#[derive(Debug, Clone)]
pub struct FormBuilder {
    /// Base document URL text, parsed at build time.
    base: String,
    /// `action` attribute.
    action: Option<String>,
    /// `method` attribute.
    method: String,
    /// `data-method` attribute.
    data_method: Option<String>,
    /// `enctype` attribute.
    enctype: String,
    /// `target` attribute.
    target: String,
    /// Fields in document order.
    fields: Vec<Field>,
}

// ============================================================================
// FormBuilder Implementation
// ============================================================================

impl FormBuilder {
    /// Creates a builder for a form whose document lives at `base`.
    #[must_use]
    pub(crate) fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            action: None,
            method: DEFAULT_METHOD.to_string(),
            data_method: None,
            enctype: DEFAULT_ENCTYPE.to_string(),
            target: String::new(),
            fields: Vec::new(),
        }
    }

    /// Sets the `action` attribute.
    ///
    /// Relative addresses resolve against the base document URL at
    /// submission time.
    #[inline]
    #[must_use]
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Sets the `method` attribute.
    ///
    /// Stored lowercase, matching the `HTMLFormElement.method` reflection
    /// rules.
    #[inline]
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into().to_ascii_lowercase();
        self
    }

    /// Sets the `data-method` override attribute.
    ///
    /// Takes precedence over the native method during
    /// [`resolve_method`](crate::fetch::resolve_method).
    #[inline]
    #[must_use]
    pub fn data_method(mut self, method: impl Into<String>) -> Self {
        self.data_method = Some(method.into());
        self
    }

    /// Sets the `enctype` attribute.
    #[inline]
    #[must_use]
    pub fn enctype(mut self, enctype: impl Into<String>) -> Self {
        self.enctype = enctype.into();
        self
    }

    /// Sets the `target` attribute.
    #[inline]
    #[must_use]
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Appends a field.
    #[inline]
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Builds the form, validating the base document URL.
    ///
    /// # Errors
    ///
    /// [`Error::Url`](crate::Error::Url) if the base is not an absolute
    /// URL.
    pub fn build(self) -> Result<Form> {
        let base = Url::parse(&self.base)?;

        Ok(Form::from_inner(FormInner {
            id: FormId::next(),
            base,
            action: self.action,
            method: self.method,
            data_method: self.data_method,
            enctype: self.enctype,
            target: self.target,
            fields: self.fields,
        }))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let form = Form::builder("https://example.com/").build().unwrap();
        assert_eq!(form.method(), "get");
        assert_eq!(form.enctype(), "application/x-www-form-urlencoded");
        assert_eq!(form.target(), "");
        assert!(form.fields().is_empty());
    }

    #[test]
    fn test_build_fails_on_relative_base() {
        let result = Form::builder("/page").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_method_is_lowercased() {
        let form = Form::builder("https://example.com/")
            .method("POST")
            .build()
            .unwrap();
        assert_eq!(form.method(), "post");
    }

    #[test]
    fn test_fields_keep_order() {
        let form = Form::builder("https://example.com/")
            .field(Field::text("first", "1"))
            .field(Field::text("second", "2"))
            .build()
            .unwrap();

        let names: Vec<_> = form.fields().iter().map(|f| f.name.clone()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_builder_is_clone() {
        let builder = Form::builder("https://example.com/").method("post");
        let cloned = builder.clone();
        assert_eq!(cloned.method, "post");
    }
}
