//! Submission method resolution.

// ============================================================================
// Imports
// ============================================================================

use crate::form::Form;
use crate::request::RequestInit;

// ============================================================================
// resolve_method
// ============================================================================

/// Resolves the effective submission method for a form.
///
/// Precedence: an explicit `init.method` wins, then the form's
/// `data-method` override, then the form's native method attribute. When
/// `init.method` is absent the resolved value is written back into it, so
/// the dispatched request carries the method it was resolved with.
///
/// # Example
///
/// ```
/// use form_fetch::{Form, RequestInit, resolve_method};
///
/// # fn example() -> form_fetch::Result<()> {
/// let form = Form::builder("https://example.com/")
///     .method("post")
///     .build()?;
/// let mut init = RequestInit::new();
///
/// assert_eq!(resolve_method(&form, &mut init), "post");
/// assert_eq!(init.method.as_deref(), Some("post"));
/// # Ok(())
/// # }
/// ```
pub fn resolve_method(form: &Form, init: &mut RequestInit) -> String {
    if let Some(method) = &init.method {
        return method.clone();
    }

    let method = form.data_method().unwrap_or_else(|| form.method());
    init.method = Some(method.clone());
    method
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with_all_sources() -> Form {
        Form::builder("https://example.com/")
            .method("get")
            .data_method("put")
            .build()
            .unwrap()
    }

    #[test]
    fn test_init_method_wins() {
        let form = form_with_all_sources();
        let mut init = RequestInit::new().with_method("delete");

        assert_eq!(resolve_method(&form, &mut init), "delete");
        assert_eq!(init.method.as_deref(), Some("delete"));
    }

    #[test]
    fn test_data_method_beats_native_method() {
        let form = form_with_all_sources();
        let mut init = RequestInit::new();

        assert_eq!(resolve_method(&form, &mut init), "put");
        assert_eq!(init.method.as_deref(), Some("put"));
    }

    #[test]
    fn test_native_method_is_the_fallback() {
        let form = Form::builder("https://example.com/")
            .method("post")
            .build()
            .unwrap();
        let mut init = RequestInit::new();

        assert_eq!(resolve_method(&form, &mut init), "post");
    }

    #[test]
    fn test_empty_data_method_falls_through() {
        let form = Form::builder("https://example.com/")
            .method("post")
            .data_method("")
            .build()
            .unwrap();
        let mut init = RequestInit::new();

        assert_eq!(resolve_method(&form, &mut init), "post");
    }

    #[test]
    fn test_resolution_is_stable() {
        let form = form_with_all_sources();
        let mut init = RequestInit::new();

        let first = resolve_method(&form, &mut init);
        let second = resolve_method(&form, &mut init);
        assert_eq!(first, second);
    }
}
