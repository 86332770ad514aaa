//! Field collection capability.
//!
//! Collecting a form's fields into a [`FormData`] container is the one
//! place where HTML semantics leak into the request builder, so it sits
//! behind a trait: hosts with a real DOM can delegate to it, while
//! [`StandardCollector`] implements the standard rules over the crate's
//! own [`Form`] model.

// ============================================================================
// Imports
// ============================================================================

use crate::form::{Control, FieldKind, Form, FormData};

// ============================================================================
// FieldCollector
// ============================================================================

/// Enumerates a form's fields into submission data.
pub trait FieldCollector: Send + Sync {
    /// Collects the name/value pairs a submission of `form` carries,
    /// honoring the submitter inclusion rules.
    fn collect(&self, form: &Form, submitter: Option<&Control>) -> FormData;
}

// ============================================================================
// StandardCollector
// ============================================================================

/// Standard form-data collection semantics.
///
/// Mirrors `new FormData(form, submitter)`:
///
/// - disabled fields are skipped
/// - fields with an empty name are skipped
/// - checkboxes contribute only when checked
/// - submit controls in the field list never contribute
/// - the active submitter's own name/value pair is appended last
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCollector;

impl FieldCollector for StandardCollector {
    fn collect(&self, form: &Form, submitter: Option<&Control>) -> FormData {
        let mut data = FormData::new();

        for field in form.fields() {
            if field.disabled || field.name.is_empty() {
                continue;
            }
            match field.kind {
                FieldKind::Text | FieldKind::Hidden => data.append(field.name, field.value),
                FieldKind::Checkbox { checked } if checked => {
                    data.append(field.name, field.value);
                }
                FieldKind::Checkbox { .. } | FieldKind::Submit => {}
            }
        }

        if let Some((name, value)) = submitter.and_then(Control::submission_entry) {
            data.append(name, value);
        }

        data
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use crate::form::Field;

    fn form() -> Form {
        Form::builder("https://example.com/")
            .field(Field::text("name", "alice"))
            .field(Field::hidden("csrf", "token123"))
            .field(Field::text("ignored", "x").disabled())
            .field(Field::text("", "unnamed"))
            .field(Field::checkbox("news", "yes", true))
            .field(Field::checkbox("spam", "yes", false))
            .field(Field::submit("save", "Save"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_collection_rules() {
        let data = StandardCollector.collect(&form(), None);

        let names: Vec<_> = data.entries().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["name", "csrf", "news"]);
    }

    #[test]
    fn test_submitter_entry_appended_last() {
        let submitter = Control::named("save", "Save");
        let data = StandardCollector.collect(&form(), Some(&submitter));

        let last = data.entries().last().unwrap();
        assert_eq!(last, &("save".to_string(), "Save".to_string()));
    }

    #[test]
    fn test_anonymous_submitter_contributes_nothing() {
        let submitter = Control::submit();
        let with = StandardCollector.collect(&form(), Some(&submitter));
        let without = StandardCollector.collect(&form(), None);

        assert_eq!(with, without);
    }

    #[test]
    fn test_unselected_submit_field_excluded() {
        // The "save" submit field sits in the field list but no submitter
        // selected it, so its pair must not appear.
        let data = StandardCollector.collect(&form(), None);
        assert_eq!(data.get("save"), None);
    }
}
