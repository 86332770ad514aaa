//! Collected form data.
//!
//! [`FormData`] is the ordered name/value pair container produced by a
//! [`FieldCollector`](crate::host::FieldCollector). Order is preserved
//! because it is observable in both URL-encoded bodies and merged query
//! strings.

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

// ============================================================================
// FormData
// ============================================================================

/// Ordered collection of name/value pairs collected from a form.
///
/// # Example
///
/// ```
/// use form_fetch::FormData;
///
/// let mut data = FormData::new();
/// data.append("q", "rust forms");
/// data.append("page", "2");
///
/// assert_eq!(data.to_urlencoded(), "q=rust+forms&page=2");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    /// Entries in collection order.
    entries: Vec<(String, String)>,
}

// ============================================================================
// FormData - Construction
// ============================================================================

impl FormData {
    /// Creates an empty container.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a name/value pair.
    #[inline]
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }
}

// ============================================================================
// FormData - Accessors
// ============================================================================

impl FormData {
    /// Returns the entries in collection order.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Returns the first value recorded under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes the entries as an `application/x-www-form-urlencoded`
    /// string.
    #[must_use]
    pub fn to_urlencoded(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str())))
            .finish()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for FormData {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut data = FormData::new();
        data.append("b", "2");
        data.append("a", "1");

        let names: Vec<_> = data.entries().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_get_returns_first_value() {
        let mut data = FormData::new();
        data.append("tag", "first");
        data.append("tag", "second");

        assert_eq!(data.get("tag"), Some("first"));
        assert_eq!(data.get("missing"), None);
    }

    #[test]
    fn test_to_urlencoded() {
        let data: FormData = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(data.to_urlencoded(), "a=1&b=2");
    }

    #[test]
    fn test_to_urlencoded_escapes() {
        let data: FormData = [("key", "a b&c=d")].into_iter().collect();
        assert_eq!(data.to_urlencoded(), "key=a+b%26c%3Dd");
    }

    #[test]
    fn test_empty() {
        let data = FormData::new();
        assert!(data.is_empty());
        assert_eq!(data.len(), 0);
        assert_eq!(data.to_urlencoded(), "");
    }
}
