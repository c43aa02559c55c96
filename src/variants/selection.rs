//! Caller selections.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The variant values a caller picks, plus an optional extra class.
///
/// Group values and the extra class live in separate fields, so a group can
/// never be mistaken for the extra class. A group can be set to a value,
/// explicitly unset (which also suppresses its default), or left out.
///
/// Serialized form is a flat object: group names map to values (`null` for
/// unset) and the reserved `className` key holds the extra class.
///
/// # Example
///
/// ```rust
/// use classvariance::Selection;
///
/// let selection: Selection =
///     serde_json::from_str(r#"{"size": "lg", "tone": null, "className": "mt-4"}"#).unwrap();
///
/// assert_eq!(selection.value("size"), Some(Some("lg")));
/// assert_eq!(selection.value("tone"), Some(None));
/// assert_eq!(selection.value("shape"), None);
/// assert_eq!(selection.extra_class(), Some("mt-4"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(rename = "className", default, skip_serializing_if = "Option::is_none")]
    class_name: Option<String>,
    #[serde(flatten)]
    variants: IndexMap<String, Option<String>>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks `value` for `group`.
    pub fn variant(mut self, group: impl Into<String>, value: impl Into<String>) -> Self {
        self.variants.insert(group.into(), Some(value.into()));
        self
    }

    /// Marks `group` as present but without a value, overriding any default.
    pub fn unset(mut self, group: impl Into<String>) -> Self {
        self.variants.insert(group.into(), None);
        self
    }

    /// Sets the extra class appended after all variant classes.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Looks up `group`.
    ///
    /// Returns `None` when the group isn't mentioned, `Some(None)` when it
    /// was explicitly unset, and `Some(Some(value))` otherwise.
    pub fn value(&self, group: &str) -> Option<Option<&str>> {
        self.variants.get(group).map(Option::as_deref)
    }

    /// Returns the extra class, if one was given.
    pub fn extra_class(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Iterates over the mentioned groups in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.variants
            .iter()
            .map(|(group, value)| (group.as_str(), value.as_deref()))
    }

    /// Returns true if no group and no extra class were given.
    pub fn is_empty(&self) -> bool {
        self.class_name.is_none() && self.variants.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Selection
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Selection::new(), |selection, (group, value)| {
                selection.variant(group, value)
            })
    }
}
