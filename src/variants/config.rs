//! Variant tables and default selections.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::error::VariantError;
use super::scalar;
use super::CLASS_NAME_KEY;

/// Maps each value of one variant group to its class token.
pub type VariantGroup = IndexMap<String, String>;

/// Maps group names to their groups, in declaration order.
pub type VariantTable = IndexMap<String, VariantGroup>;

/// The variant table and default selections a resolver is bound to.
///
/// Group order is declaration order, and it decides the order of the
/// resolved tokens. Both fields may be empty, which behaves exactly like a
/// resolver with no configuration at all.
///
/// # Example
///
/// ```rust
/// use classvariance::VariantConfig;
///
/// let config = VariantConfig::new()
///     .variant("size", [("sm", "btn-sm"), ("lg", "btn-lg")])
///     .variant("tone", [("primary", "btn-primary")])
///     .default_variant("size", "sm");
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.group_names().collect::<Vec<_>>(), ["size", "tone"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantConfig {
    #[serde(
        default,
        deserialize_with = "scalar::variant_table",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub variants: VariantTable,
    #[serde(
        default,
        alias = "default_variants",
        deserialize_with = "scalar::string_map",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub default_variants: IndexMap<String, String>,
}

impl VariantConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a variant group, returning the updated config for chaining.
    ///
    /// Declaring a group twice extends it in place: it keeps its original
    /// position and later values replace earlier ones with the same key.
    pub fn variant<I, K, V>(mut self, group: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entry = self.variants.entry(group.into()).or_default();
        for (value, token) in values {
            entry.insert(value.into(), token.into());
        }
        self
    }

    /// Sets the value used for `group` when a selection doesn't name one.
    pub fn default_variant(mut self, group: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_variants.insert(group.into(), value.into());
        self
    }

    /// Returns the group names in declaration order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.variants.keys().map(String::as_str)
    }

    /// Returns the group named `group`, if declared.
    pub fn group(&self, group: &str) -> Option<&VariantGroup> {
        self.variants.get(group)
    }

    /// Returns the default value for `group`, if any.
    pub fn default_for(&self, group: &str) -> Option<&str> {
        self.default_variants.get(group).map(String::as_str)
    }

    /// Checks that the configuration is self-consistent.
    ///
    /// Resolution works on any configuration; this is for callers who want
    /// mistakes reported instead of silently producing fewer classes.
    pub fn validate(&self) -> Result<(), VariantError> {
        if self.variants.contains_key(CLASS_NAME_KEY) {
            return Err(VariantError::ReservedGroupName {
                group: CLASS_NAME_KEY.to_string(),
            });
        }

        for (group, value) in &self.default_variants {
            let Some(values) = self.variants.get(group) else {
                return Err(VariantError::UnknownDefaultGroup {
                    group: group.clone(),
                });
            };
            if !values.contains_key(value) {
                return Err(VariantError::UnknownDefaultValue {
                    group: group.clone(),
                    value: value.clone(),
                });
            }
        }

        Ok(())
    }
}
