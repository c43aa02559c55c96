//! Variant resolution.

use serde::{Deserialize, Serialize};

use super::config::VariantConfig;
use super::error::VariantError;
use super::selection::Selection;
use super::CLASS_NAME_KEY;
use crate::classes::ClassList;

/// A base class bound to a variant configuration.
///
/// [`resolve`](Self::resolve) turns a [`Selection`] into the class string for
/// one element: the base class, then one class per variant group in
/// declaration order, then the selection's extra class. Groups whose
/// effective value is missing, or isn't in the group, contribute nothing.
///
/// # Example
///
/// ```rust
/// use classvariance::{Selection, VariantConfig, VariantResolver};
///
/// let button = VariantResolver::with_config(
///     "btn",
///     VariantConfig::new()
///         .variant("size", [("sm", "btn-sm"), ("lg", "btn-lg")])
///         .variant("tone", [("primary", "btn-primary")])
///         .default_variant("size", "sm"),
/// );
///
/// let classes = button.resolve(&Selection::new().variant("tone", "primary").class_name("extra"));
/// assert_eq!(classes, "btn btn-sm btn-primary extra");
///
/// assert_eq!(button.resolve(&Selection::new().variant("size", "lg")), "btn btn-lg");
/// assert_eq!(button.resolve(&Selection::new().variant("size", "xl")), "btn");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantResolver {
    base: String,
    #[serde(flatten)]
    config: VariantConfig,
}

impl VariantResolver {
    /// Creates a resolver with no variants.
    pub fn new(base: impl Into<String>) -> Self {
        Self::with_config(base, VariantConfig::default())
    }

    /// Creates a resolver bound to `config`.
    pub fn with_config(base: impl Into<String>, config: VariantConfig) -> Self {
        Self {
            base: base.into(),
            config,
        }
    }

    /// Returns the base class.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Returns the bound configuration.
    pub fn config(&self) -> &VariantConfig {
        &self.config
    }

    /// Resolves `selection` to a space-joined class string.
    pub fn resolve(&self, selection: &Selection) -> String {
        let mut classes = ClassList::new();
        classes.push(&self.base);

        for (group, values) in &self.config.variants {
            let token = self
                .effective_value(group, selection)
                .and_then(|value| values.get(value));
            if let Some(token) = token {
                classes.push(token);
            }
        }

        if let Some(extra) = selection.extra_class() {
            classes.push(extra);
        }

        classes.build()
    }

    /// Resolves with an empty selection, so only defaults apply.
    pub fn resolve_default(&self) -> String {
        self.resolve(&Selection::new())
    }

    /// Checks that `selection` only names declared groups and values.
    ///
    /// Explicitly unset groups are accepted. The extra class is never checked.
    pub fn check(&self, selection: &Selection) -> Result<(), VariantError> {
        for (group, value) in selection.iter() {
            let Some(values) = self.config.group(group) else {
                return Err(VariantError::UnknownGroup {
                    group: group.to_string(),
                });
            };
            if let Some(value) = value {
                if !values.contains_key(value) {
                    return Err(VariantError::UnknownValue {
                        group: group.to_string(),
                        value: value.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Caller value if the group is mentioned, else the default.
    ///
    /// A group that shares the reserved key reads the extra class instead,
    /// since the selection keeps that value in its own field.
    fn effective_value<'a>(&'a self, group: &str, selection: &'a Selection) -> Option<&'a str> {
        let chosen = if group == CLASS_NAME_KEY {
            selection.extra_class().map(Some)
        } else {
            selection.value(group)
        };

        chosen
            .unwrap_or_else(|| self.config.default_for(group))
            .filter(|value| !value.is_empty())
    }
}

/// Binds `base` and `config` into a resolving closure.
///
/// This is the two-stage form of [`VariantResolver`]: the returned closure
/// owns the configuration and maps a selection to its class string.
///
/// # Example
///
/// ```rust
/// use classvariance::{cva, Selection, VariantConfig};
///
/// let badge = cva("badge", VariantConfig::new().variant("tone", [("info", "badge-info")]));
/// assert_eq!(badge(&Selection::new().variant("tone", "info")), "badge badge-info");
/// assert_eq!(badge(&Selection::new()), "badge");
/// ```
pub fn cva(base: impl Into<String>, config: VariantConfig) -> impl Fn(&Selection) -> String {
    let resolver = VariantResolver::with_config(base, config);
    move |selection: &Selection| resolver.resolve(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn button() -> VariantResolver {
        VariantResolver::with_config(
            "btn",
            VariantConfig::new()
                .variant("size", [("sm", "btn-sm"), ("lg", "btn-lg")])
                .variant("tone", [("primary", "btn-primary")])
                .default_variant("size", "sm"),
        )
    }

    #[test]
    fn test_defaults_and_extra() {
        let selection = Selection::new().variant("tone", "primary").class_name("extra");
        assert_eq!(button().resolve(&selection), "btn btn-sm btn-primary extra");
    }

    #[test]
    fn test_caller_overrides_default() {
        let selection = Selection::new().variant("size", "lg");
        assert_eq!(button().resolve(&selection), "btn btn-lg");
    }

    #[test]
    fn test_unknown_value_contributes_nothing() {
        let selection = Selection::new().variant("size", "xl");
        assert_eq!(button().resolve(&selection), "btn");
    }

    #[test]
    fn test_unknown_group_ignored() {
        let selection = Selection::new().variant("shape", "round");
        assert_eq!(button().resolve(&selection), "btn btn-sm");
    }

    #[test]
    fn test_unset_suppresses_default() {
        let selection = Selection::new().unset("size").variant("tone", "primary");
        assert_eq!(button().resolve(&selection), "btn btn-primary");
    }

    #[test]
    fn test_empty_value_contributes_nothing() {
        let resolver = VariantResolver::with_config(
            "x",
            VariantConfig::new().variant("state", [("", "x-blank")]),
        );
        let selection = Selection::new().variant("state", "");
        assert_eq!(resolver.resolve(&selection), "x");
    }

    #[test]
    fn test_resolve_default() {
        assert_eq!(button().resolve_default(), "btn btn-sm");
    }

    #[test]
    fn test_order_follows_declaration_not_selection() {
        let resolver = VariantResolver::with_config(
            "b",
            VariantConfig::new()
                .variant("first", [("on", "f")])
                .variant("second", [("on", "s")]),
        );
        let selection = Selection::new().variant("second", "on").variant("first", "on");
        assert_eq!(resolver.resolve(&selection), "b f s");
    }

    #[test]
    fn test_no_config() {
        let resolver = VariantResolver::new("plain");
        assert_eq!(resolver.resolve_default(), "plain");
        assert_eq!(
            resolver.resolve(&Selection::new().variant("size", "lg").class_name("x")),
            "plain x"
        );
    }

    #[test]
    fn test_empty_base_has_no_leading_token() {
        let resolver =
            VariantResolver::with_config("", VariantConfig::new().variant("size", [("lg", "lg")]));
        assert_eq!(resolver.resolve(&Selection::new().variant("size", "lg")), "lg");
        assert_eq!(resolver.resolve_default(), "");
    }

    #[test]
    fn test_empty_extra_elided() {
        let selection = Selection::new().class_name("  ");
        assert_eq!(button().resolve(&selection), "btn btn-sm");
    }

    #[test]
    fn test_reserved_group_reads_extra_class() {
        let resolver = VariantResolver::with_config(
            "b",
            VariantConfig::new()
                .variant(CLASS_NAME_KEY, [("wide", "w-full")])
                .default_variant(CLASS_NAME_KEY, "wide"),
        );
        assert_eq!(resolver.resolve_default(), "b w-full");
        assert_eq!(
            resolver.resolve(&Selection::new().class_name("other")),
            "b other"
        );
    }

    #[test]
    fn test_check_accepts_known() {
        let selection = Selection::new()
            .variant("size", "lg")
            .unset("tone")
            .class_name("anything");
        assert!(button().check(&selection).is_ok());
    }

    #[test]
    fn test_check_rejects_unknown_group() {
        let err = button()
            .check(&Selection::new().variant("shape", "round"))
            .unwrap_err();
        assert_eq!(
            err,
            VariantError::UnknownGroup {
                group: "shape".to_string()
            }
        );
    }

    #[test]
    fn test_check_rejects_unknown_value() {
        let err = button()
            .check(&Selection::new().variant("size", "xl"))
            .unwrap_err();
        assert_eq!(
            err,
            VariantError::UnknownValue {
                group: "size".to_string(),
                value: "xl".to_string()
            }
        );
    }

    #[test]
    fn test_cva_closure() {
        let resolve = cva(
            "btn",
            VariantConfig::new().variant("size", [("lg", "btn-lg")]),
        );
        assert_eq!(resolve(&Selection::new().variant("size", "lg")), "btn btn-lg");
        assert_eq!(resolve(&Selection::new()), "btn");
    }

    #[test]
    fn test_deserialize_flattened_config() {
        let resolver: VariantResolver = serde_json::from_str(
            r#"{"base": "btn", "variants": {"size": {"lg": "btn-lg"}}, "defaultVariants": {"size": "lg"}}"#,
        )
        .unwrap();
        assert_eq!(resolver.base(), "btn");
        assert_eq!(resolver.resolve_default(), "btn btn-lg");
    }

    fn token() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,8}"
    }

    proptest! {
        #[test]
        fn prop_empty_config_returns_trimmed_base(base in "[ ]{0,2}[a-z-]{0,10}[ ]{0,2}") {
            let resolver = VariantResolver::new(base.clone());
            prop_assert_eq!(resolver.resolve_default(), base.trim());
        }

        #[test]
        fn prop_one_token_per_matching_group_in_order(
            groups in proptest::collection::vec((token(), token()), 1..6),
        ) {
            let mut config = VariantConfig::new();
            let mut selection = Selection::new();
            let mut expected = vec!["base".to_string()];
            for (i, (value, class)) in groups.iter().enumerate() {
                let group = format!("g{}", i);
                config = config.variant(group.clone(), [(value.clone(), class.clone())]);
                selection = selection.variant(group, value.clone());
                expected.push(class.clone());
            }
            let resolver = VariantResolver::with_config("base", config);
            prop_assert_eq!(resolver.resolve(&selection), expected.join(" "));
        }

        #[test]
        fn prop_extra_class_is_last(extra in token(), pick_lg in any::<bool>()) {
            let size = if pick_lg { "lg" } else { "sm" };
            let selection = Selection::new()
                .class_name(extra.clone())
                .variant("tone", "primary")
                .variant("size", size);
            let output = button().resolve(&selection);
            prop_assert_eq!(output.split(' ').last(), Some(extra.as_str()));
        }

        #[test]
        fn prop_resolution_is_idempotent(size in token(), extra in proptest::option::of(token())) {
            let mut selection = Selection::new().variant("size", size);
            if let Some(extra) = extra {
                selection = selection.class_name(extra);
            }
            let resolver = button();
            prop_assert_eq!(resolver.resolve(&selection), resolver.resolve(&selection));
        }
    }
}
