//! MiniJinja function registration.

use std::sync::Arc;

use minijinja::value::{Kwargs, Rest, Value, ValueKind};
use minijinja::{Environment, Error, ErrorKind};

use crate::classes::{ClassList, ClassValue};
use crate::registry::VariantRegistry;
use crate::variants::{Selection, CLASS_NAME_KEY};

/// Registers the class functions on a minijinja environment.
///
/// - `cva(component, **selection)` resolves a registered component. Keyword
///   arguments pick variant values, `none` unsets a group, and `className`
///   adds the extra class. Booleans and numbers match the group value with
///   the same text (`disabled=true` picks `"true"`, `level=2` picks `"2"`).
/// - `cx(*values)` joins truthy values into a class string. Lists are
///   flattened and maps contribute the keys whose values are truthy.
pub fn register_functions(env: &mut Environment<'_>, registry: VariantRegistry) {
    let registry = Arc::new(registry);

    env.add_function(
        "cva",
        move |component: &str, kwargs: Kwargs| -> Result<String, Error> {
            let selection = selection_from_kwargs(&kwargs)?;
            registry.resolve(component, &selection).ok_or_else(|| {
                log::warn!("template referenced unknown variant component '{}'", component);
                Error::new(
                    ErrorKind::InvalidOperation,
                    format!("unknown variant component '{}'", component),
                )
            })
        },
    );

    env.add_function("cx", |values: Rest<Value>| -> String {
        let mut classes = ClassList::new();
        for value in values.iter() {
            value.append_to(&mut classes);
        }
        classes.build()
    });
}

fn selection_from_kwargs(kwargs: &Kwargs) -> Result<Selection, Error> {
    let keys: Vec<String> = kwargs.args().map(str::to_string).collect();
    let mut selection = Selection::new();

    for key in keys {
        let value = kwargs.get::<Option<Value>>(&key)?.and_then(scalar_to_string);
        if key == CLASS_NAME_KEY {
            if let Some(extra) = value {
                selection = selection.class_name(extra);
            }
            continue;
        }
        selection = match value {
            Some(value) => selection.variant(key, value),
            None => selection.unset(key),
        };
    }

    Ok(selection)
}

/// Strings pass through, other scalars use their display form; `none` is unset.
fn scalar_to_string(value: Value) -> Option<String> {
    if value.is_none() || value.is_undefined() {
        return None;
    }
    match value.as_str() {
        Some(s) => Some(s.to_string()),
        None => Some(value.to_string()),
    }
}

impl ClassValue for Value {
    fn append_to(&self, list: &mut ClassList) {
        if !self.is_true() {
            return;
        }
        match self.kind() {
            ValueKind::Bool => {}
            ValueKind::Seq | ValueKind::Iterable => {
                if let Ok(items) = self.try_iter() {
                    for item in items {
                        item.append_to(list);
                    }
                }
            }
            ValueKind::Map => {
                if let Ok(keys) = self.try_iter() {
                    for key in keys {
                        let enabled = self
                            .get_item(&key)
                            .map(|flag| flag.is_true())
                            .unwrap_or(false);
                        if enabled {
                            list.push(&key.to_string());
                        }
                    }
                }
            }
            _ => list.push(&self.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::{VariantConfig, VariantResolver};
    use serde_json::json;

    fn env() -> Environment<'static> {
        let registry = VariantRegistry::new()
            .add(
                "toggle",
                VariantResolver::with_config(
                    "t",
                    VariantConfig::new()
                        .variant("disabled", [("true", "t-off"), ("false", "t-on")])
                        .variant("level", [("2", "t-2")]),
                ),
            )
            .add(
                "button",
                VariantResolver::with_config(
                    "btn",
                    VariantConfig::new()
                        .variant("size", [("sm", "btn-sm"), ("lg", "btn-lg")])
                        .variant("tone", [("primary", "btn-primary")])
                        .default_variant("size", "sm"),
                ),
            );
        let mut env = Environment::new();
        register_functions(&mut env, registry);
        env
    }

    #[test]
    fn test_cva_defaults() {
        let output = env().render_str(r#"{{ cva("button") }}"#, json!({})).unwrap();
        assert_eq!(output, "btn btn-sm");
    }

    #[test]
    fn test_cva_kwargs_and_class_name() {
        let output = env()
            .render_str(
                r#"{{ cva("button", tone="primary", className="extra") }}"#,
                json!({}),
            )
            .unwrap();
        assert_eq!(output, "btn btn-sm btn-primary extra");
    }

    #[test]
    fn test_cva_none_unsets_default() {
        let output = env()
            .render_str(r#"{{ cva("button", size=none) }}"#, json!({}))
            .unwrap();
        assert_eq!(output, "btn");
    }

    #[test]
    fn test_cva_values_from_context() {
        let output = env()
            .render_str(r#"{{ cva("button", size=size) }}"#, json!({"size": "lg"}))
            .unwrap();
        assert_eq!(output, "btn btn-lg");
    }

    #[test]
    fn test_cva_bool_and_number_kwargs_match_string_values() {
        let env = env();
        let output = env
            .render_str(r#"{{ cva("toggle", disabled=true, level=2) }}"#, json!({}))
            .unwrap();
        assert_eq!(output, "t t-off t-2");

        let output = env
            .render_str(r#"{{ cva("toggle", disabled=flag) }}"#, json!({"flag": false}))
            .unwrap();
        assert_eq!(output, "t t-on");
    }

    #[test]
    fn test_cva_unknown_component_errors() {
        let err = env()
            .render_str(r#"{{ cva("link") }}"#, json!({}))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
    }

    #[test]
    fn test_cx_drops_falsy() {
        let output = env()
            .render_str(
                r#"{{ cx("a", none, "", false, "b", flag and "c") }}"#,
                json!({"flag": true}),
            )
            .unwrap();
        assert_eq!(output, "a b c");
    }

    #[test]
    fn test_cx_flattens_lists_and_maps() {
        let output = env()
            .render_str(
                r#"{{ cx(["a", ["b"]], {"on": true, "off": false}) }}"#,
                json!({}),
            )
            .unwrap();
        assert_eq!(output, "a b on");
    }

    #[test]
    fn test_cx_empty() {
        let output = env().render_str(r#"[{{ cx() }}]"#, json!({})).unwrap();
        assert_eq!(output, "[]");
    }
}
