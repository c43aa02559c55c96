//! # classvariance - variant-driven class names
//!
//! `classvariance` composes the class attribute of a rendered element from a
//! base class, a set of named variant groups and an optional extra class.
//!
//! ## Core Concepts
//!
//! - [`VariantConfig`]: Variant groups (`size`, `tone`, ...) mapping values to classes, plus defaults
//! - [`VariantResolver`]: A base class bound to a config; turns a [`Selection`] into a class string
//! - [`Selection`]: The caller's picks, with the extra class kept in its own field (`className`)
//! - [`join_classes`] / [`ClassList`]: Joins tokens, dropping absent and empty ones
//! - [`VariantRegistry`]: Named resolvers, loadable from YAML or JSON
//! - [`Renderer`]: MiniJinja templates with `cva(...)` and `cx(...)` functions
//!
//! ## Quick Start
//!
//! ```rust
//! use classvariance::{Selection, VariantConfig, VariantResolver};
//!
//! let button = VariantResolver::with_config(
//!     "btn",
//!     VariantConfig::new()
//!         .variant("size", [("sm", "btn-sm"), ("lg", "btn-lg")])
//!         .variant("tone", [("primary", "btn-primary")])
//!         .default_variant("size", "sm"),
//! );
//!
//! let classes = button.resolve(
//!     &Selection::new().variant("tone", "primary").class_name("extra"),
//! );
//! assert_eq!(classes, "btn btn-sm btn-primary extra");
//! ```
//!
//! ## Resolution Rules
//!
//! The output is the base class, then one class per variant group in the
//! order the groups were declared, then the extra class. A group's value is
//! the caller's pick if the selection mentions the group, otherwise its
//! default. Groups whose value is missing or not declared contribute
//! nothing; resolution never fails.
//!
//! Strictness is opt-in: [`VariantConfig::validate`] and
//! [`VariantResolver::check`] report unknown groups and values.
//!
//! ## Templates
//!
//! ```rust
//! use classvariance::{render, VariantRegistry};
//!
//! let registry = VariantRegistry::from_yaml(r#"
//! button:
//!   base: btn
//!   variants:
//!     variant: { ghost: btn-ghost }
//! "#).unwrap();
//!
//! let html = render(
//!     r#"<button class="{{ cva("button", variant="ghost", className=cx("ml-2", wide and "w-full")) }}">"#,
//!     &serde_json::json!({"wide": false}),
//!     &registry,
//! ).unwrap();
//! assert_eq!(html, r#"<button class="btn btn-ghost ml-2">"#);
//! ```

pub mod classes;
pub mod registry;
pub mod render;
pub mod variants;

pub use classes::{join_classes, ClassList, ClassValue};
pub use registry::{LoadError, VariantRegistry};
pub use render::{register_functions, render, Renderer};
pub use variants::{
    cva, ComponentError, Selection, VariantConfig, VariantError, VariantGroup, VariantResolver,
    VariantTable, CLASS_NAME_KEY,
};
