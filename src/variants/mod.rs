//! Variant-driven class resolution.
//!
//! This module provides the resolver and its inputs:
//!
//! - [`VariantConfig`]: Variant groups and default values
//! - [`Selection`]: The values a caller picks, plus an extra class
//! - [`VariantResolver`]: Binds a base class to a config and resolves selections
//! - [`cva`]: Closure form of the resolver
//! - [`VariantError`]: Errors from the opt-in validation checks
//!
//! Resolution never fails. Unknown groups and unknown values simply
//! contribute no class; validation is available separately for callers who
//! want those reported.

mod config;
mod error;
mod resolver;
mod scalar;
mod selection;

pub use config::{VariantConfig, VariantGroup, VariantTable};
pub use error::{ComponentError, VariantError};
pub use resolver::{cva, VariantResolver};
pub use selection::Selection;

/// Selection key that carries the extra class instead of a variant value.
pub const CLASS_NAME_KEY: &str = "className";
