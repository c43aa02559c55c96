//! Template integration.
//!
//! Exposes a [`VariantRegistry`](crate::VariantRegistry) to MiniJinja
//! templates through the `cva` and `cx` functions.

mod functions;
mod renderer;

pub use functions::register_functions;
pub use renderer::{render, Renderer};
