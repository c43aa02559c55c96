//! Pre-compiled template renderer.

use minijinja::{Environment, Error, ErrorKind};
use serde::Serialize;

use super::functions::register_functions;
use crate::registry::VariantRegistry;

/// A renderer with pre-registered templates and a component registry.
///
/// Templates are compiled once and can call `cva(...)` and `cx(...)`.
///
/// # Example
///
/// ```rust
/// use classvariance::{Renderer, VariantConfig, VariantRegistry, VariantResolver};
/// use serde::Serialize;
///
/// let registry = VariantRegistry::new().add(
///     "button",
///     VariantResolver::with_config(
///         "btn",
///         VariantConfig::new().variant("variant", [("ghost", "btn-ghost")]),
///     ),
/// );
///
/// let mut renderer = Renderer::new(registry).unwrap();
/// renderer
///     .add_template("link", r#"<a class="{{ cva("button", variant=variant) }}">{{ label }}</a>"#)
///     .unwrap();
///
/// #[derive(Serialize)]
/// struct Link { label: String, variant: String }
///
/// let html = renderer
///     .render("link", &Link { label: "GitHub".into(), variant: "ghost".into() })
///     .unwrap();
/// assert_eq!(html, r#"<a class="btn btn-ghost">GitHub</a>"#);
/// ```
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Creates a renderer for `registry`.
    ///
    /// # Errors
    ///
    /// Returns an error if any component's configuration is invalid.
    pub fn new(registry: VariantRegistry) -> Result<Self, Error> {
        registry
            .validate()
            .map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))?;

        let mut env = Environment::new();
        register_functions(&mut env, registry);
        Ok(Self { env })
    }

    /// Registers a named template.
    ///
    /// The template is compiled immediately; errors are returned if syntax is invalid.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Renders a registered template with the given data.
    ///
    /// # Errors
    ///
    /// Returns an error if the template name is not found or rendering fails.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }
}

/// Renders a one-off template against `registry`.
///
/// Unlike [`Renderer`], the registry isn't validated first; invalid
/// defaults just contribute no class.
pub fn render<T: Serialize>(
    template: &str,
    data: &T,
    registry: &VariantRegistry,
) -> Result<String, Error> {
    let mut env = Environment::new();
    register_functions(&mut env, registry.clone());
    env.render_str(template, data)
}
