//! Named collections of variant resolvers.
//!
//! A [`VariantRegistry`] holds one [`VariantResolver`] per UI component
//! (`button`, `card`, ...), the way a component kit declares its primitives.
//! Registries are built in code or loaded from YAML/JSON documents.
//!
//! # Document Format
//!
//! Each top-level key names a component. A component is either a bare base
//! class or a mapping with `base`, `variants` and `defaultVariants`
//! (`default_variants` is accepted too):
//!
//! ```yaml
//! button:
//!   base: "inline-flex items-center rounded-md"
//!   variants:
//!     variant:
//!       default: "bg-primary text-primary-foreground"
//!       ghost: "hover:bg-accent"
//!     size:
//!       sm: "h-8 px-3"
//!       lg: "h-10 px-8"
//!   defaultVariants:
//!     variant: default
//! card: "rounded-xl border bg-card shadow"
//! ```
//!
//! Component, group and value order follow the document.
//!
//! # Validation
//!
//! Loading validates every component (see [`crate::VariantConfig::validate`]), so a
//! default pointing at a missing value is reported at load time. Registries
//! built in code can call [`VariantRegistry::validate`] explicitly.

use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::de::value::MapAccessDeserializer;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::variants::{ComponentError, Selection, VariantResolver};

/// Error returned when a registry document can't be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Failed to read the registry file.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension doesn't name a supported format.
    #[error("unsupported registry format: {} (expected .yaml, .yml or .json)", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid YAML registry: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON registry: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but a component failed validation.
    #[error(transparent)]
    Invalid(#[from] ComponentError),
}

/// A component as written in a registry document.
///
/// Either a bare base class or a full resolver mapping. Parse errors inside
/// the mapping come through unchanged, so they name the offending field.
enum ComponentDef {
    Base(String),
    Full(VariantResolver),
}

impl<'de> Deserialize<'de> for ComponentDef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ComponentDefVisitor)
    }
}

struct ComponentDefVisitor;

impl<'de> Visitor<'de> for ComponentDefVisitor {
    type Value = ComponentDef;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a base class string or a component mapping")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(ComponentDef::Base(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(ComponentDef::Base(v))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        VariantResolver::deserialize(MapAccessDeserializer::new(map)).map(ComponentDef::Full)
    }
}

impl From<ComponentDef> for VariantResolver {
    fn from(def: ComponentDef) -> Self {
        match def {
            ComponentDef::Base(base) => VariantResolver::new(base),
            ComponentDef::Full(resolver) => resolver,
        }
    }
}

/// An ordered collection of named variant resolvers.
///
/// # Example
///
/// ```rust
/// use classvariance::{Selection, VariantConfig, VariantRegistry, VariantResolver};
///
/// let registry = VariantRegistry::new()
///     .add("card", VariantResolver::new("card"))
///     .add(
///         "button",
///         VariantResolver::with_config(
///             "btn",
///             VariantConfig::new().variant("variant", [("ghost", "btn-ghost")]),
///         ),
///     );
///
/// let classes = registry.resolve("button", &Selection::new().variant("variant", "ghost"));
/// assert_eq!(classes.as_deref(), Some("btn btn-ghost"));
/// assert_eq!(registry.resolve("missing", &Selection::new()), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantRegistry {
    components: IndexMap<String, VariantResolver>,
}

impl VariantRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named component, returning the updated registry for chaining.
    ///
    /// Adding a name twice replaces the earlier resolver.
    pub fn add(mut self, name: impl Into<String>, resolver: VariantResolver) -> Self {
        self.insert(name, resolver);
        self
    }

    /// Adds a named component in place.
    pub fn insert(&mut self, name: impl Into<String>, resolver: VariantResolver) {
        self.components.insert(name.into(), resolver);
    }

    /// Returns the resolver for `name`.
    pub fn get(&self, name: &str) -> Option<&VariantResolver> {
        self.components.get(name)
    }

    /// Returns true if `name` is registered.
    pub fn has(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Returns component names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    /// Returns the number of registered components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true if no component is registered.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Resolves `selection` against the component named `name`.
    ///
    /// Returns `None` if no such component is registered.
    pub fn resolve(&self, name: &str, selection: &Selection) -> Option<String> {
        self.get(name).map(|resolver| resolver.resolve(selection))
    }

    /// Validates every component's configuration.
    pub fn validate(&self) -> Result<(), ComponentError> {
        for (name, resolver) in &self.components {
            resolver
                .config()
                .validate()
                .map_err(|error| ComponentError {
                    component: name.clone(),
                    error,
                })?;
        }
        Ok(())
    }

    /// Loads and validates a registry from YAML.
    pub fn from_yaml(source: &str) -> Result<Self, LoadError> {
        let registry: Self = serde_yaml::from_str(source)?;
        registry.validate()?;
        log::debug!("loaded {} variant components from YAML", registry.len());
        Ok(registry)
    }

    /// Loads and validates a registry from JSON.
    pub fn from_json(source: &str) -> Result<Self, LoadError> {
        let registry: Self = serde_json::from_str(source)?;
        registry.validate()?;
        log::debug!("loaded {} variant components from JSON", registry.len());
        Ok(registry)
    }

    /// Loads and validates a registry file, picking the format from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, LoadError> = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml,
            Some("json") => Self::from_json,
            _ => {
                return Err(LoadError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        log::debug!("reading variant registry from {}", path.display());
        let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        parse(&source)
    }
}

impl FromIterator<(String, VariantResolver)> for VariantRegistry {
    fn from_iter<I: IntoIterator<Item = (String, VariantResolver)>>(iter: I) -> Self {
        Self {
            components: iter.into_iter().collect(),
        }
    }
}

impl Serialize for VariantRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.components.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for VariantRegistry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RegistryVisitor)
    }
}

struct RegistryVisitor;

impl<'de> Visitor<'de> for RegistryVisitor {
    type Value = VariantRegistry;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a mapping of component names to components")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut registry = VariantRegistry::new();
        while let Some(name) = map.next_key::<String>()? {
            let def = map.next_value::<ComponentDef>().map_err(|e| {
                <A::Error as de::Error>::custom(format!("component '{}': {}", name, e))
            })?;
            registry.insert(name, VariantResolver::from(def));
        }
        Ok(registry)
    }
}
