//! Variant validation errors.

/// Error returned by the opt-in variant checks.
///
/// Resolution itself never fails; these come only from
/// [`VariantConfig::validate`](super::VariantConfig::validate) and
/// [`VariantResolver::check`](super::VariantResolver::check).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantError {
    /// A variant group uses the reserved extra-class key as its name
    ReservedGroupName { group: String },
    /// A default names a group the variant table doesn't declare
    UnknownDefaultGroup { group: String },
    /// A default names a value the group doesn't declare
    UnknownDefaultValue { group: String, value: String },
    /// A selection names a group the variant table doesn't declare
    UnknownGroup { group: String },
    /// A selection names a value the group doesn't declare
    UnknownValue { group: String, value: String },
}

impl std::fmt::Display for VariantError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariantError::ReservedGroupName { group } => {
                write!(f, "variant group name '{}' is reserved for extra classes", group)
            }
            VariantError::UnknownDefaultGroup { group } => {
                write!(f, "default set for undeclared variant group '{}'", group)
            }
            VariantError::UnknownDefaultValue { group, value } => {
                write!(
                    f,
                    "default '{}' is not a value of variant group '{}'",
                    value, group
                )
            }
            VariantError::UnknownGroup { group } => {
                write!(f, "unknown variant group '{}'", group)
            }
            VariantError::UnknownValue { group, value } => {
                write!(f, "unknown value '{}' for variant group '{}'", value, group)
            }
        }
    }
}

impl std::error::Error for VariantError {}

/// A [`VariantError`] attributed to a named component of a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentError {
    pub component: String,
    pub error: VariantError,
}

impl std::fmt::Display for ComponentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "component '{}': {}", self.component, self.error)
    }
}

impl std::error::Error for ComponentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
