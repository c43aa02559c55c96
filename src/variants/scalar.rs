//! Scalar-to-string coercion for variant documents.
//!
//! YAML resolves plain scalars like `true` or `1` to booleans and numbers,
//! while a variant table only ever deals in strings. These helpers accept
//! any scalar where a group name, value or default is expected.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use super::config::VariantTable;

/// A string read from any scalar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct ScalarString(pub(crate) String);

impl<'de> Deserialize<'de> for ScalarString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ScalarVisitor)
    }
}

struct ScalarVisitor;

impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = ScalarString;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string, boolean or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(ScalarString(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(ScalarString(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(ScalarString(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(ScalarString(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(ScalarString(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(ScalarString(v.to_string()))
    }
}

/// Deserializes a flat map whose keys and values may be any scalar.
pub(crate) fn string_map<'de, D>(deserializer: D) -> Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = IndexMap::<ScalarString, ScalarString>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|(k, v)| (k.0, v.0)).collect())
}

/// Deserializes a variant table whose names, values and tokens may be any scalar.
pub(crate) fn variant_table<'de, D>(deserializer: D) -> Result<VariantTable, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = IndexMap::<ScalarString, IndexMap<ScalarString, ScalarString>>::deserialize(
        deserializer,
    )?;
    Ok(raw
        .into_iter()
        .map(|(group, values)| {
            let values = values.into_iter().map(|(k, v)| (k.0, v.0)).collect();
            (group.0, values)
        })
        .collect())
}
