//! Data set field type resolution.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Type name recorded for fields without an explicit mapping.
pub const DEFAULT_FIELD_TYPE: &str = "System.String";

/// Closed lookup from field name to the designer type name.
///
/// Matching is exact and case-sensitive; the map is never inferred from data.
/// Entries read from configuration extend the built-in ones and override
/// them per field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldTypeMap {
    pub default_type: String,
    #[serde(deserialize_with = "extend_builtin_types")]
    pub types: BTreeMap<String, String>,
}

fn builtin_types() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("Salary".to_string(), "System.Decimal".to_string()),
        ("Date".to_string(), "System.DateTime".to_string()),
    ])
}

fn extend_builtin_types<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let configured = BTreeMap::<String, String>::deserialize(deserializer)?;
    let mut types = builtin_types();
    types.extend(configured);
    Ok(types)
}

impl Default for FieldTypeMap {
    fn default() -> Self {
        Self {
            default_type: DEFAULT_FIELD_TYPE.to_string(),
            types: builtin_types(),
        }
    }
}

impl FieldTypeMap {
    /// A map with no entries; every field resolves to the default type.
    pub fn empty() -> Self {
        Self {
            default_type: DEFAULT_FIELD_TYPE.to_string(),
            types: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_type(mut self, field: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.types.insert(field.into(), type_name.into());
        self
    }

    pub fn resolve(&self, field: &str) -> &str {
        self.types
            .get(field)
            .map(String::as_str)
            .unwrap_or(self.default_type.as_str())
    }
}
