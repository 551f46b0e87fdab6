//! Resource type catalog.
//!
//! A catalog is the per-region resource specification: for every resource
//! type it describes which properties the type accepts. It is supplied from
//! outside (embedded or loaded from disk) and never modified by the linter.
//!
//! Only the parts the rules read are typed. Everything else in a
//! specification document (`PropertyTypes`, attribute definitions, update
//! behaviours) is ignored on deserialization.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::DomainError;

const RESOURCE_TYPES_KEY: &str = "ResourceTypes";

/// Specification of one resource type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceTypeSpec {
    /// Raw `Properties` entry. Kept untyped: a missing or non-mapping value
    /// means the type declares no properties.
    #[serde(rename = "Properties", default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,

    #[serde(rename = "Documentation", default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl ResourceTypeSpec {
    /// Spec declaring the given property names.
    pub fn with_properties<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let properties: Map<String, Value> = names
            .into_iter()
            .map(|name| (name.into(), Value::Object(Map::new())))
            .collect();

        Self {
            properties: Some(Value::Object(properties)),
            documentation: None,
        }
    }

    /// The `Properties` mapping, if present and actually a mapping.
    pub fn properties(&self) -> Option<&Map<String, Value>> {
        self.properties.as_ref().and_then(Value::as_object)
    }

    /// `true` if the type accepts a property called `name`.
    pub fn accepts_property(&self, name: &str) -> bool {
        self.properties()
            .is_some_and(|properties| properties.contains_key(name))
    }
}

/// Mapping from resource type name to its specification, for one region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceTypeCatalog {
    #[serde(
        rename = "ResourceSpecificationVersion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    version: Option<String>,

    #[serde(rename = "ResourceTypes", default)]
    resource_types: BTreeMap<String, ResourceTypeSpec>,
}

impl ResourceTypeCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a parsed resource specification document.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidCatalog`] if the document has no `ResourceTypes`
    /// mapping, or if an entry in it is not a mapping.
    pub fn from_document(document: Value) -> Result<Self, DomainError> {
        if !document.get(RESOURCE_TYPES_KEY).is_some_and(Value::is_object) {
            return Err(DomainError::InvalidCatalog(format!(
                "missing top-level \"{}\" mapping",
                RESOURCE_TYPES_KEY
            )));
        }
        serde_json::from_value(document).map_err(|e| DomainError::InvalidCatalog(e.to_string()))
    }

    /// Builder-style insertion, mostly for tests and embedded catalogs.
    pub fn with_resource_type(mut self, name: impl Into<String>, spec: ResourceTypeSpec) -> Self {
        self.resource_types.insert(name.into(), spec);
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Specification document version, when the source declared one.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn get(&self, resource_type: &str) -> Option<&ResourceTypeSpec> {
        self.resource_types.get(resource_type)
    }

    /// Iterate `(type name, spec)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResourceTypeSpec)> {
        self.resource_types
            .iter()
            .map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.resource_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resource_types.is_empty()
    }
}
