//! Parsed infrastructure template.
//!
//! The template is kept as the loosely typed JSON document it was parsed
//! from. Rules read it defensively through [`Resource`]: a missing or
//! ill-typed field reads as absent, never as an error.
//!
//! ```text
//! {
//!   "Resources": {
//!     "<name>": { "Type": "<resource type>", "Properties": { ... } },
//!     ...
//!   }
//! }
//! ```

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::domain::error::DomainError;

/// Top-level section holding the resource declarations.
pub const RESOURCES_SECTION: &str = "Resources";

/// A template document.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    document: Value,
}

impl Template {
    /// Wrap a parsed document.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidTemplate`] if the top level is not a mapping.
    /// Everything below the top level is accepted as-is.
    pub fn from_value(document: Value) -> Result<Self, DomainError> {
        if !document.is_object() {
            return Err(DomainError::InvalidTemplate(format!(
                "top level must be a mapping, found {}",
                kind_of(&document)
            )));
        }
        Ok(Self { document })
    }

    /// Template with no sections at all.
    pub fn empty() -> Self {
        Self {
            document: Value::Object(Map::new()),
        }
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Resources in declaration order.
    ///
    /// A missing or non-mapping `Resources` section yields nothing.
    pub fn resources(&self) -> impl Iterator<Item = Resource<'_>> {
        self.document
            .get(RESOURCES_SECTION)
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|resources| resources.iter())
            .map(|(name, body)| Resource {
                name: name.as_str(),
                body,
            })
    }

    pub fn resource_count(&self) -> usize {
        self.resources().count()
    }

    /// Distinct resource types declared in the template.
    pub fn resource_types(&self) -> BTreeSet<&str> {
        self.resources()
            .map(|resource| resource.resource_type())
            .filter(|ty| !ty.is_empty())
            .collect()
    }

    pub fn contains_resource_type(&self, resource_type: &str) -> bool {
        self.resources()
            .any(|resource| resource.resource_type() == resource_type)
    }
}

impl TryFrom<Value> for Template {
    type Error = DomainError;

    fn try_from(document: Value) -> Result<Self, Self::Error> {
        Self::from_value(document)
    }
}

/// Borrowed view of one entry under `Resources`.
#[derive(Debug, Clone, Copy)]
pub struct Resource<'a> {
    name: &'a str,
    body: &'a Value,
}

impl<'a> Resource<'a> {
    /// Logical name (the key under `Resources`).
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Declared `Type`; empty when missing or not a string.
    pub fn resource_type(&self) -> &'a str {
        self.body.get("Type").and_then(Value::as_str).unwrap_or("")
    }

    /// Declared `Properties`, when present and a mapping.
    pub fn properties(&self) -> Option<&'a Map<String, Value>> {
        self.body.get("Properties").and_then(Value::as_object)
    }

    /// `true` if `Properties` contains `key`. Absent properties contain nothing.
    pub fn has_property(&self, key: &str) -> bool {
        self.properties()
            .is_some_and(|properties| properties.contains_key(key))
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn demo() -> Template {
        Template::from_value(json!({
            "Resources": {
                "Zeta": {"Type": "AWS::SQS::Queue", "Properties": {"Tags": []}},
                "Alpha": {"Type": "AWS::SNS::Topic"},
                "Broken": "not a mapping"
            }
        }))
        .unwrap()
    }

    #[test]
    fn resources_keep_declaration_order() {
        let template = demo();
        let names: Vec<&str> = template.resources().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Broken"]);
    }

    #[test]
    fn missing_fields_read_as_absent() {
        let template = demo();
        let broken = template.resources().find(|r| r.name() == "Broken").unwrap();
        assert_eq!(broken.resource_type(), "");
        assert!(broken.properties().is_none());
        assert!(!broken.has_property("Tags"));

        let alpha = template.resources().find(|r| r.name() == "Alpha").unwrap();
        assert!(alpha.properties().is_none());
    }

    #[test]
    fn resource_types_skip_untyped_entries() {
        let template = demo();
        let types: Vec<&str> = template.resource_types().into_iter().collect();
        assert_eq!(types, vec!["AWS::SNS::Topic", "AWS::SQS::Queue"]);
        assert!(template.contains_resource_type("AWS::SQS::Queue"));
        assert!(!template.contains_resource_type("AWS::S3::Bucket"));
    }

    #[test]
    fn missing_or_malformed_resources_section_is_empty() {
        assert_eq!(Template::empty().resource_count(), 0);

        let list = Template::from_value(json!({"Resources": ["a", "b"]})).unwrap();
        assert_eq!(list.resource_count(), 0);
    }

    #[test]
    fn top_level_must_be_mapping() {
        let err = Template::from_value(json!(["Resources"])).unwrap_err();
        assert!(matches!(err, DomainError::InvalidTemplate(msg) if msg.contains("sequence")));
    }
}
