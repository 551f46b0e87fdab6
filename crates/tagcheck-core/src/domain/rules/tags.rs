//! E9001: resources whose type supports `Tags` must declare them.

use std::collections::BTreeSet;

use tracing::trace;

use crate::domain::{
    entities::{ResourceTypeCatalog, Template, Violation, template::RESOURCES_SECTION},
    rules::{LintRule, RuleMetadata},
    value_objects::RuleId,
};

const TAGS: &str = "Tags";
const PROPERTIES: &str = "Properties";

/// Resource types in `catalog` whose specification has a `Properties`
/// mapping containing `Tags`.
///
/// Entries without properties are simply left out.
pub fn resource_types_supporting_tags(catalog: &ResourceTypeCatalog) -> BTreeSet<&str> {
    catalog
        .iter()
        .filter(|(_, spec)| spec.accepts_property(TAGS))
        .map(|(name, _)| name)
        .collect()
}

/// One violation per resource whose type supports tags but whose properties
/// lack a `Tags` key, in declaration order.
///
/// Never fails: a missing `Resources` section, `Type`, or `Properties` reads
/// as absent.
pub fn check_template(catalog: &ResourceTypeCatalog, template: &Template) -> Vec<Violation> {
    let taggable = resource_types_supporting_tags(catalog);

    template
        .resources()
        .filter(|resource| taggable.contains(resource.resource_type()))
        .filter(|resource| !resource.has_property(TAGS))
        .map(|resource| {
            let path = [RESOURCES_SECTION, resource.name(), PROPERTIES];
            trace!(resource = resource.name(), "missing Tags");
            Violation::new(
                path,
                format!("Missing Tags Properties for {}", path.join("/")),
            )
        })
        .collect()
}

/// Check that `Tags` are included on resources that support them.
pub struct PropertiesTagsIncluded {
    metadata: RuleMetadata,
}

impl PropertiesTagsIncluded {
    pub const ID: &'static str = "E9001";

    pub fn new() -> Self {
        Self {
            metadata: RuleMetadata {
                id: RuleId::builtin(Self::ID),
                shortdesc: "Tags are included on resources that support it",
                description: "Check Tags for resources",
                tags: &["resources", "tags"],
            },
        }
    }
}

impl Default for PropertiesTagsIncluded {
    fn default() -> Self {
        Self::new()
    }
}

impl LintRule for PropertiesTagsIncluded {
    fn metadata(&self) -> &RuleMetadata {
        &self.metadata
    }

    fn check(&self, catalog: &ResourceTypeCatalog, template: &Template) -> Vec<Violation> {
        check_template(catalog, template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ResourceTypeSpec;
    use serde_json::json;

    fn catalog() -> ResourceTypeCatalog {
        serde_json::from_value(json!({
            "ResourceTypes": {
                "AWS::SQS::Queue": {"Properties": {"Tags": {}}},
                "AWS::SNS::Topic": {"Properties": {}},
                "AWS::Lambda::Permission": {}
            }
        }))
        .unwrap()
    }

    fn template(resources: serde_json::Value) -> Template {
        Template::from_value(json!({ "Resources": resources })).unwrap()
    }

    #[test]
    fn supporting_types_require_tags_property() {
        let catalog = catalog();
        let types = resource_types_supporting_tags(&catalog);
        assert_eq!(types.into_iter().collect::<Vec<_>>(), vec!["AWS::SQS::Queue"]);
    }

    #[test]
    fn empty_properties_without_tags_is_a_violation() {
        let t = template(json!({"Q1": {"Type": "AWS::SQS::Queue", "Properties": {}}}));
        let violations = check_template(&catalog(), &t);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path(), ["Resources", "Q1", "Properties"]);
        assert_eq!(
            violations[0].message(),
            "Missing Tags Properties for Resources/Q1/Properties"
        );
    }

    #[test]
    fn empty_tags_list_is_compliant() {
        let t = template(json!({"Q1": {"Type": "AWS::SQS::Queue", "Properties": {"Tags": []}}}));
        assert!(check_template(&catalog(), &t).is_empty());
    }

    #[test]
    fn type_without_tag_support_is_never_reported() {
        let t = template(json!({
            "T1": {"Type": "AWS::SNS::Topic", "Properties": {}},
            "T2": {"Type": "AWS::SNS::Topic"},
            "P1": {"Type": "AWS::Lambda::Permission"},
            "X1": {"Type": "Custom::Unknown"}
        }));
        assert!(check_template(&catalog(), &t).is_empty());
    }

    #[test]
    fn absent_properties_is_one_violation() {
        let t = template(json!({"Q1": {"Type": "AWS::SQS::Queue"}}));
        let violations = check_template(&catalog(), &t);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path_display(), "Resources/Q1/Properties");
    }

    #[test]
    fn violations_follow_declaration_order() {
        let t = template(json!({
            "Zulu": {"Type": "AWS::SQS::Queue"},
            "Tagged": {"Type": "AWS::SQS::Queue", "Properties": {"Tags": [{"Key": "a", "Value": "b"}]}},
            "Alpha": {"Type": "AWS::SQS::Queue", "Properties": {"QueueName": "a"}}
        }));
        let names: Vec<String> = check_template(&catalog(), &t)
            .iter()
            .map(|v| v.path()[1].clone())
            .collect();
        assert_eq!(names, vec!["Zulu", "Alpha"]);
    }

    #[test]
    fn missing_resources_section_yields_nothing() {
        assert!(check_template(&catalog(), &Template::empty()).is_empty());
    }

    #[test]
    fn missing_type_is_never_reported() {
        let t = template(json!({"Q1": {"Properties": {}}}));
        assert!(check_template(&catalog(), &t).is_empty());
    }

    #[test]
    fn non_mapping_properties_count_as_missing_tags() {
        let t = template(json!({"Q1": {"Type": "AWS::SQS::Queue", "Properties": "Tags"}}));
        assert_eq!(check_template(&catalog(), &t).len(), 1);
    }

    #[test]
    fn check_is_idempotent_and_bounded() {
        let catalog = catalog()
            .with_resource_type("AWS::S3::Bucket", ResourceTypeSpec::with_properties(["Tags"]));
        let t = template(json!({
            "A": {"Type": "AWS::S3::Bucket"},
            "B": {"Type": "AWS::SQS::Queue"},
            "C": {"Type": "AWS::SNS::Topic"}
        }));

        let first = check_template(&catalog, &t);
        let second = check_template(&catalog, &t);
        assert_eq!(first, second);
        assert!(first.len() <= t.resource_count());
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn rule_metadata() {
        let rule = PropertiesTagsIncluded::new();
        let meta = rule.metadata();
        assert_eq!(meta.id.as_str(), "E9001");
        assert_eq!(meta.shortdesc, "Tags are included on resources that support it");
        assert_eq!(meta.tags, &["resources", "tags"]);
    }
}
