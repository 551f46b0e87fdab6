// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for tagcheck.
//!
//! This module contains pure lint logic. All I/O (reading catalogs and
//! templates from disk) is handled via ports defined in the application
//! layer.
//!
//! - **No async**: rule evaluation is synchronous
//! - **No I/O**: catalogs and templates arrive already parsed
//! - **Never fails on content**: rules treat unreadable fields as absent
//! - **Immutable inputs**: rules borrow catalogs and templates
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod rules;
pub mod value_objects;

pub use entities::{
    Finding, Resource, ResourceTypeCatalog, ResourceTypeSpec, Template, Violation,
};

pub use error::{DomainError, ErrorCategory};

pub use rules::{
    LintRule, PropertiesTagsIncluded, RuleMetadata, RuleSet, check_template,
    resource_types_supporting_tags,
};

pub use value_objects::{Region, RuleId, Severity};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ========================================================================
    // Worked examples
    // ========================================================================

    fn queue_catalog() -> ResourceTypeCatalog {
        serde_json::from_value(json!({
            "ResourceTypes": {"AWS::SQS::Queue": {"Properties": {"Tags": {}}}}
        }))
        .unwrap()
    }

    fn single(resource: serde_json::Value) -> Template {
        Template::from_value(json!({"Resources": {"Q1": resource}})).unwrap()
    }

    #[test]
    fn queue_with_empty_properties_is_reported() {
        let t = single(json!({"Type": "AWS::SQS::Queue", "Properties": {}}));
        let violations = check_template(&queue_catalog(), &t);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path_display(), "Resources/Q1/Properties");
    }

    #[test]
    fn queue_with_empty_tags_is_clean() {
        let t = single(json!({"Type": "AWS::SQS::Queue", "Properties": {"Tags": []}}));
        assert!(check_template(&queue_catalog(), &t).is_empty());
    }

    #[test]
    fn topic_without_tag_support_is_clean() {
        let catalog: ResourceTypeCatalog = serde_json::from_value(json!({
            "ResourceTypes": {"AWS::SNS::Topic": {"Properties": {}}}
        }))
        .unwrap();

        for resource in [
            json!({"Type": "AWS::SNS::Topic"}),
            json!({"Type": "AWS::SNS::Topic", "Properties": {}}),
            json!({"Type": "AWS::SNS::Topic", "Properties": {"TopicName": "t"}}),
        ] {
            assert!(check_template(&catalog, &single(resource)).is_empty());
        }
    }

    // ========================================================================
    // Rule set + value objects together
    // ========================================================================

    #[test]
    fn ignoring_by_parsed_id_silences_rule() {
        let ignore: Vec<RuleId> = ["E9001"].iter().map(|s| s.parse().unwrap()).collect();
        let rules = RuleSet::builtin().without(&ignore).unwrap();
        let t = single(json!({"Type": "AWS::SQS::Queue"}));

        assert!(rules.evaluate(&queue_catalog(), &t).is_empty());
    }

    #[test]
    fn malformed_rule_id_is_validation_error() {
        let err = "tags".parse::<RuleId>().unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }
}
