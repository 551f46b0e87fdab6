//! Lint rules and the rule registry.
//!
//! A rule is a pure function of a catalog and a template. Rules never fail;
//! anything they cannot read is treated as absent.

pub mod tags;

use std::fmt;

use serde::Serialize;

use crate::domain::{
    entities::{Finding, ResourceTypeCatalog, Template, Violation},
    error::DomainError,
    value_objects::{RuleId, Severity},
};

pub use tags::{PropertiesTagsIncluded, check_template, resource_types_supporting_tags};

/// Descriptive data attached to every rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleMetadata {
    pub id: RuleId,
    pub shortdesc: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

impl RuleMetadata {
    pub fn severity(&self) -> Severity {
        self.id.severity()
    }
}

/// A lint rule.
pub trait LintRule: Send + Sync {
    fn metadata(&self) -> &RuleMetadata;

    /// Evaluate the rule once against a whole template.
    fn check(&self, catalog: &ResourceTypeCatalog, template: &Template) -> Vec<Violation>;
}

/// An ordered collection of rules.
pub struct RuleSet {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleSet {
    pub fn new(rules: Vec<Box<dyn LintRule>>) -> Self {
        Self { rules }
    }

    /// Every rule shipped with the linter.
    pub fn builtin() -> Self {
        let rules: Vec<Box<dyn LintRule>> = vec![Box::new(PropertiesTagsIncluded::new())];
        Self::new(rules)
    }

    /// Drop the rules listed in `ignore`.
    ///
    /// # Errors
    ///
    /// [`DomainError::UnknownRule`] if an id in `ignore` is not in the set,
    /// so a typo does not silently keep a rule enabled.
    pub fn without(self, ignore: &[RuleId]) -> Result<Self, DomainError> {
        if let Some(unknown) = ignore.iter().find(|id| self.get(id).is_none()) {
            return Err(DomainError::UnknownRule {
                id: unknown.to_string(),
            });
        }

        let rules = self
            .rules
            .into_iter()
            .filter(|rule| !ignore.contains(&rule.metadata().id))
            .collect();

        Ok(Self { rules })
    }

    pub fn get(&self, id: &RuleId) -> Option<&dyn LintRule> {
        self.rules
            .iter()
            .find(|rule| &rule.metadata().id == id)
            .map(|rule| rule.as_ref())
    }

    pub fn metadata(&self) -> impl Iterator<Item = &RuleMetadata> {
        self.rules.iter().map(|rule| rule.metadata())
    }

    /// Run every rule; findings are grouped by rule, in rule order.
    pub fn evaluate(&self, catalog: &ResourceTypeCatalog, template: &Template) -> Vec<Finding> {
        self.rules
            .iter()
            .flat_map(|rule| {
                let id = &rule.metadata().id;
                rule.check(catalog, template)
                    .into_iter()
                    .map(move |violation| violation.attribute(id))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.metadata().map(|m| m.id.as_str()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct AlwaysFires;

    impl LintRule for AlwaysFires {
        fn metadata(&self) -> &RuleMetadata {
            static META: std::sync::OnceLock<RuleMetadata> = std::sync::OnceLock::new();
            META.get_or_init(|| RuleMetadata {
                id: RuleId::parse("W0001").unwrap(),
                shortdesc: "always",
                description: "always fires",
                tags: &[],
            })
        }

        fn check(&self, _: &ResourceTypeCatalog, _: &Template) -> Vec<Violation> {
            vec![Violation::new(["Resources"], "always")]
        }
    }

    fn sqs_catalog() -> ResourceTypeCatalog {
        serde_json::from_value(json!({
            "ResourceTypes": {"AWS::SQS::Queue": {"Properties": {"Tags": {}}}}
        }))
        .unwrap()
    }

    fn untagged_queue() -> Template {
        Template::from_value(json!({"Resources": {"Q1": {"Type": "AWS::SQS::Queue"}}})).unwrap()
    }

    #[test]
    fn builtin_contains_tag_rule() {
        let rules = RuleSet::builtin();
        assert_eq!(rules.len(), 1);
        assert!(rules.get(&RuleId::parse("E9001").unwrap()).is_some());
    }

    #[test]
    fn evaluate_attributes_findings() {
        let findings = RuleSet::builtin().evaluate(&sqs_catalog(), &untagged_queue());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule_id.as_str(), "E9001");
        assert_eq!(findings[0].severity, Severity::Error);
    }

    #[test]
    fn evaluate_groups_by_rule_order() {
        let rules = RuleSet::new(vec![
            Box::new(AlwaysFires) as Box<dyn LintRule>,
            Box::new(PropertiesTagsIncluded::new()),
        ]);
        let ids: Vec<String> = rules
            .evaluate(&sqs_catalog(), &untagged_queue())
            .into_iter()
            .map(|f| f.rule_id.to_string())
            .collect();
        assert_eq!(ids, vec!["W0001", "E9001"]);
    }

    #[test]
    fn without_drops_ignored_rules() {
        let rules = RuleSet::builtin()
            .without(&[RuleId::parse("E9001").unwrap()])
            .unwrap();
        assert!(rules.is_empty());
        assert!(rules.evaluate(&sqs_catalog(), &untagged_queue()).is_empty());
    }

    #[test]
    fn without_rejects_unknown_ids() {
        let err = RuleSet::builtin()
            .without(&[RuleId::parse("E1234").unwrap()])
            .unwrap_err();
        assert_eq!(err, DomainError::UnknownRule { id: "E1234".into() });
    }
}
