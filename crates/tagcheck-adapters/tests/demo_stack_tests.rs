//! Integration tests wiring the real adapters into the lint service.

use std::path::{Path, PathBuf};

use tagcheck_adapters::{DirectoryCatalogStore, InMemoryCatalogStore, LocalTemplateLoader};
use tagcheck_core::{
    application::{ApplicationError, CatalogService, LintService, ports::TemplateSource},
    domain::{Region, RuleId, RuleSet},
    error::TagcheckError,
};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn builtin_service(rules: RuleSet) -> LintService {
    LintService::new(
        Box::new(InMemoryCatalogStore::with_builtin().unwrap()),
        Box::new(LocalTemplateLoader::new()),
        rules,
    )
}

// ============================================================================
// Synthesized stack contents
// ============================================================================

#[test]
fn demo_stack_contains_queue_and_topic() {
    let template = LocalTemplateLoader::new()
        .load(&fixture("nn_demo_stack.template.json"))
        .unwrap();

    assert!(template.contains_resource_type("AWS::SQS::Queue"));
    assert!(template.contains_resource_type("AWS::SNS::Topic"));
}

#[test]
fn yaml_and_json_demo_stacks_are_equivalent() {
    let loader = LocalTemplateLoader::new();
    let json = loader.load(&fixture("nn_demo_stack.template.json")).unwrap();
    let yaml = loader.load(&fixture("nn_demo_stack.yaml")).unwrap();

    assert_eq!(json, yaml);
}

// ============================================================================
// Lint runs
// ============================================================================

#[test]
fn builtin_catalog_flags_untagged_queue_only() {
    let service = builtin_service(RuleSet::builtin());
    let report = service
        .lint_file(&fixture("nn_demo_stack.template.json"), &[])
        .unwrap();

    assert_eq!(report.findings.len(), 1);
    let finding = &report.findings[0];
    assert_eq!(finding.rule_id.as_str(), "E9001");
    assert_eq!(
        finding.message,
        "Missing Tags Properties for Resources/NnDemoQueue5A8A2C1F/Properties"
    );
    assert_eq!(
        finding.path,
        vec!["Resources", "NnDemoQueue5A8A2C1F", "Properties"]
    );
}

#[test]
fn yaml_stack_lints_like_json_stack() {
    let service = builtin_service(RuleSet::builtin());
    let json = service
        .lint_file(&fixture("nn_demo_stack.template.json"), &[])
        .unwrap();
    let yaml = service
        .lint_file(&fixture("nn_demo_stack.yaml"), &[])
        .unwrap();

    assert_eq!(json.findings, yaml.findings);
}

#[test]
fn ignoring_the_rule_yields_no_findings() {
    let rules = RuleSet::builtin()
        .without(&[RuleId::parse("E9001").unwrap()])
        .unwrap();
    let report = builtin_service(rules)
        .lint_paths(&[fixture("nn_demo_stack.yaml")], &[])
        .unwrap();

    assert!(report.is_clean());
}

#[test]
fn region_catalog_decides_what_is_taggable() {
    // In this catalog topics do not accept Tags, so only the queue counts.
    let service = LintService::new(
        Box::new(DirectoryCatalogStore::new(fixture("catalogs"))),
        Box::new(LocalTemplateLoader::new()),
        RuleSet::builtin(),
    );
    let region = Region::parse("eu-west-1").unwrap();

    let report = service
        .lint_file(&fixture("nn_demo_stack.yaml"), &[region])
        .unwrap();
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.region.as_str(), "eu-west-1");
}

#[test]
fn region_without_catalog_file_is_not_found() {
    let service = LintService::new(
        Box::new(DirectoryCatalogStore::new(fixture("catalogs"))),
        Box::new(LocalTemplateLoader::new()),
        RuleSet::builtin(),
    );

    let err = service
        .lint_file(&fixture("nn_demo_stack.yaml"), &[Region::default()])
        .unwrap_err();
    assert!(matches!(
        err,
        TagcheckError::Application(ApplicationError::CatalogNotFound { .. })
    ));
}

#[test]
fn lint_paths_expands_directories() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::copy(
        fixture("nn_demo_stack.yaml"),
        dir.path().join("stack.yaml"),
    )
    .unwrap();
    std::fs::write(
        dir.path().join("clean.json"),
        r#"{"Resources": {"Topic": {"Type": "AWS::SNS::Topic", "Properties": {"Tags": []}}}}"#,
    )
    .unwrap();

    let report = builtin_service(RuleSet::builtin())
        .lint_paths(&[dir.path().to_path_buf()], &[])
        .unwrap();

    assert_eq!(report.files.len(), 2);
    assert_eq!(report.finding_count(), 1);
    let dirty: Vec<_> = report.files_with_findings().collect();
    assert_eq!(dirty[0].path, dir.path().join("stack.yaml"));
}

#[test]
fn catalog_service_lists_builtin_taggable_types() {
    let service = CatalogService::new(Box::new(InMemoryCatalogStore::with_builtin().unwrap()));
    let summary = service.summarize(&Region::default()).unwrap();

    assert!(summary.tag_supporting_types.contains(&"AWS::SQS::Queue".to_string()));
    assert!(!summary.tag_supporting_types.contains(&"AWS::SNS::Subscription".to_string()));
}
