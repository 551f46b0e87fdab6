//! Implementation of the `tagcheck rules` command.

use std::io;

use serde::Serialize;

use tagcheck_core::domain::{RuleMetadata, RuleSet, Severity};

use crate::{cli::OutputFormat, error::CliResult, output::OutputManager};

/// Serialisable view of a rule for JSON output.
#[derive(Debug, Serialize)]
struct RuleView<'a> {
    id: &'a str,
    severity: Severity,
    shortdesc: &'a str,
    description: &'a str,
    tags: &'a [&'a str],
}

impl<'a> From<&'a RuleMetadata> for RuleView<'a> {
    fn from(meta: &'a RuleMetadata) -> Self {
        Self {
            id: meta.id.as_str(),
            severity: meta.severity(),
            shortdesc: meta.shortdesc,
            description: meta.description,
            tags: meta.tags,
        }
    }
}

pub fn execute(output: OutputManager) -> CliResult<()> {
    let rules = RuleSet::builtin();

    match output.format() {
        OutputFormat::Json => {
            let views: Vec<RuleView<'_>> = rules.metadata().map(RuleView::from).collect();
            let json = serde_json::to_string_pretty(&views).map_err(io::Error::from)?;
            output.emit(&json)?;
        }
        OutputFormat::Plain => {
            for meta in rules.metadata() {
                output.emit(&format!("{}\t{}\t{}", meta.id, meta.severity(), meta.shortdesc))?;
            }
        }
        OutputFormat::Human | OutputFormat::Auto => {
            output.header("Available Rules:")?;
            for meta in rules.metadata() {
                output.emit(&format!(
                    "  {} {}",
                    output.rule_id(meta.id.as_str(), meta.severity()),
                    meta.shortdesc
                ))?;
                output.emit(&format!(
                    "        {}",
                    output.dim(&format!("{} [{}]", meta.description, meta.tags.join(", ")))
                ))?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_view_carries_severity() {
        let rules = RuleSet::builtin();
        let views: Vec<RuleView<'_>> = rules.metadata().map(RuleView::from).collect();

        let json = serde_json::to_value(&views).unwrap();
        assert_eq!(json[0]["id"], "E9001");
        assert_eq!(json[0]["severity"], "error");
        assert_eq!(json[0]["tags"], serde_json::json!(["resources", "tags"]));
    }
}
