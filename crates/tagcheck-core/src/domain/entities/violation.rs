//! Violations and findings.
//!
//! A [`Violation`] is what a rule produces: where in the template and what is
//! wrong. A [`Finding`] is a violation attributed to the rule that raised it,
//! which is what reports carry.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{RuleId, Severity};

/// A single compliance finding inside one template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    path: Vec<String>,
    message: String,
}

impl Violation {
    pub fn new<I, S>(path: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.into_iter().map(Into::into).collect(),
            message: message.into(),
        }
    }

    /// Path segments from the template root, e.g. `["Resources", "Q1", "Properties"]`.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Path joined with `/`, e.g. `Resources/Q1/Properties`.
    pub fn path_display(&self) -> String {
        self.path.join("/")
    }

    /// Attach the id of the rule that produced this violation.
    pub fn attribute(self, rule_id: &RuleId) -> Finding {
        Finding {
            rule_id: rule_id.clone(),
            severity: rule_id.severity(),
            path: self.path,
            message: self.message,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.path_display())
    }
}

/// A violation attributed to a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub rule_id: RuleId,
    pub severity: Severity,
    pub path: Vec<String>,
    pub message: String,
}

impl Finding {
    pub fn path_display(&self) -> String {
        self.path.join("/")
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.rule_id, self.message)
    }
}
