//! Value objects shared across the domain.
//!
//! All value objects are immutable and validated on construction, so anything
//! holding a [`Region`] or a [`RuleId`] can rely on its shape.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ============================================================================
// Region
// ============================================================================

/// Deployment region a template is evaluated against (e.g. `us-east-1`).
///
/// Each region has its own resource catalog, so the same template may produce
/// different findings in different regions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Region(String);

impl Region {
    /// Region used when nothing else is configured.
    pub const DEFAULT: &'static str = "us-east-1";

    /// Parse and validate a region name.
    ///
    /// Accepted shape: lowercase dash-separated segments ending in a number,
    /// with at least three segments (`us-east-1`, `us-gov-west-1`,
    /// `ap-southeast-2`).
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let raw = raw.trim();
        let segments: Vec<&str> = raw.split('-').collect();

        let well_formed = segments.len() >= 3
            && segments.iter().all(|s| !s.is_empty())
            && segments[..segments.len() - 1]
                .iter()
                .all(|s| s.chars().all(|c| c.is_ascii_lowercase()))
            && segments[segments.len() - 1]
                .chars()
                .all(|c| c.is_ascii_digit());

        if !well_formed {
            return Err(DomainError::InvalidRegion {
                region: raw.to_string(),
            });
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Region {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl FromStr for Region {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Region {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Severity
// ============================================================================

/// Severity of a rule, encoded by the first letter of its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Informational,
    Warning,
    Error,
}

impl Severity {
    fn from_prefix(prefix: char) -> Option<Self> {
        match prefix {
            'E' => Some(Self::Error),
            'W' => Some(Self::Warning),
            'I' => Some(Self::Informational),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Informational => write!(f, "informational"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

// ============================================================================
// RuleId
// ============================================================================

/// Identifier of a lint rule: one of `E`, `W`, `I` followed by four digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RuleId(String);

impl RuleId {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let raw = raw.trim();
        let mut chars = raw.chars();

        let valid = match chars.next() {
            Some(prefix) => {
                Severity::from_prefix(prefix).is_some()
                    && raw.len() == 5
                    && chars.all(|c| c.is_ascii_digit())
            }
            None => false,
        };

        if !valid {
            return Err(DomainError::InvalidRuleId { id: raw.to_string() });
        }

        Ok(Self(raw.to_string()))
    }

    /// Id of a rule compiled into the linter.
    pub(crate) fn builtin(id: &'static str) -> Self {
        debug_assert!(Self::parse(id).is_ok(), "malformed builtin rule id {id}");
        Self(id.to_string())
    }

    /// Severity implied by the id prefix.
    pub fn severity(&self) -> Severity {
        self.0
            .chars()
            .next()
            .and_then(Severity::from_prefix)
            .unwrap_or(Severity::Error)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RuleId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RuleId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RuleId> for String {
    fn from(id: RuleId) -> Self {
        id.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_accepts_standard_names() {
        for name in ["us-east-1", "eu-west-3", "ap-southeast-2", "us-gov-west-1"] {
            assert_eq!(Region::parse(name).unwrap().as_str(), name);
        }
    }

    #[test]
    fn region_rejects_malformed_names() {
        for name in ["", "us-east", "US-EAST-1", "us--1", "us-east-x", "useast1"] {
            assert!(Region::parse(name).is_err(), "{name} should be rejected");
        }
    }

    #[test]
    fn region_default_is_us_east_1() {
        assert_eq!(Region::default().as_str(), "us-east-1");
    }

    #[test]
    fn rule_id_severity_from_prefix() {
        assert_eq!(RuleId::parse("E9001").unwrap().severity(), Severity::Error);
        assert_eq!(RuleId::parse("W3005").unwrap().severity(), Severity::Warning);
        assert_eq!(
            RuleId::parse("I1022").unwrap().severity(),
            Severity::Informational
        );
    }

    #[test]
    fn rule_id_rejects_bad_shapes() {
        for id in ["", "E", "E90", "E90011", "X9001", "e9001", "E9a01"] {
            assert!(RuleId::parse(id).is_err(), "{id} should be rejected");
        }
    }

    #[test]
    fn rule_id_round_trips_through_serde() {
        let id: RuleId = serde_json::from_str("\"E9001\"").unwrap();
        assert_eq!(id.as_str(), "E9001");
        assert!(serde_json::from_str::<RuleId>("\"bogus\"").is_err());
    }
}
