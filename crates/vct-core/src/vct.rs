//! Typed model of a Verifiable Credential Type (VCT) document.
//!
//! The collector only needs `name` and `description`; this model is used by
//! `vctdocs check` to flag descriptors that would not render as credentials.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vct {
    pub vct: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_uri: Option<String>,
    #[serde(
        rename = "schema_uri#integrity",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub schema_uri_integrity: Option<String>,
    #[serde(default)]
    pub display: Vec<VctDisplay>,
    #[serde(default)]
    pub claims: Vec<VctClaim>,
}

/// Localized display metadata for the credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VctDisplay {
    pub lang: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rendering: Option<VctRendering>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VctRendering {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simple: Option<VctSimpleRendering>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg_template: Option<VctSvgTemplate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VctSimpleRendering {
    pub background_color: String,
    pub text_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<VctLogo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VctLogo {
    pub uri: String,
    #[serde(
        rename = "uri#integrity",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub uri_integrity: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VctSvgTemplate {
    pub uri: String,
    #[serde(
        rename = "uri#integrity",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub uri_integrity: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Value>,
}

/// A claim and its localized labels.
///
/// `path` elements are claim names; `null` selects every array element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VctClaim {
    pub path: Vec<Option<String>>,
    #[serde(default)]
    pub display: Vec<VctClaimDisplay>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VctClaimDisplay {
    pub lang: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum VctError {
    #[error("not a VCT document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A structural problem found in a VCT document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VctIssue {
    EmptyVct,
    EmptyName,
    NoDisplay,
    DisplayMissingLang { index: usize },
    ClaimEmptyPath { index: usize },
    ClaimWithoutLabels { index: usize },
}

impl fmt::Display for VctIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyVct => write!(f, "`vct` identifier is empty"),
            Self::EmptyName => write!(f, "`name` is empty"),
            Self::NoDisplay => write!(f, "no `display` entries"),
            Self::DisplayMissingLang { index } => {
                write!(f, "display[{index}] has an empty `lang`")
            }
            Self::ClaimEmptyPath { index } => write!(f, "claims[{index}] has an empty `path`"),
            Self::ClaimWithoutLabels { index } => {
                write!(f, "claims[{index}] has no `display` labels")
            }
        }
    }
}

impl Vct {
    pub fn from_json(content: &str) -> Result<Self, VctError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Check the fields a credential needs to render, in document order.
    pub fn check(&self) -> Vec<VctIssue> {
        let mut issues = Vec::new();
        if self.vct.trim().is_empty() {
            issues.push(VctIssue::EmptyVct);
        }
        if self.name.trim().is_empty() {
            issues.push(VctIssue::EmptyName);
        }
        if self.display.is_empty() {
            issues.push(VctIssue::NoDisplay);
        }
        for (index, display) in self.display.iter().enumerate() {
            if display.lang.trim().is_empty() {
                issues.push(VctIssue::DisplayMissingLang { index });
            }
        }
        for (index, claim) in self.claims.iter().enumerate() {
            if claim.path.is_empty() {
                issues.push(VctIssue::ClaimEmptyPath { index });
            }
            if claim.display.is_empty() {
                issues.push(VctIssue::ClaimWithoutLabels { index });
            }
        }
        issues
    }
}
