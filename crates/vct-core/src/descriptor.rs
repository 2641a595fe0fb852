//! Descriptor summaries extracted from VCT JSON files.
//!
//! A summary carries the three fields the documentation page needs: the source
//! filename, a display name and a description. Both text fields are optional in
//! the source document and fall back to the file stem and a fixed placeholder.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Placeholder used when a descriptor has no `description` field.
pub const DEFAULT_DESCRIPTION: &str = "No description";

/// Summary of one descriptor file, as rendered on the documentation page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorSummary {
    /// Base name of the source file, including the `.json` extension.
    pub filename: String,
    /// `name` from the document, or the file stem.
    pub name: String,
    /// `description` from the document, or the configured placeholder.
    pub description: String,
}

/// Error type for reading a single descriptor file.
#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    #[error("failed to read descriptor: {0}")]
    Read(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("descriptor root is not a JSON object")]
    NotAnObject,
}

/// A parsed descriptor and the file text it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorSource {
    pub summary: DescriptorSummary,
    pub content: String,
}

/// Result of loading one descriptor file.
///
/// Loading never aborts a scan: a file either yields a summary or is skipped
/// with the reason kept for callers that want to report it.
#[derive(Debug)]
pub enum DescriptorOutcome {
    Parsed(DescriptorSource),
    Skipped {
        filename: String,
        reason: DescriptorError,
    },
}

impl DescriptorOutcome {
    /// Returns the summary, discarding any skip reason.
    pub fn into_summary(self) -> Option<DescriptorSummary> {
        match self {
            Self::Parsed(source) => Some(source.summary),
            Self::Skipped { .. } => None,
        }
    }
}

impl DescriptorSummary {
    /// Build a summary from an already parsed JSON object.
    ///
    /// Keys that are missing or hold a non-string value fall back to the file
    /// stem (`name`) and `default_description` (`description`).
    pub fn from_object(
        filename: &str,
        object: &Map<String, Value>,
        default_description: &str,
    ) -> Self {
        let name = string_field(object, "name").map_or_else(|| file_stem(filename), str::to_string);
        let description = string_field(object, "description")
            .unwrap_or(default_description)
            .to_string();

        Self {
            filename: filename.to_string(),
            name,
            description,
        }
    }

    /// Parse descriptor content (the raw file text).
    pub fn parse(
        filename: &str,
        content: &str,
        default_description: &str,
    ) -> Result<Self, DescriptorError> {
        match serde_json::from_str::<Value>(content)? {
            Value::Object(object) => Ok(Self::from_object(filename, &object, default_description)),
            _ => Err(DescriptorError::NotAnObject),
        }
    }
}

/// Load a descriptor file and classify the result.
pub fn load_descriptor(path: &Path, default_description: &str) -> DescriptorOutcome {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let result = fs::read_to_string(path)
        .map_err(DescriptorError::from)
        .and_then(|content| {
            let summary = DescriptorSummary::parse(&filename, &content, default_description)?;
            Ok(DescriptorSource { summary, content })
        });

    match result {
        Ok(source) => DescriptorOutcome::Parsed(source),
        Err(reason) => DescriptorOutcome::Skipped { filename, reason },
    }
}

/// Sort descriptors ascending by name (byte order, stable for equal names).
pub fn sort_by_name(sources: &mut [DescriptorSource]) {
    sources.sort_by(|a, b| a.summary.name.cmp(&b.summary.name));
}

fn string_field<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    object.get(key).and_then(Value::as_str)
}

/// Filename without its final extension (`a.b.json` -> `a.b`).
///
/// A leading dot does not start an extension: `.json` stays `.json` and
/// `.draft.json` becomes `.draft`.
fn file_stem(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .map_or_else(|| filename.to_string(), |s| s.to_string_lossy().into_owned())
}
