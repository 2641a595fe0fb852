//! Authoring checks for descriptor files.
//!
//! The page listing drops bad files silently. `check` reports them instead,
//! along with structural problems in files that do parse.

use crate::catalog::{scan_sources, SkippedDescriptor};
use std::fmt;
use std::path::PathBuf;
use tracing::debug;
use vct_core::vct::{Vct, VctIssue};
use vct_core::Config;

/// A problem found in one descriptor file.
#[derive(Debug)]
pub enum Finding {
    /// The file was left out of the listing.
    Skipped(SkippedDescriptor),
    /// The file is in the listing but is not a valid VCT document.
    NotVct { filename: String, error: String },
    /// The file is a VCT document with structural issues.
    Issues {
        filename: String,
        issues: Vec<VctIssue>,
    },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skipped(skipped) => {
                write!(f, "{}: skipped: {}", skipped.filename, skipped.reason)
            }
            Self::NotVct { filename, error } => write!(f, "{filename}: {error}"),
            Self::Issues { filename, issues } => {
                let joined: Vec<String> = issues.iter().map(ToString::to_string).collect();
                write!(f, "{filename}: {}", joined.join("; "))
            }
        }
    }
}

/// Outcome of checking a descriptor directory.
#[derive(Debug)]
pub struct CheckReport {
    pub root: PathBuf,
    /// Number of files that made it into the listing.
    pub listed: usize,
    pub findings: Vec<Finding>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Scan the configured descriptor directory and collect findings.
///
/// Skipped files come first (by filename), then structural findings in listing
/// order. Structural checks run only when `config.check_structure` is set.
pub fn check_descriptors(config: &Config) -> CheckReport {
    let root = config.descriptor_root();
    let scan = scan_sources(&root, &config.default_description);
    let listed = scan.sources.len();

    let mut findings: Vec<Finding> = scan.skipped.into_iter().map(Finding::Skipped).collect();

    if config.check_structure {
        // Checks run on the text the listing was built from; files are not re-read.
        for source in &scan.sources {
            let filename = &source.summary.filename;
            match Vct::from_json(&source.content) {
                Ok(vct) => {
                    let issues = vct.check();
                    if !issues.is_empty() {
                        findings.push(Finding::Issues {
                            filename: filename.clone(),
                            issues,
                        });
                    }
                }
                Err(e) => findings.push(Finding::NotVct {
                    filename: filename.clone(),
                    error: e.to_string(),
                }),
            }
        }
    }

    debug!(
        path = %root.display(),
        listed,
        findings = findings.len(),
        "checked descriptors"
    );

    CheckReport {
        root,
        listed,
        findings,
    }
}
