//! Descriptor catalog: directory scanning and collection.
//!
//! Scans the `credentials/vct` directory beside the documentation source for
//! `*.json` descriptor files and returns their summaries sorted by name. The
//! listing is best-effort: a file that cannot be read or parsed is left out.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use vct_core::config::{descriptor_root, Config};
use vct_core::descriptor::{
    load_descriptor, sort_by_name, DescriptorError, DescriptorOutcome, DescriptorSource,
    DescriptorSummary, DEFAULT_DESCRIPTION,
};

/// Descriptor directory relative to the parent of the docs directory.
pub const DESCRIPTORS_DIR: &str = "credentials/vct";

/// Filename suffix matched by the `*.json` glob (a bare `.json` included).
const DESCRIPTOR_SUFFIX: &str = ".json";

/// Result of a descriptor scan with the files that were left out.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Parsed descriptors, sorted by name.
    pub descriptors: Vec<DescriptorSummary>,
    /// Files that could not be read or parsed, sorted by filename.
    pub skipped: Vec<SkippedDescriptor>,
}

/// Scan result that keeps the text each descriptor was parsed from.
#[derive(Debug, Default)]
pub struct SourceScan {
    /// Parsed descriptors with their file text, sorted by name.
    pub sources: Vec<DescriptorSource>,
    /// Files that could not be read or parsed, sorted by filename.
    pub skipped: Vec<SkippedDescriptor>,
}

/// A descriptor file that was left out of the listing.
#[derive(Debug)]
pub struct SkippedDescriptor {
    pub filename: String,
    pub path: PathBuf,
    pub reason: DescriptorError,
}

/// Collect descriptor summaries for a documentation directory.
///
/// Looks in `parent(docs_dir)/credentials/vct`. A missing directory yields an
/// empty list; unreadable or malformed files are skipped without being
/// reported.
pub fn collect_descriptors(docs_dir: &Path) -> Vec<DescriptorSummary> {
    let dir = descriptor_root(docs_dir, Path::new(DESCRIPTORS_DIR));
    scan_descriptors(&dir, DEFAULT_DESCRIPTION).descriptors
}

/// Collect descriptor summaries using configured locations and defaults.
pub fn collect_with(config: &Config) -> Vec<DescriptorSummary> {
    scan_with(config).descriptors
}

/// Scan the configured descriptor directory, keeping skipped files.
pub fn scan_with(config: &Config) -> ScanResult {
    scan_descriptors(&config.descriptor_root(), &config.default_description)
}

/// Scan one descriptor directory (non-recursive).
pub fn scan_descriptors(dir: &Path, default_description: &str) -> ScanResult {
    let scan = scan_sources(dir, default_description);
    ScanResult {
        descriptors: scan.sources.into_iter().map(|s| s.summary).collect(),
        skipped: scan.skipped,
    }
}

/// Scan one descriptor directory, keeping each file's text.
///
/// Every file is read once; callers that inspect the content further see the
/// same text the summary came from.
pub fn scan_sources(dir: &Path, default_description: &str) -> SourceScan {
    let mut result = SourceScan::default();

    if !dir.is_dir() {
        debug!(path = %dir.display(), "descriptor directory not found, skipping");
        return result;
    }

    for path in descriptor_files(dir) {
        match load_descriptor(&path, default_description) {
            DescriptorOutcome::Parsed(source) => result.sources.push(source),
            DescriptorOutcome::Skipped { filename, reason } => {
                result.skipped.push(SkippedDescriptor {
                    filename,
                    path,
                    reason,
                });
            }
        }
    }

    sort_by_name(&mut result.sources);
    result.skipped.sort_by(|a, b| a.filename.cmp(&b.filename));

    debug!(
        path = %dir.display(),
        count = result.sources.len(),
        skipped = result.skipped.len(),
        "collected descriptors"
    );

    result
}

/// List `*.json` files directly under `dir`.
///
/// Matches on the file name rather than `Path::extension`, which treats a
/// bare `.json` as having no extension.
fn descriptor_files(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(DESCRIPTOR_SUFFIX))
        .map(|entry| entry.path())
        .filter(|path| !path.is_dir())
        .collect()
}
