//! vctdocs - credential type listings for documentation sites.
//!
//! Library components used by the `vctdocs` binary and by site build hooks.

pub mod catalog;
pub mod check;
pub mod render;

pub use catalog::{
    collect_descriptors, collect_with, scan_descriptors, scan_sources, scan_with, ScanResult,
    SourceScan,
};
pub use check::{check_descriptors, CheckReport, Finding};
