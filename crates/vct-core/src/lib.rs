pub mod config;
pub mod descriptor;
pub mod vct;

pub use config::{Config, OutputFormat};
pub use descriptor::{
    DescriptorError, DescriptorSource, DescriptorOutcome, DescriptorSummary, DEFAULT_DESCRIPTION,
};
pub use vct::{Vct, VctIssue};
