//! Configuration parsing for the documentation helper.
//!
//! Uses a key=value format, read from `.vctdocs/config` or an explicit
//! `--config` file. Precedence: CLI flags > `--config` file >
//! `.vctdocs/config` > defaults.

use crate::descriptor::DEFAULT_DESCRIPTION;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = ".vctdocs/config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("invalid config line: {0}")]
    InvalidLine(String),
    #[error("invalid boolean value for {key}: {value}")]
    InvalidBool { key: String, value: String },
}

/// How the listing is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
    Table,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "markdown" | "md" => Some(Self::Markdown),
            "json" => Some(Self::Json),
            "table" => Some(Self::Table),
            _ => None,
        }
    }
}

/// Documentation helper configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Documentation source directory. Descriptors live beside it.
    pub docs_dir: PathBuf,
    /// Descriptor directory, relative to the parent of `docs_dir`.
    pub descriptors_dir: PathBuf,
    /// Description used when a descriptor has none.
    pub default_description: String,
    /// Prefix prepended to filenames when rendering links.
    pub link_prefix: String,
    /// Listing output format.
    pub format: OutputFormat,
    /// Run structural checks on each descriptor in `check` (default: true).
    pub check_structure: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("docs"),
            descriptors_dir: PathBuf::from("credentials/vct"),
            default_description: DEFAULT_DESCRIPTION.to_string(),
            link_prefix: "credentials/vct/".to_string(),
            format: OutputFormat::Markdown,
            check_structure: true,
        }
    }
}

impl Config {
    /// Load config from a file, merging with defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.load_file(path)?;
        Ok(config)
    }

    /// Load and merge values from a config file.
    pub fn load_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path)?;
        self.parse_content(&content)
    }

    /// Parse config content (key=value format).
    fn parse_content(&mut self, content: &str) -> Result<(), ConfigError> {
        for line in content.lines() {
            let trimmed = line.trim();

            // Skip empty lines and comments
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(ConfigError::InvalidLine(line.to_string()));
            };

            let key = key.trim();
            let value = Self::unquote(value.trim());

            self.apply_value(key, &value)?;
        }
        Ok(())
    }

    /// Remove surrounding quotes from a value.
    fn unquote(value: &str) -> String {
        if value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')))
        {
            return value[1..value.len() - 1].to_string();
        }
        value.to_string()
    }

    /// Apply a single config value.
    fn apply_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "docs_dir" => self.docs_dir = PathBuf::from(value),
            "descriptors_dir" => self.descriptors_dir = PathBuf::from(value),
            "default_description" => self.default_description = value.to_string(),
            "link_prefix" => self.link_prefix = value.to_string(),
            "format" => {
                self.format = OutputFormat::parse(value).ok_or_else(|| {
                    ConfigError::InvalidLine(format!(
                        "format must be 'markdown', 'json', or 'table', got '{value}'"
                    ))
                })?;
            }
            "check_structure" => self.check_structure = Self::parse_bool(key, value)?,
            _ => {
                // Unknown keys are reported but not fatal.
                eprintln!("Warning: unknown config key: {key}");
            }
        }
        Ok(())
    }

    fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
        match value.to_lowercase().as_str() {
            "true" | "1" | "yes" | "y" | "on" => Ok(true),
            "false" | "0" | "no" | "n" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidBool {
                key: key.to_string(),
                value: value.to_string(),
            }),
        }
    }

    /// Resolve a relative `docs_dir` against a working directory.
    pub fn resolve_paths(&mut self, workspace_root: &Path) {
        if self.docs_dir.is_relative() {
            self.docs_dir = workspace_root.join(&self.docs_dir);
        }
    }

    /// Directory holding the descriptor files: `parent(docs_dir)/descriptors_dir`.
    ///
    /// A `docs_dir` without a parent (`/`, or an empty path) is used as the base
    /// itself.
    pub fn descriptor_root(&self) -> PathBuf {
        descriptor_root(&self.docs_dir, &self.descriptors_dir)
    }
}

/// Locate the descriptor directory for a docs directory.
pub fn descriptor_root(docs_dir: &Path, descriptors_dir: &Path) -> PathBuf {
    let base = docs_dir.parent().unwrap_or(docs_dir);
    base.join(descriptors_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.docs_dir, PathBuf::from("docs"));
        assert_eq!(config.descriptors_dir, PathBuf::from("credentials/vct"));
        assert_eq!(config.default_description, "No description");
        assert_eq!(config.link_prefix, "credentials/vct/");
        assert_eq!(config.format, OutputFormat::Markdown);
        assert!(config.check_structure);
    }

    #[test]
    fn parse_simple_config() {
        let mut config = Config::default();
        let content = r#"
# site layout
docs_dir="site/docs"
default_description='TBD'
format=table
check_structure=no
"#;
        config.parse_content(content).unwrap();
        assert_eq!(config.docs_dir, PathBuf::from("site/docs"));
        assert_eq!(config.default_description, "TBD");
        assert_eq!(config.format, OutputFormat::Table);
        assert!(!config.check_structure);
    }

    #[test]
    fn unknown_keys_are_not_fatal() {
        let mut config = Config::default();
        config.parse_content("color=blue\nlink_prefix=/vct/").unwrap();
        assert_eq!(config.link_prefix, "/vct/");
    }

    #[test]
    fn line_without_equals_is_rejected() {
        let mut config = Config::default();
        let err = config.parse_content("docs_dir").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLine(_)));
    }

    #[test]
    fn invalid_format_is_rejected() {
        let mut config = Config::default();
        assert!(config.parse_content("format=html").is_err());
    }

    #[test]
    fn parse_bool_accepts_variants() {
        assert!(Config::parse_bool("test", "Yes").unwrap());
        assert!(Config::parse_bool("test", "on").unwrap());
        assert!(!Config::parse_bool("test", "0").unwrap());
        assert!(!Config::parse_bool("test", "off").unwrap());
        assert!(Config::parse_bool("test", "maybe").is_err());
    }

    #[test]
    fn unquote_removes_quotes() {
        assert_eq!(Config::unquote("\"hello\""), "hello");
        assert_eq!(Config::unquote("'world'"), "world");
        assert_eq!(Config::unquote("\""), "\"");
    }

    #[test]
    fn descriptor_root_is_sibling_of_docs_dir() {
        let root = descriptor_root(Path::new("/site/docs"), Path::new("credentials/vct"));
        assert_eq!(root, PathBuf::from("/site/credentials/vct"));
    }

    #[test]
    fn descriptor_root_handles_parentless_paths() {
        let root = descriptor_root(Path::new("/"), Path::new("credentials/vct"));
        assert_eq!(root, PathBuf::from("/credentials/vct"));

        // "docs" has the empty path as its parent.
        let root = descriptor_root(Path::new("docs"), Path::new("credentials/vct"));
        assert_eq!(root, PathBuf::from("credentials/vct"));
    }

    #[test]
    fn resolve_paths_anchors_relative_docs_dir() {
        let mut config = Config::default();
        config.resolve_paths(Path::new("/work"));
        assert_eq!(config.docs_dir, PathBuf::from("/work/docs"));
        assert_eq!(config.descriptor_root(), PathBuf::from("/work/credentials/vct"));
    }
}
