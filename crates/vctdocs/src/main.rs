//! vctdocs - credential type listings for documentation sites
//!
//! Prints the descriptor listing for a docs directory, or checks the
//! descriptor files and reports the ones the listing would leave out.

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};
use vct_core::config::{ConfigError, DEFAULT_CONFIG_PATH};
use vct_core::{Config, OutputFormat};
use vctdocs::{check_descriptors, collect_with, render};

#[derive(Parser)]
#[command(name = "vctdocs")]
#[command(about = "List credential type descriptors for documentation pages")]
#[command(version)]
struct Cli {
    /// Documentation source directory (descriptors live in ../credentials/vct)
    #[arg(long, global = true, env = "VCTDOCS_DOCS_DIR")]
    docs_dir: Option<PathBuf>,

    /// Config file path (overrides .vctdocs/config)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the descriptor listing
    List {
        /// Output format: markdown, json, or table
        #[arg(long, value_parser = parse_format)]
        format: Option<OutputFormat>,

        /// Prefix for descriptor links in markdown output
        #[arg(long)]
        link_prefix: Option<String>,
    },

    /// Report descriptor files that are skipped or malformed
    Check {
        /// Only report files the listing would skip
        #[arg(long)]
        skipped_only: bool,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{}: {source}", path.display())]
    Config { path: PathBuf, source: ConfigError },
    #[error("failed to render listing: {0}")]
    Render(#[from] serde_json::Error),
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::parse(s)
        .ok_or_else(|| format!("invalid format '{s}': expected markdown, json, or table"))
}

fn main() {
    let cli = Cli::parse();

    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let result = load_config(cli.config.as_deref()).and_then(|mut config| {
        if let Some(docs_dir) = cli.docs_dir {
            config.docs_dir = docs_dir;
        }
        if let Ok(cwd) = std::env::current_dir() {
            config.resolve_paths(&cwd);
        }
        debug!(root = %config.descriptor_root().display(), "descriptor directory");

        match cli.command {
            Command::List {
                format,
                link_prefix,
            } => {
                if let Some(format) = format {
                    config.format = format;
                }
                if let Some(link_prefix) = link_prefix {
                    config.link_prefix = link_prefix;
                }
                run_list(&config)
            }
            Command::Check { skipped_only } => {
                if skipped_only {
                    config.check_structure = false;
                }
                run_check(&config)
            }
        }
    });

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

/// Load config: `--config` file, else `.vctdocs/config` when present, else defaults.
fn load_config(explicit: Option<&Path>) -> Result<Config, CliError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
            if !default_path.is_file() {
                return Ok(Config::default());
            }
            default_path
        }
    };

    Config::from_file(&path).map_err(|source| CliError::Config { path, source })
}

fn run_list(config: &Config) -> Result<bool, CliError> {
    let descriptors = collect_with(config);
    let output = render::render(&descriptors, config.format, &config.link_prefix)?;
    print!("{output}");
    Ok(true)
}

fn run_check(config: &Config) -> Result<bool, CliError> {
    let report = check_descriptors(config);

    for finding in &report.findings {
        println!("{finding}");
    }

    println!();
    println!(
        "{} listed, {} finding(s) in {}",
        report.listed,
        report.findings.len(),
        report.root.display()
    );

    Ok(report.is_clean())
}
