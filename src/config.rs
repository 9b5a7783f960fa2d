//! Configuration management for emojigate.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML configuration file
//!
//! Command-line values win over the file, the file wins over defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;

/// Directory scanned by `emojigate workflows` unless configured otherwise
pub const DEFAULT_WORKFLOWS_DIR: &str = ".github/workflows";

/// Name of the per-project configuration file
pub const PROJECT_CONFIG_FILE: &str = ".emojigate.toml";

/// Command-line arguments for emojigate
#[derive(Debug, Parser)]
#[command(name = "emojigate")]
#[command(about = "Lint GitHub Actions workflows for emoji usage")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Output format for the report
    #[arg(long, global = true, value_enum, help = "Report format (text, json)")]
    pub format: Option<OutputFormat>,

    /// Explicit configuration file
    #[arg(long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Lint all workflow files in .github/workflows/
    Workflows {
        #[arg(long, help = "Directory containing workflow files")]
        dir: Option<PathBuf>,
    },
    /// Lint specific workflow file(s)
    Lint {
        #[arg(required = true, help = "Workflow files to lint")]
        files: Vec<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Contents of a configuration file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub workflows_dir: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

impl FileConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid emojigate configuration")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Load the first configuration file found
    ///
    /// An explicit path must exist. Otherwise `.emojigate.toml` in the
    /// current directory is tried, then `emojigate/config.toml` in the user
    /// config directory. Finding neither is not an error.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }

        let mut candidates = vec![PathBuf::from(PROJECT_CONFIG_FILE)];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("emojigate").join("config.toml"));
        }

        match candidates.into_iter().find(|path| path.is_file()) {
            Some(path) => {
                log::info!("using configuration from {}", path.display());
                Self::from_path(&path)
            }
            None => Ok(Self::default()),
        }
    }
}

/// What to lint
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    /// Every workflow file directly inside a directory
    WorkflowsDir(PathBuf),
    /// Explicitly named files, in the given order
    Files(Vec<PathBuf>),
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub target: Target,
    pub format: OutputFormat,
    pub log_level: String,
}

impl Config {
    /// Create configuration from parsed arguments, loading any config file
    pub fn from_args(args: Args) -> Result<Self> {
        let file = FileConfig::discover(args.config.as_deref())?;
        Ok(Self::resolve(args, file))
    }

    /// Merge arguments over file settings (useful for testing)
    pub fn resolve(args: Args, file: FileConfig) -> Self {
        let target = match args.command {
            Command::Workflows { dir } => Target::WorkflowsDir(
                dir.or(file.workflows_dir)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_WORKFLOWS_DIR)),
            ),
            Command::Lint { files } => Target::Files(files),
        };

        Config {
            target,
            format: args.format.or(file.format).unwrap_or_default(),
            log_level: args.log_level,
        }
    }
}
