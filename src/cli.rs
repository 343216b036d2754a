use clap::Parser;
use std::path::PathBuf;

use sbom_compare::application::dto::OutputFormat;
use sbom_compare::config::SettingsOverrides;

/// Compare SBOMs through a comparison service and browse what diverges
#[derive(Parser, Debug)]
#[command(name = "sbom-compare")]
#[command(version)]
#[command(
    about = "Compare SBOMs through a comparison service and browse the components that diverge between them",
    long_about = None
)]
pub struct Args {
    /// Target document; appearance index 0
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Documents to compare against the target, in order
    #[arg(value_name = "OTHER", required = true, num_args = 1..)]
    pub others: Vec<String>,

    /// Base URL of the comparison service
    #[arg(short = 's', long, value_name = "URL")]
    pub service_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Only show components that do not appear in every document
    #[arg(short = 'c', long)]
    pub conflicts_only: bool,

    /// Drill down into one component
    #[arg(long, value_name = "NAME")]
    pub component: Option<String>,

    /// Drill down into one version of --component ("N/A" for unversioned)
    #[arg(long, value_name = "VERSION", requires = "component")]
    pub component_version: Option<String>,

    /// Output format: json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to ./sbom-compare.config.yml if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Exit with code 1 when divergent components are found
    #[arg(long)]
    pub fail_on_conflict: bool,

    /// Also collect per-document quality metrics
    #[arg(long)]
    pub quality: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Values that take precedence over the config file
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            service_url: self.service_url.clone(),
            timeout_secs: self.timeout,
            format: self.format,
            conflicts_only: self.conflicts_only,
            fail_on_conflict: self.fail_on_conflict,
            quality: self.quality,
        }
    }
}
