//! CLI argument parsing.
use clap::Parser;
use std::path::PathBuf;

use crate::{
    config::{DEFAULT_MANIFEST_FILE, DEFAULT_TEMPLATE_FILE},
    report::ReportOptions,
};

/// Release notes tooling.
///
/// Run from the root of the project repository with the metadata file of the
/// new release, e.g. `releases/v1.2.0.toml`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Release metadata file. Its name, without `.toml`, is the release
    /// version.
    pub metadata: PathBuf,

    #[arg(short = 'n', long, default_value_t = false)]
    /// Print the release notes to stdout instead of running the release.
    pub dry: bool,

    #[arg(short, long, default_value = DEFAULT_TEMPLATE_FILE)]
    /// Template file to use in place of the default.
    pub template: PathBuf,

    #[arg(short, long, default_value = ".")]
    /// Path to the project repository.
    pub repo: PathBuf,

    #[arg(short, long, default_value = DEFAULT_MANIFEST_FILE)]
    /// Dependency manifest path within the repository.
    pub manifest: String,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

impl Args {
    /// Options for building the release report.
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            manifest_path: self.manifest.clone(),
        }
    }
}
