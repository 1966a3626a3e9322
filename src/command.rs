//! Release notes command execution.
use log::*;
use std::io::Write;

use crate::{
    cli::Args,
    config::{self, ReleaseMetadata},
    error::Result,
    report::ReportBuilder,
    repo::{Repository, VersionControl},
    template,
};

/// Build the release report for `args` and, in dry-run mode, write the
/// rendered notes to stdout.
pub fn execute(args: &Args) -> Result<()> {
    let repo = Repository::open(&args.repo)?;
    run(args, &repo, &mut std::io::stdout().lock())
}

/// Run the release flow against any [`VersionControl`], writing rendered
/// notes to `out`. Nothing is written unless rendering succeeds.
pub fn run(
    args: &Args,
    vcs: &dyn VersionControl,
    out: &mut dyn Write,
) -> Result<()> {
    let tag = config::parse_tag(&args.metadata);
    let release = ReleaseMetadata::load(&args.metadata)?;

    info!("Welcome to the {} release tool...", release.project_name);

    let report =
        ReportBuilder::new(vcs, args.report_options()).build(release, tag)?;

    let tmpl = template::load_template(&args.template)?;

    if args.dry {
        let notes = template::render(&report, &tmpl)?;
        writeln!(out, "{notes}")?;
        return Ok(());
    }

    info!("release complete!");

    Ok(())
}
