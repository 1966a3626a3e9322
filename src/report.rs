//! Release report assembly.
//!
//! Combines hand-written [`ReleaseMetadata`] with data mined from version
//! control into a single [`ReleaseReport`] ready for templating.
use log::*;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::{
    changelog::{self, ChangeEntry},
    config::{
        BreakingChange, DEFAULT_MANIFEST_FILE, Download, Note, ReleaseMetadata,
    },
    dependency::{self, DependencyChange},
    error::Result,
    manifest::DependencyManifest,
    repo::VersionControl,
};

/// Everything known about a release, as handed to the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseReport {
    /// Release version tag
    pub version: String,
    pub project_name: String,
    pub github_repo: String,
    pub commit: String,
    pub previous: String,
    pub pre_release: bool,
    pub preface: String,
    pub notes: BTreeMap<String, Note>,
    pub breaking_changes: BTreeMap<String, BreakingChange>,
    /// Commits since the previous release, newest first
    pub changes: Vec<ChangeEntry>,
    /// Sorted, unique author names
    pub contributors: Vec<String>,
    /// Dependency changes sorted by name
    pub dependencies: Vec<DependencyChange>,
    pub downloads: Vec<Download>,
}

/// Options for [`ReportBuilder`].
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Dependency manifest path relative to the repository root
    pub manifest_path: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            manifest_path: DEFAULT_MANIFEST_FILE.into(),
        }
    }
}

/// Builds a [`ReleaseReport`] from metadata and version control.
pub struct ReportBuilder<'v> {
    vcs: &'v dyn VersionControl,
    options: ReportOptions,
}

impl<'v> ReportBuilder<'v> {
    pub fn new(vcs: &'v dyn VersionControl, options: ReportOptions) -> Self {
        Self { vcs, options }
    }

    /// Gather changes, contributors and dependency updates between
    /// `release.previous` and `release.commit`. Any version control failure
    /// aborts the build.
    pub fn build(
        &self,
        release: ReleaseMetadata,
        version: String,
    ) -> Result<ReleaseReport> {
        let dependencies = self.dependency_changes(&release)?;

        let commits = self.vcs.log_range(&release.previous, &release.commit)?;
        let changes = changelog::assemble_changes(commits);

        info!(
            "creating new release {version} with {} new changes...",
            changes.len()
        );

        let authors = self
            .vcs
            .authors_in_range(&release.previous, &release.commit)?;
        let contributors = changelog::assemble_contributors(authors);

        debug!(
            "{} contributors, {} dependency changes",
            contributors.len(),
            dependencies.len()
        );

        Ok(ReleaseReport {
            version,
            project_name: release.project_name,
            github_repo: release.github_repo,
            commit: release.commit,
            previous: release.previous,
            pre_release: release.pre_release,
            preface: release.preface,
            notes: release.notes,
            breaking_changes: release.breaking_changes,
            changes,
            contributors,
            dependencies,
            downloads: release.downloads,
        })
    }

    fn dependency_changes(
        &self,
        release: &ReleaseMetadata,
    ) -> Result<Vec<DependencyChange>> {
        let path = &self.options.manifest_path;

        let previous = DependencyManifest::parse(
            &self.vcs.file_at_revision(&release.previous, path)?,
        );
        let current = DependencyManifest::parse(
            &self.vcs.file_at_revision(&release.commit, path)?,
        );

        Ok(dependency::diff(&previous, &current))
    }
}
