//! Version control queries used to build release notes.
//!
//! [`VersionControl`] is the seam between report building and the actual
//! repository. [`Repository`] implements it on top of `git2` and mirrors
//! what the release tooling would otherwise get from:
//!
//! - `git log --oneline <from>..<to>`
//! - `git log --format=%aN <from>..<to>`
//! - `git show <rev>:<path>`
//!
//! Ranges exclude `from` and include `to`, and commits come back newest
//! first.
use git2::Sort;
use log::*;
use std::path::Path;

use crate::error::{ReleaseNotesError, Result};

/// A single commit in a log range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Abbreviated commit id
    pub id: String,
    /// First line of the commit message
    pub summary: String,
}

/// Read-only version control queries.
#[cfg_attr(test, mockall::automock)]
pub trait VersionControl {
    /// Commits reachable from `to` but not from `from`, newest first.
    fn log_range(&self, from: &str, to: &str) -> Result<Vec<LogEntry>>;

    /// Author names of every commit in `from..to`, one per commit and in
    /// log order. Names are resolved through the repository mailmap.
    fn authors_in_range(&self, from: &str, to: &str) -> Result<Vec<String>>;

    /// Content of `path` as of `revision`.
    fn file_at_revision(&self, revision: &str, path: &str) -> Result<String>;
}

/// `git2` backed [`VersionControl`].
pub struct Repository {
    repo: git2::Repository,
}

impl Repository {
    /// Open the repository containing `path`, searching parent directories.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = git2::Repository::discover(path)?;
        debug!("opened repository at {}", repo.path().display());
        Ok(Self { repo })
    }

    fn walk_range(
        &self,
        from: &str,
        to: &str,
    ) -> Result<Vec<git2::Commit<'_>>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push_range(&format!("{from}..{to}"))?;

        let mut commits = vec![];

        for oid in revwalk {
            commits.push(self.repo.find_commit(oid?)?);
        }

        Ok(commits)
    }
}

impl VersionControl for Repository {
    fn log_range(&self, from: &str, to: &str) -> Result<Vec<LogEntry>> {
        let commits = self.walk_range(from, to)?;
        let mut entries = Vec::with_capacity(commits.len());

        for commit in commits.iter() {
            let short_id = commit.as_object().short_id()?;
            let id = short_id.as_str().ok_or_else(|| {
                ReleaseNotesError::git_lookup(format!(
                    "invalid short id for commit {}",
                    commit.id()
                ))
            })?;

            entries.push(LogEntry {
                id: id.to_string(),
                summary: String::from_utf8_lossy(
                    commit.summary_bytes().unwrap_or_default(),
                )
                .into_owned(),
            });
        }

        debug!("found {} commits in range {from}..{to}", entries.len());

        Ok(entries)
    }

    fn authors_in_range(&self, from: &str, to: &str) -> Result<Vec<String>> {
        let mailmap = self.repo.mailmap()?;
        let mut authors = vec![];

        for commit in self.walk_range(from, to)?.iter() {
            let author = commit.author_with_mailmap(&mailmap)?;
            let name = String::from_utf8_lossy(author.name_bytes());
            authors.push(name.into_owned());
        }

        Ok(authors)
    }

    fn file_at_revision(&self, revision: &str, path: &str) -> Result<String> {
        debug!("loading {path} at revision {revision}");
        let object = self.repo.revparse_single(&format!("{revision}:{path}"))?;
        let blob = object.as_blob().ok_or_else(|| {
            ReleaseNotesError::git_lookup(format!(
                "{path} at revision {revision} is not a file"
            ))
        })?;
        let content = std::str::from_utf8(blob.content())?;
        Ok(content.to_string())
    }
}

#[cfg(test)]
#[path = "repo_tests.rs"]
mod repo_tests;
