//! Release metadata loaded from a per-release TOML file.
//!
//! The file is named after the release it describes (`v1.2.0.toml`) and
//! supplies everything that cannot be mined from history: title, preface,
//! curated notes and breaking changes.
//!
//! ```toml
//! project_name = "containerd"
//! github_repo = "containerd/containerd"
//! commit = "v1.2.0"
//! previous = "v1.1.0"
//! pre_release = false
//! preface = "Welcome to the release"
//!
//! [notes.cri]
//! title = "CRI plugin"
//! description = "The CRI plugin is now built in"
//!
//! [breaking.shimv1]
//! commit = "abc1234"
//! description = "The v1 shim API was removed"
//! ```
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, path::Path};

use crate::error::{ReleaseNotesError, Result};

/// Default dependency manifest path within the repository.
pub const DEFAULT_MANIFEST_FILE: &str = "vendor.conf";

/// Default template path, relative to the working directory.
pub const DEFAULT_TEMPLATE_FILE: &str = "TEMPLATE";

/// A curated release note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Note {
    pub title: String,
    pub description: String,
}

/// A breaking change called out by the release authors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakingChange {
    /// Commit that introduced the change
    pub commit: String,
    pub description: String,
}

/// A release artifact and its checksum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Download {
    pub filename: String,
    pub hash: String,
}

/// Hand-written metadata for a single release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReleaseMetadata {
    #[serde(default)]
    pub project_name: String,
    /// Repository identifier, i.e. `<owner>/<repo>`
    #[serde(default)]
    pub github_repo: String,
    /// Revision being released
    pub commit: String,
    /// Revision of the previous release
    pub previous: String,
    #[serde(default)]
    pub pre_release: bool,
    #[serde(default)]
    pub preface: String,
    #[serde(default)]
    pub notes: BTreeMap<String, Note>,
    #[serde(default, rename = "breaking")]
    pub breaking_changes: BTreeMap<String, BreakingChange>,
    #[serde(default)]
    pub downloads: Vec<Download>,
}

impl ReleaseMetadata {
    /// Parse and validate metadata from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let metadata: ReleaseMetadata = toml::from_str(content)?;
        metadata.validate()?;
        Ok(metadata)
    }

    /// Read, parse and validate a metadata file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| {
            ReleaseNotesError::invalid_config(format!(
                "unable to read {}: {err}",
                path.display()
            ))
        })?;
        Self::from_toml(&content)
    }

    fn validate(&self) -> Result<()> {
        if self.commit.trim().is_empty() {
            return Err(ReleaseNotesError::invalid_config(
                "commit must not be empty",
            ));
        }

        if self.previous.trim().is_empty() {
            return Err(ReleaseNotesError::invalid_config(
                "previous must not be empty",
            ));
        }

        Ok(())
    }
}

/// Derive the release version from the metadata file name by dropping a
/// trailing `.toml`, e.g. `releases/v1.2.0.toml` becomes `v1.2.0`.
pub fn parse_tag(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match name.strip_suffix(".toml") {
        Some(tag) => tag.to_string(),
        None => name,
    }
}
