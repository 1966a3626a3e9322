//! Dependency deltas between two manifest snapshots.
use serde::{Serialize, Serializer, ser::SerializeStruct};
use std::collections::BTreeSet;

use crate::manifest::DependencyManifest;

/// Classification of a [`DependencyChange`]. Serialized in lowercase so
/// templates can compare against `"added"`, `"removed"` or `"updated"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyChangeKind {
    Added,
    Removed,
    Updated,
}

/// A dependency whose pinned revision differs between two releases.
///
/// At least one of `previous` and `current` is always set. Both being set
/// means the revision was updated. Serializes with an extra `kind` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyChange {
    /// Dependency name or import path
    pub name: String,
    /// Revision pinned by the previous release
    pub previous: Option<String>,
    /// Revision pinned by the current release
    pub current: Option<String>,
}

impl DependencyChange {
    /// Added when only `current` is set, removed when only `previous` is
    /// set, updated otherwise.
    pub fn kind(&self) -> DependencyChangeKind {
        match (&self.previous, &self.current) {
            (None, _) => DependencyChangeKind::Added,
            (_, None) => DependencyChangeKind::Removed,
            _ => DependencyChangeKind::Updated,
        }
    }
}

impl Serialize for DependencyChange {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DependencyChange", 4)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("previous", &self.previous)?;
        state.serialize_field("current", &self.current)?;
        state.serialize_field("kind", &self.kind())?;
        state.end()
    }
}

/// Compare two manifests and return every added, removed or updated
/// dependency, sorted by name.
pub fn diff(
    previous: &DependencyManifest,
    current: &DependencyManifest,
) -> Vec<DependencyChange> {
    let names: BTreeSet<&str> = previous
        .iter()
        .chain(current.iter())
        .map(|(name, _)| name)
        .collect();

    names
        .into_iter()
        .filter_map(|name| {
            let prev = previous.get(name);
            let curr = current.get(name);

            if prev == curr {
                return None;
            }

            Some(DependencyChange {
                name: name.to_string(),
                previous: prev.map(String::from),
                current: curr.map(String::from),
            })
        })
        .collect()
}
