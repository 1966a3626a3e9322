//! Assembly of commit changes and contributor names for a release.
use serde::Serialize;
use std::collections::BTreeSet;

use crate::repo::LogEntry;

/// One commit included in the release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeEntry {
    /// Abbreviated commit id
    pub commit: String,
    /// Commit summary line
    pub description: String,
}

/// Convert log entries into change entries, keeping the order version
/// control returned them in (newest first).
pub fn assemble_changes(commits: Vec<LogEntry>) -> Vec<ChangeEntry> {
    commits
        .into_iter()
        .map(|entry| ChangeEntry {
            commit: entry.id,
            description: entry.summary.trim().to_string(),
        })
        .collect()
}

/// Deduplicate and sort contributor names, dropping blank entries.
pub fn assemble_contributors(names: Vec<String>) -> Vec<String> {
    names
        .into_iter()
        .filter(|name| !name.trim().is_empty())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_entry(id: &str, summary: &str) -> LogEntry {
        LogEntry {
            id: id.into(),
            summary: summary.into(),
        }
    }

    #[test]
    fn preserves_commit_order() {
        let changes = assemble_changes(vec![
            log_entry("c3", "third"),
            log_entry("c1", "first"),
            log_entry("c2", "second "),
        ]);

        assert_eq!(
            changes,
            vec![
                ChangeEntry {
                    commit: "c3".into(),
                    description: "third".into()
                },
                ChangeEntry {
                    commit: "c1".into(),
                    description: "first".into()
                },
                ChangeEntry {
                    commit: "c2".into(),
                    description: "second".into()
                },
            ]
        );
    }

    #[test]
    fn empty_log_yields_no_changes() {
        assert!(assemble_changes(vec![]).is_empty());
    }

    #[test]
    fn dedups_and_sorts_contributors() {
        let names = vec!["Bob", "Alice", "Bob", " "]
            .into_iter()
            .map(String::from)
            .collect();

        assert_eq!(assemble_contributors(names), vec!["Alice", "Bob"]);
    }

    #[test]
    fn contributor_dedup_is_case_sensitive() {
        let names = vec!["alice", "Alice", "", "alice"]
            .into_iter()
            .map(String::from)
            .collect();

        assert_eq!(assemble_contributors(names), vec!["Alice", "alice"]);
    }
}
