//! Parsing of line-oriented dependency manifests such as `vendor.conf`.
//!
//! Each entry is `<name> <revision> [extra fields]`. Blank lines and lines
//! starting with `#` are ignored, trailing `#` comments are stripped and
//! lines with fewer than two fields are skipped.
use log::*;
use std::collections::BTreeMap;

/// Pinned dependency revisions keyed by dependency name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyManifest {
    entries: BTreeMap<String, String>,
}

impl DependencyManifest {
    /// Parse manifest text. Later entries for the same name replace earlier
    /// ones.
    pub fn parse(raw: &str) -> Self {
        let mut entries = BTreeMap::new();

        for line in raw.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let line = match line.find('#') {
                Some(idx) => &line[..idx],
                None => line,
            };

            let mut fields = line.split_whitespace();

            match (fields.next(), fields.next()) {
                (Some(name), Some(revision)) => {
                    entries.insert(name.to_string(), revision.to_string());
                }
                _ => debug!("skipping malformed manifest entry: {line}"),
            }
        }

        Self { entries }
    }

    /// Revision pinned for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Entries in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, r)| (n.as_str(), r.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N, R> FromIterator<(N, R)> for DependencyManifest
where
    N: Into<String>,
    R: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, R)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(n, r)| (n.into(), r.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VENDOR_CONF: &str = r#"
# runtime
github.com/containerd/go-runc 14606eb66abd9e834e3bd22a4f5f46a3aad54c54
github.com/containerd/console 0650fd9eeb50bab4fc99dceb9f2e14cf58f36e7f

github.com/sirupsen/logrus v1.0.0 # logging
golang.org/x/sys 314a259e304ff91bd6985da2a7149bbf91237993 https://github.com/golang/sys
"#;

    #[test]
    fn parses_names_and_revisions() {
        let manifest = DependencyManifest::parse(VENDOR_CONF);

        assert_eq!(manifest.len(), 4);
        assert_eq!(
            manifest.get("github.com/containerd/go-runc"),
            Some("14606eb66abd9e834e3bd22a4f5f46a3aad54c54")
        );
        assert_eq!(manifest.get("github.com/sirupsen/logrus"), Some("v1.0.0"));
        assert_eq!(
            manifest.get("golang.org/x/sys"),
            Some("314a259e304ff91bd6985da2a7149bbf91237993")
        );
    }

    #[test]
    fn ignores_comments_and_blank_lines() {
        let manifest = DependencyManifest::parse("# only a comment\n\n   \n");
        assert!(manifest.is_empty());
    }

    #[test]
    fn skips_malformed_lines() {
        let raw = "libA rev1\nonlyonefield\nlibB rev2\n";
        let manifest = DependencyManifest::parse(raw);

        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.get("onlyonefield"), None);
        assert_eq!(manifest.get("libA"), Some("rev1"));
        assert_eq!(manifest.get("libB"), Some("rev2"));
    }

    #[test]
    fn skips_indented_comments() {
        let manifest = DependencyManifest::parse("   # note\n\tlibA rev1\n");

        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest.get("libA"), Some("rev1"));
        assert_eq!(manifest.get("#"), None);
    }

    #[test]
    fn skips_entry_whose_revision_is_a_comment() {
        let manifest = DependencyManifest::parse("libA # rev1\n");
        assert!(manifest.is_empty());
    }

    #[test]
    fn last_duplicate_wins() {
        let manifest = DependencyManifest::parse("libA rev1\nlibA rev2\n");
        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest.get("libA"), Some("rev2"));
    }

    #[test]
    fn parsing_is_idempotent() {
        assert_eq!(
            DependencyManifest::parse(VENDOR_CONF),
            DependencyManifest::parse(VENDOR_CONF)
        );
    }

    #[test]
    fn iterates_in_name_order() {
        let manifest = DependencyManifest::parse("zeta 1\nalpha 2\nBeta 3\n");
        let names: Vec<&str> = manifest.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Beta", "alpha", "zeta"]);
    }
}
