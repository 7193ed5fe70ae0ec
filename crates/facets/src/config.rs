//! Index configuration loaded from JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FacetError, Result};
use crate::tree::PATH_SEPARATOR;

pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// How a highlighted tag or collection is compared against record values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrefixMatch {
    /// Raw string prefix: `ab` also matches `abc`.
    #[default]
    Literal,
    /// Prefix must end at a segment boundary: `ab` matches `ab` and `ab/c`.
    Segment,
}

impl PrefixMatch {
    /// Returns true if `value` starts with `prefix` under this mode.
    pub fn matches(self, value: &str, prefix: &str) -> bool {
        match self {
            Self::Literal => value.starts_with(prefix),
            Self::Segment => match value.strip_prefix(prefix) {
                Some(rest) => rest.is_empty() || rest.starts_with(PATH_SEPARATOR),
                None => false,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacetConfig {
    pub tags_label: String,
    pub collections_label: String,
    pub authors_label: String,
    pub no_tags_label: String,
    pub no_collection_label: String,
    pub no_author_label: String,
    pub prefix_match: PrefixMatch,
    /// Drop nodes left with a zero count after a rebuild.
    pub prune_empty: bool,
    /// Appended to the highlighted node's display text.
    pub filtered_suffix: String,
    pub event_capacity: usize,
}

impl Default for FacetConfig {
    fn default() -> Self {
        Self {
            tags_label: "Tags".to_string(),
            collections_label: "Collections".to_string(),
            authors_label: "Authors".to_string(),
            no_tags_label: "<No Tags>".to_string(),
            no_collection_label: "<No Collection>".to_string(),
            no_author_label: "<No Author>".to_string(),
            prefix_match: PrefixMatch::Literal,
            prune_empty: true,
            filtered_suffix: " (filtered)".to_string(),
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl FacetConfig {
    /// Reads and validates a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parses and validates a JSON config string. Missing fields keep their
    /// defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let roots = [
            ("tags_label", &self.tags_label),
            ("collections_label", &self.collections_label),
            ("authors_label", &self.authors_label),
        ];
        for (field, label) in roots {
            if label.trim().is_empty() {
                return Err(FacetError::InvalidConfig(format!(
                    "{field} must not be empty"
                )));
            }
            if label.contains(PATH_SEPARATOR) {
                return Err(FacetError::InvalidConfig(format!(
                    "{field} must not contain '{PATH_SEPARATOR}'"
                )));
            }
        }
        if self.tags_label == self.collections_label
            || self.tags_label == self.authors_label
            || self.collections_label == self.authors_label
        {
            return Err(FacetError::InvalidConfig(
                "root labels must be distinct".to_string(),
            ));
        }
        if self.event_capacity == 0 {
            return Err(FacetError::InvalidConfig(
                "event_capacity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn literal_prefix_matches_inside_segments() {
        assert!(PrefixMatch::Literal.matches("abc", "ab"));
        assert!(PrefixMatch::Literal.matches("ab/c", "ab"));
        assert!(!PrefixMatch::Literal.matches("a", "ab"));
    }

    #[test]
    fn segment_prefix_stops_at_boundaries() {
        assert!(PrefixMatch::Segment.matches("ab", "ab"));
        assert!(PrefixMatch::Segment.matches("ab/c", "ab"));
        assert!(!PrefixMatch::Segment.matches("abc", "ab"));
        assert!(!PrefixMatch::Segment.matches("a", "ab"));
    }

    #[test]
    fn empty_json_yields_defaults() {
        let config = FacetConfig::from_json("{}").unwrap();
        assert_eq!(config, FacetConfig::default());
        assert_eq!(config.no_tags_label, "<No Tags>");
        assert!(config.prune_empty);
    }

    #[test]
    fn partial_json_overrides_fields() {
        let raw = r#"{ "prefix_match": "segment", "authors_label": "People" }"#;
        let config = FacetConfig::from_json(raw).unwrap();
        assert_eq!(config.prefix_match, PrefixMatch::Segment);
        assert_eq!(config.authors_label, "People");
        assert_eq!(config.tags_label, "Tags");
    }

    #[test]
    fn invalid_configs_are_rejected() {
        for raw in [
            r#"{ "tags_label": "" }"#,
            r#"{ "tags_label": "Authors" }"#,
            r#"{ "collections_label": "a/b" }"#,
            r#"{ "event_capacity": 0 }"#,
        ] {
            let result = FacetConfig::from_json(raw);
            assert!(
                matches!(result, Err(FacetError::InvalidConfig(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            FacetConfig::from_json("{ not json"),
            Err(FacetError::Config(_))
        ));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "prune_empty": false }}"#).unwrap();

        let config = FacetConfig::load(file.path()).unwrap();
        assert!(!config.prune_empty);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = FacetConfig::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(FacetError::Io(_))));
    }
}
