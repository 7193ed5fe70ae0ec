//! Evaluating the highlight as a filter over records.
//!
//! Tags and collections match when the record's value starts with the
//! highlighted node's value (under the configured [`PrefixMatch`]); authors
//! must match exactly. Missing values are resolved to the same sentinels the
//! rebuild uses, so highlighting `<No Tags>` selects untagged records.
//! This is a change in behaviour: records with no tags or no collection
//! previously never matched a tag or collection highlight.

use super::build::{resolved_author, resolved_collection, resolved_tags};
use super::FacetIndex;
use crate::config::{FacetConfig, PrefixMatch};
use crate::types::{FacetKind, Record};

/// An owned snapshot of the highlight that can filter records without
/// borrowing the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightMatcher {
    filter: Option<Filter>,
    mode: PrefixMatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Filter {
    kind: FacetKind,
    value: String,
    /// Sentinel substituted for a missing value of this facet.
    fallback: String,
}

impl HighlightMatcher {
    /// A matcher that accepts every record.
    pub fn all() -> Self {
        Self {
            filter: None,
            mode: PrefixMatch::default(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.filter.is_some()
    }

    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        let Some(filter) = &self.filter else {
            return true;
        };
        matches_filter(
            filter.kind,
            &filter.value,
            &filter.fallback,
            self.mode,
            record,
        )
    }
}

impl FacetIndex {
    /// Returns true if `record` passes the active highlight. Always true when
    /// nothing is highlighted.
    pub fn predicate<R: Record + ?Sized>(&self, record: &R) -> bool {
        let Some(node) = self.highlighted_node() else {
            return true;
        };
        let fallback = fallback_for(&self.config, node.kind());
        matches_filter(
            node.kind(),
            node.value(),
            fallback,
            self.config.prefix_match,
            record,
        )
    }

    pub fn matcher(&self) -> HighlightMatcher {
        let filter = self.highlighted_node().map(|node| Filter {
            kind: node.kind(),
            value: node.value().to_string(),
            fallback: fallback_for(&self.config, node.kind()).to_string(),
        });
        HighlightMatcher {
            filter,
            mode: self.config.prefix_match,
        }
    }

    /// Yields the records that pass [`predicate`](Self::predicate).
    pub fn filter<'a, R, I>(&'a self, records: I) -> impl Iterator<Item = &'a R> + 'a
    where
        R: Record + 'a,
        I: IntoIterator<Item = &'a R>,
        I::IntoIter: 'a,
    {
        records
            .into_iter()
            .filter(move |record| self.predicate(*record))
    }
}

fn fallback_for(config: &FacetConfig, kind: FacetKind) -> &str {
    if kind.contains(FacetKind::TAG) {
        &config.no_tags_label
    } else if kind.contains(FacetKind::COLLECTION) {
        &config.no_collection_label
    } else if kind.contains(FacetKind::AUTHOR) {
        &config.no_author_label
    } else {
        ""
    }
}

fn matches_filter<R: Record + ?Sized>(
    kind: FacetKind,
    value: &str,
    fallback: &str,
    mode: PrefixMatch,
    record: &R,
) -> bool {
    if kind.contains(FacetKind::TAG) {
        return resolved_tags(record, fallback)
            .into_iter()
            .any(|tag| mode.matches(tag, value));
    }
    if kind.contains(FacetKind::COLLECTION) {
        return mode.matches(resolved_collection(record, fallback), value);
    }
    if kind.contains(FacetKind::AUTHOR) {
        return resolved_author(record, fallback) == value;
    }
    false
}
