//! Rebuilding the facet trees from a record collection.
//!
//! Node identities are reused across rebuilds: counts are reset in place and
//! missing nodes are appended. Once every record is counted, children are put
//! back in the order this pass first reached them, so the layout never depends
//! on earlier rebuilds. Nodes left at zero are pruned afterwards and the
//! highlight is checked against the surviving nodes.

use tokio::sync::broadcast::{self, error::TryRecvError};

use super::{FacetIndex, FacetRoots};
use crate::config::FacetConfig;
use crate::event::{LayoutEvent, LayoutReason, SourceEvent};
use crate::storage::FacetId;
use crate::tree::{FacetTree, PATH_SEPARATOR};
use crate::types::{FacetKind, Record, RecordSource};

impl FacetIndex {
    /// Recomputes all three facet trees from `records`.
    pub fn rebuild<I>(&mut self, records: I)
    where
        I: IntoIterator,
        I::Item: Record,
    {
        self.bus
            .publish(LayoutEvent::AboutToChange(LayoutReason::Rebuild));

        let Self {
            config,
            tree,
            roots,
            ..
        } = self;
        let root = tree.root();
        tree.reset(root);

        let mut record_count = 0usize;
        for record in records {
            aggregate(tree, roots, config, &record);
            record_count += 1;
        }
        tree.sort_children_by_visit(root);

        let pruned = if config.prune_empty {
            tree.prune_empty(root)
        } else {
            0
        };
        log::debug!(
            "facet rebuild: {} records, {} nodes, {} pruned",
            record_count,
            tree.len() - 1,
            pruned
        );

        self.validate_highlight();
        self.bus
            .publish(LayoutEvent::Changed(LayoutReason::Rebuild));
    }

    /// Rebuilds from the host's current records.
    pub fn refresh<S: RecordSource + ?Sized>(&mut self, source: &S) {
        self.rebuild(source.records());
    }

    /// Drains pending change notifications without blocking and rebuilds once
    /// if there were any. Returns true if a rebuild ran.
    pub fn sync<S: RecordSource + ?Sized>(
        &mut self,
        events: &mut broadcast::Receiver<SourceEvent>,
        source: &S,
    ) -> bool {
        let mut pending = false;
        loop {
            match events.try_recv() {
                Ok(SourceEvent::Changed) => pending = true,
                Err(TryRecvError::Lagged(skipped)) => {
                    log::debug!("source receiver lagged by {skipped} events");
                    pending = true;
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
        if pending {
            self.refresh(source);
        }
        pending
    }
}

fn aggregate<R: Record>(
    tree: &mut FacetTree,
    roots: &FacetRoots,
    config: &FacetConfig,
    record: &R,
) {
    for tag in resolved_tags(record, &config.no_tags_label) {
        count_path(tree, roots.tags, tag, FacetKind::TAG);
    }

    let collection = resolved_collection(record, &config.no_collection_label);
    count_path(tree, roots.collections, collection, FacetKind::COLLECTION);

    let author = resolved_author(record, &config.no_author_label);
    let node = match tree.find_child(roots.authors, author) {
        Some(node) => Some(node),
        None => tree.append_child(roots.authors, author, author, FacetKind::AUTHOR),
    };
    if let Some(node) = node {
        tree.count_visit(node);
    }
}

/// Increments the node for every segment prefix of `value` below
/// `facet_root`, creating nodes as needed. `a/b/c` counts `a`, `a/b` and
/// `a/b/c` once each.
fn count_path(tree: &mut FacetTree, facet_root: FacetId, value: &str, kind: FacetKind) {
    let mut parent = facet_root;
    let mut end = 0;
    for (position, segment) in value.split(PATH_SEPARATOR).enumerate() {
        if position > 0 {
            end += PATH_SEPARATOR.len();
        }
        end += segment.len();

        let node = match tree.find_child(parent, segment) {
            Some(node) => node,
            None => match tree.append_child(parent, segment, &value[..end], kind) {
                Some(node) => node,
                None => return,
            },
        };
        tree.count_visit(node);
        parent = node;
    }
}

/// The record's tags, or the sentinel when it has none.
pub(super) fn resolved_tags<'a, R: Record + ?Sized>(
    record: &'a R,
    fallback: &'a str,
) -> Vec<&'a str> {
    let tags = record.tags();
    if tags.is_empty() {
        vec![fallback]
    } else {
        tags.iter().map(String::as_str).collect()
    }
}

/// The record's collection, or the sentinel when it is missing or blank.
pub(super) fn resolved_collection<'a, R: Record + ?Sized>(
    record: &'a R,
    fallback: &'a str,
) -> &'a str {
    record
        .collection()
        .filter(|collection| !collection.trim().is_empty())
        .unwrap_or(fallback)
}

/// The record's author, or the sentinel when it is missing or blank.
pub(super) fn resolved_author<'a, R: Record + ?Sized>(
    record: &'a R,
    fallback: &'a str,
) -> &'a str {
    record
        .author()
        .filter(|author| !author.trim().is_empty())
        .unwrap_or(fallback)
}
