//! The faceted index.
//!
//! `FacetIndex` owns one [`FacetTree`] holding three facet roots (Tags,
//! Collections, Authors) below a synthetic root, the single highlighted node,
//! and the bus that announces layout changes.
//!
//! ## Module Structure
//!
//! - `build` - Rebuilding the trees from records
//! - `highlight` - Highlight selection and validation
//! - `predicate` - Evaluating the highlight against records
//! - `view` - Tree-shape and display queries for renderers

mod build;
mod highlight;
mod predicate;
mod view;

use serde::Serialize;
use tokio::sync::broadcast;

use crate::bus::LayoutBus;
use crate::config::FacetConfig;
use crate::error::{FacetError, Result};
use crate::event::LayoutEvent;
use crate::storage::{FacetId, FacetNode};
use crate::tree::FacetTree;
use crate::types::FacetKind;

pub use predicate::HighlightMatcher;
pub use view::NodeDisplay;

/// Handles of the three facet roots. Created with the index and never
/// replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacetRoots {
    pub tags: FacetId,
    pub collections: FacetId,
    pub authors: FacetId,
}

/// One node in a [`FacetIndex::snapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetEntry {
    pub path: String,
    pub kind: FacetKind,
    pub count: usize,
    /// 0 for facet roots.
    pub depth: usize,
}

#[derive(Debug)]
pub struct FacetIndex {
    config: FacetConfig,
    tree: FacetTree,
    roots: FacetRoots,
    highlighted: Option<FacetId>,
    bus: LayoutBus,
}

impl Default for FacetIndex {
    fn default() -> Self {
        Self::build(FacetConfig::default())
    }
}

impl FacetIndex {
    /// Creates an empty index with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty index after validating `config`.
    pub fn with_config(config: FacetConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: FacetConfig) -> Self {
        let mut tree = FacetTree::new();
        let roots = FacetRoots {
            tags: tree.append_facet_root(
                &config.tags_label,
                FacetKind::ROOT_FOLDER | FacetKind::TAG,
            ),
            collections: tree.append_facet_root(
                &config.collections_label,
                FacetKind::ROOT_FOLDER | FacetKind::COLLECTION,
            ),
            authors: tree.append_facet_root(
                &config.authors_label,
                FacetKind::ROOT_FOLDER | FacetKind::AUTHOR,
            ),
        };
        let bus = LayoutBus::new(config.event_capacity);
        Self {
            config,
            tree,
            roots,
            highlighted: None,
            bus,
        }
    }

    #[inline]
    pub fn config(&self) -> &FacetConfig {
        &self.config
    }

    #[inline]
    pub fn tree(&self) -> &FacetTree {
        &self.tree
    }

    #[inline]
    pub fn roots(&self) -> FacetRoots {
        self.roots
    }

    /// Gets a live node.
    #[inline]
    pub fn node(&self, id: FacetId) -> Option<&FacetNode> {
        self.tree.get(id)
    }

    /// Gets a live node, failing with [`FacetError::UnknownNode`].
    pub fn try_node(&self, id: FacetId) -> Result<&FacetNode> {
        self.tree.get(id).ok_or(FacetError::UnknownNode(id))
    }

    /// Resolves a label path such as `["Tags", "a", "b"]`.
    pub fn node_lookup_by_path<S: AsRef<str>>(&self, path: &[S]) -> Option<FacetId> {
        self.tree.find_child_by_path(self.tree.root(), path)
    }

    /// The `/`-joined path of a node, e.g. `Tags/a/b`.
    pub fn node_path(&self, id: FacetId) -> Option<String> {
        self.tree.full_path(id)
    }

    /// Number of live nodes below the synthetic root.
    pub fn node_count(&self) -> usize {
        self.tree.len() - 1
    }

    /// Subscribes to layout notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<LayoutEvent> {
        self.bus.subscribe()
    }

    /// Every node below the synthetic root in preorder.
    pub fn snapshot(&self) -> Vec<FacetEntry> {
        self.tree
            .all_subnodes(self.tree.root())
            .into_iter()
            .filter_map(|id| {
                let node = self.tree.get(id)?;
                Some(FacetEntry {
                    path: self.tree.full_path(id)?,
                    kind: node.kind(),
                    count: node.count,
                    depth: self.tree.depth(id)?,
                })
            })
            .collect()
    }
}
