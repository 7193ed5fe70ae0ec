//! Facet node type stored in the slab.

use serde::Serialize;
use thin_vec::ThinVec;

use super::index_types::{FacetId, OptionFacetId};
use crate::types::FacetKind;

/// A node in one of the facet trees.
#[derive(Debug, Clone, Serialize)]
pub struct FacetNode {
    /// This node's own path segment.
    label: String,
    /// The facet value this node stands for. For tags and collections this is
    /// the `/`-joined segment prefix below the facet root (`a/b` for the node
    /// labelled `b` under `a`); for authors it equals the label.
    value: String,
    kind: FacetKind,
    parent: OptionFacetId,
    /// Records aggregated at exactly this node's path.
    pub count: usize,
    /// Child handles in first-seen order.
    pub children: ThinVec<FacetId>,
    /// When this node was first counted in the current rebuild pass.
    #[serde(skip)]
    pub(crate) visit: u64,
}

impl FacetNode {
    /// Visit stamp of a node not yet counted in the current pass.
    pub(crate) const UNVISITED: u64 = u64::MAX;

    pub fn new(
        parent: Option<FacetId>,
        label: impl Into<String>,
        value: impl Into<String>,
        kind: FacetKind,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            kind,
            parent: OptionFacetId::from_option(parent),
            count: 0,
            children: ThinVec::new(),
            visit: Self::UNVISITED,
        }
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[inline]
    pub fn kind(&self) -> FacetKind {
        self.kind
    }

    /// Returns the parent handle, or None for the synthetic root.
    #[inline]
    pub fn parent(&self) -> Option<FacetId> {
        self.parent.to_option()
    }

    #[inline]
    pub fn is_root_folder(&self) -> bool {
        self.kind.contains(FacetKind::ROOT_FOLDER)
    }

    /// Returns the position of `child` among this node's children.
    pub fn position_of(&self, child: FacetId) -> Option<usize> {
        self.children.iter().position(|&c| c == child)
    }

    /// Removes a child handle, returns true if it was present.
    pub fn remove_child(&mut self, child: FacetId) -> bool {
        if let Some(pos) = self.position_of(child) {
            self.children.remove(pos);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facet_node_basic() {
        let parent = FacetId::new(0, 0);
        let node = FacetNode::new(Some(parent), "b", "a/b", FacetKind::TAG);

        assert_eq!(node.label(), "b");
        assert_eq!(node.value(), "a/b");
        assert_eq!(node.kind(), FacetKind::TAG);
        assert_eq!(node.parent(), Some(parent));
        assert_eq!(node.count, 0);
        assert!(node.children.is_empty());
        assert!(!node.is_root_folder());
    }

    #[test]
    fn facet_node_children() {
        let mut node = FacetNode::new(None, "root", "root", FacetKind::ROOT_FOLDER);
        let child1 = FacetId::new(1, 0);
        let child2 = FacetId::new(2, 0);
        node.children.push(child1);
        node.children.push(child2);

        assert!(node.is_root_folder());
        assert_eq!(node.position_of(child2), Some(1));
        assert!(node.remove_child(child1));
        assert!(!node.remove_child(child1));
        assert_eq!(node.position_of(child2), Some(0));
    }
}
