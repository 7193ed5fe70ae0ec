//! FacetTree - hierarchical tree wrapper for slab-based node storage.
//!
//! `FacetTree` owns the slab along with the synthetic root handle and
//! provides the structural operations the index is built from: appending
//! children, resolving label paths, resetting counts and pruning.

use std::ops::Deref;

use crate::storage::{FacetId, FacetNode, Slab};
use crate::types::FacetKind;

/// Separator used when joining labels into a node path.
pub const PATH_SEPARATOR: &str = "/";

/// Hierarchical facet node tree backed by slab storage.
#[derive(Debug, Clone)]
pub struct FacetTree {
    slab: Slab<FacetNode>,
    /// Synthetic root; never displayed and never part of a path.
    root: FacetId,
    /// Next visit stamp handed out by `count_visit`.
    next_visit: u64,
}

impl FacetTree {
    /// Creates a tree holding only the synthetic root.
    pub fn new() -> Self {
        let mut slab = Slab::new();
        let node = FacetNode::new(None, "root", "root", FacetKind::ROOT_FOLDER);
        let root = slab.insert(node);
        Self {
            slab,
            root,
            next_visit: 0,
        }
    }

    /// Returns the synthetic root handle.
    #[inline]
    pub fn root(&self) -> FacetId {
        self.root
    }

    /// Gets a mutable reference to a live node.
    #[inline]
    pub fn get_mut(&mut self, id: FacetId) -> Option<&mut FacetNode> {
        self.slab.get_mut(id)
    }

    /// Appends a facet root directly below the synthetic root.
    pub fn append_facet_root(&mut self, label: &str, kind: FacetKind) -> FacetId {
        let root = self.root;
        let node = FacetNode::new(Some(root), label, label, kind);
        let child = self.slab.insert(node);
        self.slab[root].children.push(child);
        child
    }

    /// Creates a child of `parent` and appends it after its existing children.
    ///
    /// No duplicate check is made; callers look the label up first. Returns
    /// `None` if `parent` is not a live node.
    pub fn append_child(
        &mut self,
        parent: FacetId,
        label: impl Into<String>,
        value: impl Into<String>,
        kind: FacetKind,
    ) -> Option<FacetId> {
        if !self.slab.contains(parent) {
            return None;
        }
        let node = FacetNode::new(Some(parent), label, value, kind);
        let child = self.slab.insert(node);
        self.slab[parent].children.push(child);
        Some(child)
    }

    /// Returns the first child of `parent` whose label equals `label`.
    pub fn find_child(&self, parent: FacetId, label: &str) -> Option<FacetId> {
        for &child in &self.slab.get(parent)?.children {
            if self.slab.get(child).map(FacetNode::label) == Some(label) {
                return Some(child);
            }
        }
        None
    }

    /// Walks `path` one label at a time starting below `from`.
    ///
    /// Matching is exact and case-sensitive. Returns `None` as soon as a label
    /// has no matching child, or when `path` is empty.
    pub fn find_child_by_path<S: AsRef<str>>(&self, from: FacetId, path: &[S]) -> Option<FacetId> {
        if path.is_empty() {
            return None;
        }
        let mut current = from;
        for label in path {
            current = self.find_child(current, label.as_ref())?;
        }
        Some(current)
    }

    /// Sets the count of `id` and every descendant to zero, keeping the nodes.
    /// The nodes are marked unvisited for the next pass.
    pub fn reset(&mut self, id: FacetId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.slab.get_mut(current) {
                node.count = 0;
                node.visit = FacetNode::UNVISITED;
                stack.extend(node.children.iter().copied());
            }
        }
    }

    /// Increments the count of `id`, stamping it with the next visit number
    /// the first time it is counted since the last `reset`.
    pub fn count_visit(&mut self, id: FacetId) {
        let Some(node) = self.slab.get_mut(id) else {
            return;
        };
        if node.visit == FacetNode::UNVISITED {
            node.visit = self.next_visit;
            self.next_visit += 1;
        }
        node.count += 1;
    }

    /// Reorders the children of `id` and of every descendant by visit stamp.
    ///
    /// The sort is stable, so unvisited nodes keep their relative order after
    /// the visited ones.
    pub fn sort_children_by_visit(&mut self, id: FacetId) {
        let mut parents = vec![id];
        parents.extend(self.all_subnodes(id));

        for parent in parents {
            let Some(node) = self.slab.get(parent) else {
                continue;
            };
            if node.children.len() < 2 {
                continue;
            }
            let mut children: Vec<FacetId> = node.children.iter().copied().collect();
            children.sort_by_key(|&child| {
                self.slab
                    .get(child)
                    .map_or(FacetNode::UNVISITED, |node| node.visit)
            });
            if let Some(node) = self.slab.get_mut(parent) {
                node.children = children.into_iter().collect();
            }
        }
    }

    /// Position of `id` within its parent's children; 0 for the root or an
    /// unknown handle.
    pub fn child_index(&self, id: FacetId) -> usize {
        self.slab
            .get(id)
            .and_then(FacetNode::parent)
            .and_then(|parent| self.slab.get(parent))
            .and_then(|parent| parent.position_of(id))
            .unwrap_or(0)
    }

    /// Labels from just below the synthetic root down to `id`.
    ///
    /// Returns `None` if the node doesn't exist or the chain is broken.
    pub fn path_labels(&self, id: FacetId) -> Option<Vec<&str>> {
        let mut segments = Vec::new();
        let mut current = id;

        loop {
            let node = self.slab.get(current)?;
            match node.parent() {
                Some(parent) => {
                    segments.push(node.label());
                    current = parent;
                }
                None => break,
            }
        }

        segments.reverse();
        Some(segments)
    }

    /// The `/`-joined path of `id`, e.g. `Tags/a/b`. The synthetic root has
    /// the empty path.
    pub fn full_path(&self, id: FacetId) -> Option<String> {
        let labels = self.path_labels(id)?;
        Some(labels.join(PATH_SEPARATOR))
    }

    /// Number of ancestors below the synthetic root; 0 for facet roots.
    pub fn depth(&self, id: FacetId) -> Option<usize> {
        let labels = self.path_labels(id)?;
        Some(labels.len().saturating_sub(1))
    }

    /// Returns true if `ancestor` is `id` or lies on its parent chain.
    pub fn is_ancestor_or_self(&self, ancestor: FacetId, id: FacetId) -> bool {
        let mut current = Some(id);
        while let Some(candidate) = current {
            if candidate == ancestor {
                return true;
            }
            current = self.slab.get(candidate).and_then(FacetNode::parent);
        }
        false
    }

    /// Returns all subnodes (children, grandchildren, etc.) of a node in
    /// preorder, children in insertion order.
    pub fn all_subnodes(&self, id: FacetId) -> Vec<FacetId> {
        let mut result = Vec::new();
        let mut stack = Vec::new();

        if let Some(node) = self.slab.get(id) {
            stack.extend(node.children.iter().rev().copied());
        }

        while let Some(current) = stack.pop() {
            result.push(current);
            if let Some(node) = self.slab.get(current) {
                stack.extend(node.children.iter().rev().copied());
            }
        }

        result
    }

    /// Removes `id` and its whole subtree, detaching it from its parent.
    ///
    /// Returns the number of nodes freed. The synthetic root cannot be removed.
    pub fn remove_subtree(&mut self, id: FacetId) -> usize {
        if id == self.root {
            return 0;
        }
        let Some(parent) = self.slab.get(id).and_then(FacetNode::parent) else {
            return 0;
        };
        if let Some(parent) = self.slab.get_mut(parent) {
            parent.remove_child(id);
        }

        let mut removed = 0;
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.slab.try_remove(current) {
                stack.extend(node.children);
                removed += 1;
            }
        }
        removed
    }

    /// Removes every non-root-folder node below `id` whose count is zero.
    ///
    /// Returns the number of nodes freed.
    pub fn prune_empty(&mut self, id: FacetId) -> usize {
        let empty: Vec<FacetId> = self
            .all_subnodes(id)
            .into_iter()
            .filter(|&child| {
                self.slab
                    .get(child)
                    .is_some_and(|node| node.count == 0 && !node.is_root_folder())
            })
            .collect();

        // An ancestor listed earlier may already have taken the node with it.
        empty
            .into_iter()
            .map(|child| {
                if self.slab.contains(child) {
                    self.remove_subtree(child)
                } else {
                    0
                }
            })
            .sum()
    }
}

impl Default for FacetTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for FacetTree {
    type Target = Slab<FacetNode>;

    fn deref(&self) -> &Self::Target {
        &self.slab
    }
}
