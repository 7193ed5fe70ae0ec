//! Tree-shape and display queries for renderers.
//!
//! The synthetic root is addressed as `None`, matching tree widgets whose
//! invisible root has no index of its own. Facet roots therefore report no
//! parent.

use super::FacetIndex;
use crate::storage::FacetId;
use crate::types::FacetKind;

/// What a renderer needs to draw one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDisplay<'a> {
    pub label: &'a str,
    /// The label, annotated when the node is the highlight.
    pub text: String,
    pub kind: FacetKind,
    /// None for root folders, which show no count.
    pub count: Option<usize>,
    pub is_highlighted: bool,
    /// True for the highlighted node and each of its ancestors.
    pub on_highlighted_path: bool,
}

impl FacetIndex {
    fn resolve_parent(&self, parent: Option<FacetId>) -> FacetId {
        parent.unwrap_or_else(|| self.tree.root())
    }

    pub fn child_count(&self, parent: Option<FacetId>) -> usize {
        self.tree
            .get(self.resolve_parent(parent))
            .map_or(0, |node| node.children.len())
    }

    pub fn child(&self, parent: Option<FacetId>, row: usize) -> Option<FacetId> {
        self.tree
            .get(self.resolve_parent(parent))?
            .children
            .get(row)
            .copied()
    }

    /// The visible parent of `id`; None for facet roots and the synthetic root.
    pub fn parent(&self, id: FacetId) -> Option<FacetId> {
        self.tree
            .get(id)?
            .parent()
            .filter(|&parent| parent != self.tree.root())
    }

    /// Position of `id` within its parent.
    pub fn row(&self, id: FacetId) -> usize {
        self.tree.child_index(id)
    }

    pub fn is_highlighted(&self, id: FacetId) -> bool {
        self.highlighted == Some(id)
    }

    pub fn on_highlighted_path(&self, id: FacetId) -> bool {
        self.highlighted
            .is_some_and(|highlighted| self.tree.is_ancestor_or_self(id, highlighted))
    }

    pub fn display(&self, id: FacetId) -> Option<NodeDisplay<'_>> {
        let node = self.tree.get(id)?;
        let is_highlighted = self.is_highlighted(id);
        let text = if is_highlighted {
            format!("{}{}", node.label(), self.config.filtered_suffix)
        } else {
            node.label().to_string()
        };
        Some(NodeDisplay {
            label: node.label(),
            text,
            kind: node.kind(),
            count: (!node.is_root_folder()).then_some(node.count),
            is_highlighted,
            on_highlighted_path: self.on_highlighted_path(id),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::index::FacetIndex;
    use crate::types::{FacetKind, FileRecord};

    fn indexed() -> FacetIndex {
        let mut index = FacetIndex::new();
        index.rebuild(&[
            FileRecord::new().with_tags(["a/b", "c"]).with_author("A"),
            FileRecord::new().with_tags(["a"]).with_author("B"),
        ]);
        index
    }

    #[test]
    fn top_level_rows_are_facet_roots() {
        let index = indexed();
        let roots = index.roots();

        assert_eq!(index.child_count(None), 3);
        assert_eq!(index.child(None, 0), Some(roots.tags));
        assert_eq!(index.child(None, 1), Some(roots.collections));
        assert_eq!(index.child(None, 2), Some(roots.authors));
        assert_eq!(index.child(None, 3), None);
        assert_eq!(index.parent(roots.tags), None);
        assert_eq!(index.row(roots.authors), 2);
    }

    #[test]
    fn row_and_parent_round_trip() {
        let index = indexed();
        let tags = index.roots().tags;

        assert_eq!(index.child_count(Some(tags)), 2);
        let a = index.child(Some(tags), 0).unwrap();
        let c = index.child(Some(tags), 1).unwrap();
        let b = index.child(Some(a), 0).unwrap();

        assert_eq!(index.parent(b), Some(a));
        assert_eq!(index.parent(a), Some(tags));
        assert_eq!(index.row(c), 1);
        assert_eq!(index.child(index.parent(b), index.row(b)), Some(b));
        assert_eq!(index.child_count(Some(b)), 0);
    }

    #[test]
    fn display_marks_highlighted_path() {
        let mut index = indexed();
        let tags = index.roots().tags;
        let a = index.node_lookup_by_path(&["Tags", "a"]).unwrap();
        let b = index.node_lookup_by_path(&["Tags", "a", "b"]).unwrap();
        let c = index.node_lookup_by_path(&["Tags", "c"]).unwrap();
        index.set_highlighted(Some(b));

        let shown = index.display(b).unwrap();
        assert_eq!(shown.label, "b");
        assert_eq!(shown.text, "b (filtered)");
        assert_eq!(shown.count, Some(1));
        assert!(shown.is_highlighted);
        assert!(shown.on_highlighted_path);

        let parent = index.display(a).unwrap();
        assert_eq!(parent.text, "a");
        assert_eq!(parent.count, Some(2));
        assert!(!parent.is_highlighted);
        assert!(parent.on_highlighted_path);

        assert!(index.display(tags).unwrap().on_highlighted_path);
        assert!(!index.display(c).unwrap().on_highlighted_path);
        assert!(!index.on_highlighted_path(index.roots().authors));
    }

    #[test]
    fn root_folders_show_no_count() {
        let index = indexed();
        let shown = index.display(index.roots().collections).unwrap();

        assert_eq!(shown.text, "Collections");
        assert_eq!(shown.count, None);
        assert_eq!(shown.kind, FacetKind::ROOT_FOLDER | FacetKind::COLLECTION);
    }

    #[test]
    fn nothing_is_on_path_without_highlight() {
        let index = indexed();
        let a = index.node_lookup_by_path(&["Tags", "a"]).unwrap();
        assert!(!index.on_highlighted_path(a));
        assert!(!index.is_highlighted(a));
    }
}
