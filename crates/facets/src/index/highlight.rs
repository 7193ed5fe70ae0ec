use super::FacetIndex;
use crate::event::{LayoutEvent, LayoutReason};
use crate::storage::{FacetId, FacetNode};

impl FacetIndex {
    /// The highlighted node, if a filter is active.
    #[inline]
    pub fn highlighted(&self) -> Option<FacetId> {
        self.highlighted
    }

    pub fn highlighted_node(&self) -> Option<&FacetNode> {
        self.highlighted.and_then(|id| self.tree.get(id))
    }

    /// Replaces the highlighted node; `None` clears the filter.
    ///
    /// Root folders and handles that don't resolve are ignored and return
    /// false. Layout events are emitted only when the highlight changes.
    pub fn set_highlighted(&mut self, id: Option<FacetId>) -> bool {
        if let Some(id) = id {
            match self.tree.get(id) {
                None => {
                    log::debug!("ignoring highlight of unknown node {id}");
                    return false;
                }
                Some(node) if !node.kind().is_selectable() => {
                    log::debug!("ignoring highlight of root folder {:?}", node.label());
                    return false;
                }
                Some(_) => {}
            }
        }
        if self.highlighted == id {
            return true;
        }

        self.bus
            .publish(LayoutEvent::AboutToChange(LayoutReason::Highlight));
        self.highlighted = id;
        self.bus
            .publish(LayoutEvent::Changed(LayoutReason::Highlight));
        true
    }

    /// Highlights `id`, or clears the highlight if `id` already holds it.
    pub fn toggle_highlighted(&mut self, id: FacetId) -> bool {
        if self.highlighted == Some(id) {
            self.set_highlighted(None)
        } else {
            self.set_highlighted(Some(id))
        }
    }

    pub fn clear_highlighted(&mut self) {
        self.set_highlighted(None);
    }

    /// Drops a highlight that no longer points at a counted node.
    pub(super) fn validate_highlight(&mut self) {
        let Some(id) = self.highlighted else {
            return;
        };
        let live = self.tree.get(id).is_some_and(|node| node.count > 0);
        if !live {
            log::info!("clearing highlight {id}: node no longer present");
            self.highlighted = None;
        }
    }
}
