//! Handle types for type-safe slab indexing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A generation-checked handle to a node in the slab.
///
/// The slot index is 32 bits; `u32::MAX` is reserved for `OptionFacetId`.
/// Removing a node bumps its slot's generation, so a handle taken before the
/// removal never resolves to whatever is stored in that slot afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FacetId {
    slot: u32,
    generation: u32,
}

impl FacetId {
    /// Creates a handle from a slot index and generation.
    ///
    /// # Panics
    /// Panics if `slot >= u32::MAX` (reserved for the None sentinel).
    #[inline]
    pub(crate) fn new(slot: usize, generation: u32) -> Self {
        assert!(
            slot < u32::MAX as usize,
            "facet slot must be less than u32::MAX"
        );
        Self {
            slot: slot as u32,
            generation,
        }
    }

    /// Returns the slot index as a usize.
    #[inline]
    pub fn slot(&self) -> usize {
        self.slot as usize
    }

    /// Returns the generation this handle was issued for.
    #[inline]
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for FacetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.slot, self.generation)
    }
}

/// An optional handle using `u32::MAX` in the slot as the None sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionFacetId(FacetId);

impl OptionFacetId {
    const NONE_SLOT: u32 = u32::MAX;

    /// Creates a None value.
    #[inline]
    pub fn none() -> Self {
        Self(FacetId {
            slot: Self::NONE_SLOT,
            generation: 0,
        })
    }

    /// Creates a Some value from a FacetId.
    #[inline]
    pub fn some(id: FacetId) -> Self {
        Self(id)
    }

    /// Creates from an Option<FacetId>.
    #[inline]
    pub fn from_option(id: Option<FacetId>) -> Self {
        id.map_or(Self::none(), Self::some)
    }

    /// Converts to an Option<FacetId>.
    #[inline]
    pub fn to_option(self) -> Option<FacetId> {
        if self.0.slot == Self::NONE_SLOT {
            None
        } else {
            Some(self.0)
        }
    }
}

impl Default for OptionFacetId {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facet_id_accessors() {
        let id = FacetId::new(100, 3);
        assert_eq!(id.slot(), 100);
        assert_eq!(id.generation(), 3);
        assert_eq!(id.to_string(), "#100v3");
    }

    #[test]
    fn option_facet_id_round_trips() {
        let id = FacetId::new(7, 0);

        assert_eq!(OptionFacetId::none().to_option(), None);
        assert_eq!(OptionFacetId::some(id).to_option(), Some(id));
        assert_eq!(OptionFacetId::from_option(Some(id)).to_option(), Some(id));
        assert_eq!(OptionFacetId::from_option(None).to_option(), None);
        assert_eq!(OptionFacetId::default(), OptionFacetId::none());
    }

    #[test]
    fn handles_with_different_generations_differ() {
        assert_ne!(FacetId::new(1, 0), FacetId::new(1, 1));
    }

    #[test]
    #[should_panic(expected = "facet slot must be less than u32::MAX")]
    fn reserved_slot_panics() {
        let _ = FacetId::new(u32::MAX as usize, 0);
    }
}
