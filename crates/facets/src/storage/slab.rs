//! Freelist slab allocator with generation-checked handles.

use std::mem;
use std::ops::{Index, IndexMut};

use super::entry::{Entry, Slot};
use super::index_types::FacetId;

/// Heap-backed slab that hands out [`FacetId`] handles.
///
/// Vacant slots form an intrusive freelist; `next` equal to the slot count
/// means the freelist is empty and the next insert appends.
#[derive(Debug, Clone)]
pub struct Slab<T> {
    slots: Vec<Slot<T>>,

    /// Logical element count (occupied slots only).
    len: usize,

    /// Head of the freelist (index of the next available slot).
    next: usize,
}

impl<T> Default for Slab<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Slab<T> {
    /// Creates a new empty slab.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
            next: 0,
        }
    }

    /// Inserts a value, returning its handle.
    pub fn insert(&mut self, value: T) -> FacetId {
        let key = self.next;
        if key == self.slots.len() {
            self.slots.push(Slot {
                generation: 0,
                entry: Entry::Occupied(value),
            });
            self.next = key + 1;
        } else {
            let slot = &mut self.slots[key];
            self.next = match slot.entry {
                Entry::Vacant(next) => next,
                Entry::Occupied(_) => unreachable!("freelist head points at an occupied slot"),
            };
            slot.entry = Entry::Occupied(value);
        }
        self.len += 1;
        FacetId::new(key, self.slots[key].generation)
    }

    /// Gets a reference to the value behind `id`, if it is still live.
    pub fn get(&self, id: FacetId) -> Option<&T> {
        match self.slots.get(id.slot()) {
            Some(Slot {
                generation,
                entry: Entry::Occupied(value),
            }) if *generation == id.generation() => Some(value),
            _ => None,
        }
    }

    /// Gets a mutable reference to the value behind `id`, if it is still live.
    pub fn get_mut(&mut self, id: FacetId) -> Option<&mut T> {
        match self.slots.get_mut(id.slot()) {
            Some(Slot {
                generation,
                entry: Entry::Occupied(value),
            }) if *generation == id.generation() => Some(value),
            _ => None,
        }
    }

    /// Returns true if `id` resolves to a live value.
    #[inline]
    pub fn contains(&self, id: FacetId) -> bool {
        self.get(id).is_some()
    }

    /// Removes the value behind `id`, returning it if it was live.
    ///
    /// The slot's generation is bumped so `id` (and any copy of it) stops
    /// resolving, even after the slot is reused.
    pub fn try_remove(&mut self, id: FacetId) -> Option<T> {
        let next_free = self.next;
        let slot = self.slots.get_mut(id.slot())?;
        if slot.generation != id.generation() || matches!(slot.entry, Entry::Vacant(_)) {
            return None;
        }
        let prev = mem::replace(&mut slot.entry, Entry::Vacant(next_free));
        slot.generation = slot.generation.wrapping_add(1);
        self.len -= 1;
        self.next = id.slot();
        match prev {
            Entry::Occupied(value) => Some(value),
            Entry::Vacant(_) => None,
        }
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the slab is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns an iterator over occupied entries in slot order.
    pub fn iter(&self) -> SlabIter<'_, T> {
        SlabIter {
            inner: self.slots.iter().enumerate(),
        }
    }
}

impl<T> Index<FacetId> for Slab<T> {
    type Output = T;

    fn index(&self, id: FacetId) -> &Self::Output {
        self.get(id).expect("stale or invalid facet id")
    }
}

impl<T> IndexMut<FacetId> for Slab<T> {
    fn index_mut(&mut self, id: FacetId) -> &mut Self::Output {
        self.get_mut(id).expect("stale or invalid facet id")
    }
}

/// Iterator over entries in a Slab.
pub struct SlabIter<'a, T> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, Slot<T>>>,
}

impl<'a, T> Iterator for SlabIter<'a, T> {
    type Item = (FacetId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        for (index, slot) in self.inner.by_ref() {
            if let Entry::Occupied(value) = &slot.entry {
                return Some((FacetId::new(index, slot.generation), value));
            }
        }
        None
    }
}

impl<'a, T> IntoIterator for &'a Slab<T> {
    type Item = (FacetId, &'a T);
    type IntoIter = SlabIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
