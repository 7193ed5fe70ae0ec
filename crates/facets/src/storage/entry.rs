//! Entry enum for slab slots.

/// Internal entry representation for slab slots.
#[derive(Debug, Clone)]
pub enum Entry<T> {
    /// Slot is free; stores the index of the next free slot in the freelist.
    Vacant(usize),
    /// Slot is occupied by a value.
    Occupied(T),
}

/// A slot plus the generation of the value currently (or last) stored in it.
#[derive(Debug, Clone)]
pub struct Slot<T> {
    pub generation: u32,
    pub entry: Entry<T>,
}
