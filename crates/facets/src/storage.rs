//! Arena storage for facet tree nodes.
//!
//! Nodes are kept in a slab addressed by generation-checked handles rather
//! than by references, so parents and children can point at each other and a
//! handle held across a rebuild can be checked for liveness.
//!
//! ## Module Structure
//!
//! - `entry` - Internal entry enum for slab slots
//! - `index_types` - Handle types (`FacetId`, `OptionFacetId`)
//! - `slab` - Freelist slab allocator (`Slab<T>`)
//! - `node` - Facet node type (`FacetNode`)

mod entry;
mod index_types;
mod node;
mod slab;

pub use index_types::{FacetId, OptionFacetId};
pub use node::FacetNode;
pub use slab::{Slab, SlabIter};
