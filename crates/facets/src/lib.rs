//! Hierarchical faceted index over tagged records.
//!
//! This crate groups a flat collection of records into three facet trees:
//! - Tags, split on `/` into nested nodes
//! - Collections, split the same way
//! - Authors, a single flat level
//!
//! Every node carries the number of records aggregated at its path, and a
//! single node can be highlighted to act as a filter over the records.

pub mod bus;
pub mod config;
pub mod error;
pub mod event;
pub mod index;
pub mod storage;
pub mod tree;
pub mod types;

// Re-export main types
pub use bus::LayoutBus;
pub use config::{FacetConfig, PrefixMatch};
pub use error::{FacetError, Result};
pub use event::{LayoutEvent, LayoutReason, SourceEvent};
pub use index::{FacetEntry, FacetIndex, FacetRoots, HighlightMatcher, NodeDisplay};
pub use storage::{FacetId, FacetNode, OptionFacetId};
pub use tree::FacetTree;
pub use types::{CollectionObject, FacetKind, FileRecord, Record, RecordSource};
