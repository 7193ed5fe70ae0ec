//! Record and facet kind types.
//!
//! Records are owned by the host; the index only reads them through the
//! [`Record`] trait. [`FileRecord`] is a ready-made implementation that
//! deserializes from the host's metadata JSON.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// The roles a node plays. A facet root is both `ROOT_FOLDER` and the
    /// facet it heads, e.g. the "Tags" root is `ROOT_FOLDER | TAG`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct FacetKind: u8 {
        const ROOT_FOLDER = 1 << 0;
        const TAG = 1 << 1;
        const COLLECTION = 1 << 2;
        const AUTHOR = 1 << 3;
    }
}

impl FacetKind {
    /// Returns true if nodes of this kind can be highlighted.
    #[inline]
    pub fn is_selectable(self) -> bool {
        !self.contains(Self::ROOT_FOLDER)
    }
}

/// Read access to the fields the index aggregates over.
pub trait Record {
    fn tags(&self) -> &[String];

    /// The collection path, e.g. `Fiction/Short`.
    fn collection(&self) -> Option<&str>;

    /// The author of the record's collection object.
    fn author(&self) -> Option<&str>;
}

impl<R: Record + ?Sized> Record for &R {
    fn tags(&self) -> &[String] {
        (**self).tags()
    }

    fn collection(&self) -> Option<&str> {
        (**self).collection()
    }

    fn author(&self) -> Option<&str> {
        (**self).author()
    }
}

/// Metadata attached to a record's collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionObject {
    #[serde(default)]
    pub author: Option<String>,
}

/// A media file as described by the host's metadata store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub collection: Option<String>,
    #[serde(default, alias = "collection_obj")]
    pub collection_object: Option<CollectionObject>,
}

impl FileRecord {
    /// Creates a record with no tags, collection or author.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    /// Sets the author, creating the collection object if needed.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.collection_object
            .get_or_insert_with(CollectionObject::default)
            .author = Some(author.into());
        self
    }
}

impl Record for FileRecord {
    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn collection(&self) -> Option<&str> {
        self.collection.as_deref()
    }

    fn author(&self) -> Option<&str> {
        self.collection_object
            .as_ref()
            .and_then(|object| object.author.as_deref())
    }
}

/// A read-only view of the host's record collection.
pub trait RecordSource {
    type Record: Record;

    fn records(&self) -> &[Self::Record];
}

impl<R: Record> RecordSource for [R] {
    type Record = R;

    fn records(&self) -> &[R] {
        self
    }
}

impl<R: Record> RecordSource for Vec<R> {
    type Record = R;

    fn records(&self) -> &[R] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn root_kinds_are_not_selectable() {
        assert!(!(FacetKind::ROOT_FOLDER | FacetKind::TAG).is_selectable());
        assert!(FacetKind::TAG.is_selectable());
        assert!(FacetKind::AUTHOR.is_selectable());
    }

    #[test]
    fn kind_is_a_flag_set() {
        let kind = FacetKind::ROOT_FOLDER | FacetKind::COLLECTION;
        assert!(kind.contains(FacetKind::COLLECTION));
        assert!(kind.contains(FacetKind::ROOT_FOLDER));
        assert!(!kind.contains(FacetKind::TAG));
    }

    #[test]
    fn builder_sets_author_through_collection_object() {
        let record = FileRecord::new()
            .with_tags(["a/b"])
            .with_collection("Fiction")
            .with_author("Jane Doe");

        assert_eq!(record.tags(), ["a/b".to_string()]);
        assert_eq!(record.collection(), Some("Fiction"));
        assert_eq!(record.author(), Some("Jane Doe"));
    }

    #[test]
    fn record_deserializes_with_missing_fields() {
        let record: FileRecord = serde_json::from_value(json!({})).unwrap();
        assert!(record.tags().is_empty());
        assert_eq!(record.collection(), None);
        assert_eq!(record.author(), None);

        let record: FileRecord = serde_json::from_value(json!({
            "tags": ["x"],
            "collection": "C1",
            "collection_obj": { "author": "A" }
        }))
        .unwrap();
        assert_eq!(record.author(), Some("A"));
    }

    #[test]
    fn vec_is_a_record_source() {
        let records = vec![FileRecord::new(), FileRecord::new()];
        assert_eq!(records.records().len(), 2);
    }
}
