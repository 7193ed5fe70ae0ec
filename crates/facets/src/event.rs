use serde::Serialize;

/// Why the tree layout is changing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutReason {
    Rebuild,
    Highlight,
}

/// Emitted around every mutation a renderer must see atomically. Any cached
/// row/parent mapping is invalid between `AboutToChange` and `Changed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "reason")]
pub enum LayoutEvent {
    AboutToChange(LayoutReason),
    Changed(LayoutReason),
}

/// Published by the host when its record collection changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum SourceEvent {
    Changed,
}
