//! Tag path value type.
//!
//! A tag path is the full hierarchical name of a tag as the host displays it
//! in the sidebar, with segments joined by `::` (e.g. `Work::Urgent::Today`).
//! The path is treated as an opaque key: the only structure this crate reads
//! out of it is the segment boundary, which is what makes subtree matching
//! safe (`Work::Ur` is not an ancestor of `Work::Urgent`).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between tag path segments.
pub const TAG_SEPARATOR: &str = "::";

/// Full hierarchical name of a tag, segments joined by [`TAG_SEPARATOR`].
///
/// Construction trims surrounding whitespace; an all-whitespace input yields
/// an empty path, which every consumer in this workspace treats as a no-op
/// rather than an error (the host occasionally hands over empty names for
/// placeholder rows).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagPath(String);

impl TagPath {
    /// Creates a tag path from a raw string, trimming surrounding whitespace.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.len() == raw.len() {
            Self(raw)
        } else {
            Self(trimmed.to_string())
        }
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the empty path.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the `::`-separated segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(TAG_SEPARATOR)
    }

    /// Returns the last segment, the name shown on the sidebar row itself.
    pub fn leaf(&self) -> &str {
        self.0.rsplit(TAG_SEPARATOR).next().unwrap_or("")
    }

    /// Returns `true` if `other` lies strictly below `self` in the tag tree.
    ///
    /// The check is segment-aware: `A::B` is an ancestor of `A::B::C` but not
    /// of `A::BC`, and a path is never its own ancestor. Empty paths have no
    /// descendants.
    pub fn is_ancestor_of(&self, other: &TagPath) -> bool {
        !self.0.is_empty()
            && other.0.len() > self.0.len()
            && other.0.starts_with(&self.0)
            && other.0[self.0.len()..].starts_with(TAG_SEPARATOR)
    }

    /// Case-insensitive sort key used wherever paths are listed for a human
    /// (the management dialog, the persisted file).
    pub(crate) fn fold_key(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for TagPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TagPath {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for TagPath {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
