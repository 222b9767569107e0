//! Sidebar tree entity and the visibility filter.
//!
//! The host hands over its sidebar as a tree of [`SidebarNode`]s. This module
//! decides which of those nodes survive a render pass: a `Tag` node whose
//! path is covered by the [`HiddenSet`] is dropped together with its whole
//! subtree, everything else passes through untouched. The tree itself is
//! never re-ordered or re-labelled, and nothing here touches the host's
//! actual tag data.
//!
//! Two shapes of the same filter are offered:
//!
//! - [`SidebarNode::retain_visible`] prunes a tree in place, for renderers
//!   that want a materialized tree back.
//! - [`SidebarNode::visible`] is a lazy preorder iterator over the visible
//!   nodes, restartable by calling it again, for renderers that stream rows.

use super::hidden_set::HiddenSet;
use super::tag_path::TagPath;

/// What a sidebar row represents. Only `Tag` rows are candidates for hiding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarItemKind {
    /// The invisible root the host builds sections under.
    Root,
    /// The section header that anchors the tag branch.
    TagRoot,
    /// A tag row; `path` holds its full tag path.
    Tag,
    /// Any other row (decks, saved searches, flags). Never filtered.
    Other,
}

/// One row of the host's sidebar tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarNode {
    pub kind: SidebarItemKind,
    /// Display label, typically the last path segment for tag rows.
    pub label: String,
    /// Full tag path; empty for non-tag rows.
    pub path: TagPath,
    pub children: Vec<SidebarNode>,
}

impl SidebarNode {
    /// Creates the invisible root node.
    pub fn root() -> Self {
        Self {
            kind: SidebarItemKind::Root,
            label: String::new(),
            path: TagPath::new(""),
            children: Vec::new(),
        }
    }

    /// Creates the section header that anchors the tag branch.
    pub fn tag_root(label: impl Into<String>) -> Self {
        Self {
            kind: SidebarItemKind::TagRoot,
            label: label.into(),
            path: TagPath::new(""),
            children: Vec::new(),
        }
    }

    /// Creates a non-tag section row.
    pub fn section(label: impl Into<String>) -> Self {
        Self {
            kind: SidebarItemKind::Other,
            label: label.into(),
            path: TagPath::new(""),
            children: Vec::new(),
        }
    }

    /// Creates a tag row; the label is the path's last segment.
    pub fn tag(path: impl Into<TagPath>) -> Self {
        let path = path.into();
        Self {
            kind: SidebarItemKind::Tag,
            label: path.leaf().to_string(),
            path,
            children: Vec::new(),
        }
    }

    /// Appends a child and returns `self`, for building trees in tests and
    /// host adapters.
    pub fn with_child(mut self, child: SidebarNode) -> Self {
        self.children.push(child);
        self
    }

    /// Returns `true` when this row must be dropped from rendering.
    pub fn is_hidden_by(&self, hidden: &HiddenSet) -> bool {
        self.kind == SidebarItemKind::Tag && hidden.covers(&self.path)
    }

    /// Prunes every hidden tag row, transitively dropping its subtree.
    ///
    /// Descendants of a dropped node are gone even when not individually
    /// listed in the set. The node this is called on is itself never removed.
    pub fn retain_visible(&mut self, hidden: &HiddenSet) {
        self.children.retain(|child| !child.is_hidden_by(hidden));
        for child in &mut self.children {
            child.retain_visible(hidden);
        }
    }

    /// Lazy preorder traversal of the visible nodes, starting with `self`.
    ///
    /// Hidden subtrees are skipped without being descended into. The
    /// iterator borrows the tree; calling `visible` again restarts the walk.
    pub fn visible<'a>(&'a self, hidden: &'a HiddenSet) -> VisibleNodes<'a> {
        VisibleNodes {
            hidden,
            stack: vec![self],
        }
    }

    /// Finds the first child section of the given kind, the hook the render
    /// filter uses to locate the tag branch.
    pub fn find_section_mut(&mut self, kind: SidebarItemKind) -> Option<&mut SidebarNode> {
        self.children.iter_mut().find(|child| child.kind == kind)
    }
}

/// Iterator returned by [`SidebarNode::visible`].
pub struct VisibleNodes<'a> {
    hidden: &'a HiddenSet,
    stack: Vec<&'a SidebarNode>,
}

impl<'a> Iterator for VisibleNodes<'a> {
    type Item = &'a SidebarNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            if node.is_hidden_by(self.hidden) {
                continue;
            }
            // Reverse push keeps children in display order.
            for child in node.children.iter().rev() {
                self.stack.push(child);
            }
            return Some(node);
        }
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
