//! SidebarFilter: the render-pass filter and hide/unhide orchestration.
//!
//! This use case sits between the host's UI events and the
//! [`HiddenTagStore`]. It depends only on traits (`SidebarRefresher`,
//! `HintPresenter`) injected at construction time; the store and the tree
//! are passed explicitly into each operation, so nothing here holds hidden
//! ambient state of its own.

use std::sync::Arc;

use tracing::debug;

use tagveil_core::{SidebarItemKind, SidebarNode, TagPath};

use super::hidden_store::HiddenTagStore;

/// Message shown the first time the user hides a tag.
pub const HIDE_HINT_TEXT: &str =
    "Tag hidden. You can unhide tags from the Hidden Tags dialog.";

/// Port for asking the host to redraw its sidebar.
///
/// Fire-and-forget: the host redraws whenever it gets around to it within
/// the current event-loop turn, and the caller never learns the outcome.
pub trait SidebarRefresher: Send + Sync {
    fn request_refresh(&self);
}

/// Port for surfacing the one-time informational hide hint.
pub trait HintPresenter: Send + Sync {
    fn show_hide_hint(&self, message: &str);
}

/// Filters the sidebar against the store and applies hide/unhide actions
/// coming from the host's menus and dialog.
pub struct SidebarFilter {
    refresher: Arc<dyn SidebarRefresher>,
    hint: Arc<dyn HintPresenter>,
}

impl SidebarFilter {
    pub fn new(refresher: Arc<dyn SidebarRefresher>, hint: Arc<dyn HintPresenter>) -> Self {
        Self { refresher, hint }
    }

    /// Prunes hidden tag subtrees out of the host's tree, in place.
    ///
    /// Only the tag sections are walked; deck and search sections pass
    /// through untouched. With an empty hidden set the tree is returned as
    /// delivered, without a walk.
    pub fn filter_tree(&self, tree: &mut SidebarNode, store: &HiddenTagStore) {
        if store.hidden_set().is_empty() {
            return;
        }
        let Some(section) = tree.find_section_mut(SidebarItemKind::TagRoot) else {
            return;
        };
        section.retain_visible(store.hidden_set());
        debug!(hidden = store.hidden_set().len(), "sidebar tag branch filtered");
    }

    /// Hides a tag path: mutates the store, asks for a redraw, and runs the
    /// one-time hint gate. Empty paths and already-hidden paths do nothing.
    pub fn hide(&self, store: &mut HiddenTagStore, path: TagPath) {
        if !store.hide(path) {
            return;
        }
        self.refresher.request_refresh();
        self.maybe_show_hide_hint(store);
    }

    /// Unhides a tag path and asks for a redraw when anything changed.
    pub fn unhide(&self, store: &mut HiddenTagStore, path: &TagPath) {
        if store.unhide(path) {
            self.refresher.request_refresh();
        }
    }

    /// Unhides a batch of paths (the dialog's multi-selection) and asks for
    /// a redraw when anything changed.
    pub fn unhide_many<I>(&self, store: &mut HiddenTagStore, paths: I)
    where
        I: IntoIterator<Item = TagPath>,
    {
        if store.unhide_many(paths) {
            self.refresher.request_refresh();
        }
    }

    /// Clears the hidden set and asks for a redraw when anything changed.
    pub fn unhide_all(&self, store: &mut HiddenTagStore) {
        if store.unhide_all() {
            self.refresher.request_refresh();
        }
    }

    /// Flips a path between visible and hidden.
    ///
    /// A path that is covered only through a hidden ancestor is reported as
    /// hidden, so the toggle attempts an unhide; that unhide is a no-op
    /// until the ancestor itself is toggled.
    pub fn toggle_hide(&self, store: &mut HiddenTagStore, path: TagPath) {
        if store.is_hidden(&path) {
            self.unhide(store, &path);
        } else {
            self.hide(store, path);
        }
    }

    /// Shows the informational hint at most once per installation.
    ///
    /// The flag is cleared right after the first presentation, and the
    /// choice persists with the rest of the config.
    fn maybe_show_hide_hint(&self, store: &mut HiddenTagStore) {
        if !store.show_hide_hint() {
            return;
        }
        self.hint.show_hide_hint(HIDE_HINT_TEXT);
        store.suppress_hide_hint();
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
