//! HiddenTagStore: the single owner of the persisted hidden-tag state.
//!
//! The store loads the configuration once through the [`ConfigStore`] port,
//! keeps it in memory for the whole session, and writes it back after every
//! effective mutation. Persistence is best-effort: a failing backend keeps
//! the in-memory state correct for the running session and merely loses the
//! change across a restart, which the port implementation logs.
//!
//! # Subtree hiding (for beginners)
//!
//! Tag trees are hierarchical: the tag `Work::Urgent::Calls` is displayed as
//! a child of `Work::Urgent`. The store therefore answers [`is_hidden`] with
//! a segment-aware ancestor check rather than plain membership, so hiding a
//! branch hides everything displayed beneath it without recording every
//! descendant in the config file.
//!
//! [`is_hidden`]: HiddenTagStore::is_hidden

use std::sync::Arc;

use tracing::debug;

use tagveil_core::{AddonConfig, HiddenSet, TagPath};

#[cfg(test)]
use mockall::automock;

/// Port to the persisted configuration blob.
///
/// The file-backed implementation lives in the infrastructure layer; tests
/// use an in-memory implementation or the generated mock.
///
/// `load` never fails the caller: implementations fall back to
/// `AddonConfig::default()` for a missing or malformed blob. `save` is
/// fire-and-forget; implementations absorb and log write failures.
#[cfg_attr(test, automock)]
pub trait ConfigStore: Send + Sync {
    /// Reads the persisted configuration, or defaults when unavailable.
    fn load(&self) -> AddonConfig;

    /// Persists the configuration, best-effort.
    fn save(&self, config: &AddonConfig);
}

/// Owns the [`AddonConfig`] for the session and mediates every change to it.
pub struct HiddenTagStore {
    config: AddonConfig,
    backend: Arc<dyn ConfigStore>,
}

impl HiddenTagStore {
    /// Loads the store from the backend. Missing or malformed persisted
    /// state comes back as defaults, so this constructor cannot fail.
    pub fn load(backend: Arc<dyn ConfigStore>) -> Self {
        let config = backend.load();
        debug!(
            hidden = config.hidden_tags.len(),
            "hidden-tag store loaded"
        );
        Self { config, backend }
    }

    /// Returns `true` if `path` is hidden, directly or via a hidden ancestor.
    pub fn is_hidden(&self, path: &TagPath) -> bool {
        self.config.hidden_tags.covers(path)
    }

    /// The current hidden set, for render-pass filtering.
    pub fn hidden_set(&self) -> &HiddenSet {
        &self.config.hidden_tags
    }

    /// Hidden paths in dialog order (case-insensitive lexicographic).
    pub fn hidden_paths(&self) -> Vec<TagPath> {
        self.config.hidden_tags.sorted()
    }

    /// Hides a path. Returns `true` if the set changed; empty paths and
    /// already-hidden paths are no-ops that skip persistence.
    pub fn hide(&mut self, path: TagPath) -> bool {
        if !self.config.hidden_tags.insert(path.clone()) {
            return false;
        }
        debug!(%path, "tag hidden");
        self.persist();
        true
    }

    /// Unhides an exactly-listed path. Returns `true` if the set changed.
    ///
    /// A path hidden only through an ancestor is not a member; unhiding it
    /// changes nothing until the ancestor itself is unhidden.
    pub fn unhide(&mut self, path: &TagPath) -> bool {
        if !self.config.hidden_tags.remove(path) {
            return false;
        }
        debug!(%path, "tag unhidden");
        self.persist();
        true
    }

    /// Unhides a batch of paths in one mutation and one save, the dialog's
    /// "Unhide Selected". Returns `true` if anything changed.
    pub fn unhide_many<I>(&mut self, paths: I) -> bool
    where
        I: IntoIterator<Item = TagPath>,
    {
        if !self.config.hidden_tags.remove_all(paths) {
            return false;
        }
        self.persist();
        true
    }

    /// Empties the hidden set. Returns `true` if anything was hidden.
    pub fn unhide_all(&mut self) -> bool {
        if !self.config.hidden_tags.clear() {
            return false;
        }
        debug!("all tags unhidden");
        self.persist();
        true
    }

    /// Whether the one-time hide hint may still be shown.
    pub fn show_hide_hint(&self) -> bool {
        self.config.show_hide_hint
    }

    /// Clears the hide-hint flag and persists the choice, so the hint never
    /// appears again.
    pub fn suppress_hide_hint(&mut self) {
        if !self.config.show_hide_hint {
            return;
        }
        self.config.show_hide_hint = false;
        self.persist();
    }

    fn persist(&self) {
        self.backend.save(&self.config);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
