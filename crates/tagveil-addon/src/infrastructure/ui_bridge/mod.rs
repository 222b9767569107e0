//! Host command bridge: exposes application-layer operations to the host's
//! menus and dialogs.
//!
//! The host's UI framework (context menu on a sidebar row, the Hidden Tags
//! management dialog, the render pass) calls the command functions in this
//! module and nothing else. The Presentation side is the only consumer; it
//! must NOT be imported by the application or domain layers.
//!
//! # Data Transfer Objects (DTOs)
//!
//! The backend works with internal types (`SidebarNode`, `TagPath`) that the
//! host's dialog layer should not depend on. DTOs are simple structs that
//! contain only serializable fields and derive `Serialize`/`Deserialize`, so
//! the host can move them across its own scripting or IPC boundary as JSON.
//!
//! # `CommandResult<T>` wrapper
//!
//! All commands return `CommandResult<T>` rather than `Result<T, E>`. Every
//! response has the same shape, `{ success, data, error }`, so the host can
//! always check `success` without wrapping each invocation in its own error
//! handling.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::application::hidden_store::{ConfigStore, HiddenTagStore};
use crate::application::sidebar_filter::{HintPresenter, SidebarFilter, SidebarRefresher};
use tagveil_core::{SidebarItemKind, SidebarNode, TagPath};

// ── Shared add-on state ───────────────────────────────────────────────────────

/// Add-on state shared between command invocations.
///
/// The store sits behind a `Mutex` only because the host may re-enter
/// commands from nested event-loop turns (a dialog opened from a dialog);
/// there is no multi-threading here, just re-entrancy discipline.
pub struct AddonState {
    pub store: Mutex<HiddenTagStore>,
    filter: SidebarFilter,
}

impl AddonState {
    /// Initialises add-on state from the persisted configuration.
    ///
    /// Falls back to defaults if no config exists yet; construction never
    /// fails.
    pub fn new(
        backend: Arc<dyn ConfigStore>,
        refresher: Arc<dyn SidebarRefresher>,
        hint: Arc<dyn HintPresenter>,
    ) -> Arc<Self> {
        Arc::new(Self {
            store: Mutex::new(HiddenTagStore::load(backend)),
            filter: SidebarFilter::new(refresher, hint),
        })
    }
}

// ── Data Transfer Objects (Presentation layer) ────────────────────────────────

/// DTO for one sidebar row, mirroring the tree the host renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SidebarNodeDto {
    pub kind: String,
    pub label: String,
    pub path: String,
    #[serde(default)]
    pub children: Vec<SidebarNodeDto>,
}

impl From<&SidebarNode> for SidebarNodeDto {
    fn from(node: &SidebarNode) -> Self {
        Self {
            kind: kind_name(node.kind).to_string(),
            label: node.label.clone(),
            path: node.path.to_string(),
            children: node.children.iter().map(SidebarNodeDto::from).collect(),
        }
    }
}

impl SidebarNodeDto {
    fn into_node(self) -> SidebarNode {
        SidebarNode {
            kind: kind_from_name(&self.kind),
            label: self.label,
            path: TagPath::new(self.path),
            children: self
                .children
                .into_iter()
                .map(SidebarNodeDto::into_node)
                .collect(),
        }
    }
}

fn kind_name(kind: SidebarItemKind) -> &'static str {
    match kind {
        SidebarItemKind::Root => "root",
        SidebarItemKind::TagRoot => "tag_root",
        SidebarItemKind::Tag => "tag",
        SidebarItemKind::Other => "other",
    }
}

fn kind_from_name(name: &str) -> SidebarItemKind {
    match name {
        "root" => SidebarItemKind::Root,
        "tag_root" => SidebarItemKind::TagRoot,
        "tag" => SidebarItemKind::Tag,
        // Unknown kinds render but never filter.
        _ => SidebarItemKind::Other,
    }
}

/// Unified response wrapper used by all bridge commands.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResult<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

const LOCK_POISONED: &str = "add-on state lock poisoned";

// ── Commands ──────────────────────────────────────────────────────────────────

/// Returns the hidden paths in dialog order, the contents of the Hidden Tags
/// management dialog.
pub fn get_hidden_tags(state: &AddonState) -> CommandResult<Vec<String>> {
    let Ok(store) = state.store.lock() else {
        return CommandResult::err(LOCK_POISONED);
    };
    let listed = store
        .hidden_paths()
        .iter()
        .map(|p| p.to_string())
        .collect();
    CommandResult::ok(listed)
}

/// Hides a tag, the sidebar context menu's "Hide Tag" action.
pub fn hide_tag(state: &AddonState, path: String) -> CommandResult<()> {
    let Ok(mut store) = state.store.lock() else {
        return CommandResult::err(LOCK_POISONED);
    };
    state.filter.hide(&mut store, TagPath::new(path));
    CommandResult::ok(())
}

/// Flips a tag between hidden and visible.
pub fn toggle_tag(state: &AddonState, path: String) -> CommandResult<()> {
    let Ok(mut store) = state.store.lock() else {
        return CommandResult::err(LOCK_POISONED);
    };
    state.filter.toggle_hide(&mut store, TagPath::new(path));
    CommandResult::ok(())
}

/// Unhides the dialog's current selection.
pub fn unhide_tags(state: &AddonState, paths: Vec<String>) -> CommandResult<()> {
    let Ok(mut store) = state.store.lock() else {
        return CommandResult::err(LOCK_POISONED);
    };
    state
        .filter
        .unhide_many(&mut store, paths.into_iter().map(TagPath::new));
    CommandResult::ok(())
}

/// Clears the hidden set, the dialog's "Unhide All".
pub fn unhide_all(state: &AddonState) -> CommandResult<()> {
    let Ok(mut store) = state.store.lock() else {
        return CommandResult::err(LOCK_POISONED);
    };
    state.filter.unhide_all(&mut store);
    CommandResult::ok(())
}

/// Filters the host's sidebar tree for rendering.
///
/// The host sends the tree it is about to draw and renders whatever comes
/// back; hidden tag subtrees are gone from the response.
pub fn filter_sidebar(state: &AddonState, tree: SidebarNodeDto) -> CommandResult<SidebarNodeDto> {
    let Ok(store) = state.store.lock() else {
        return CommandResult::err(LOCK_POISONED);
    };
    let mut node = tree.into_node();
    state.filter.filter_tree(&mut node, &store);
    CommandResult::ok(SidebarNodeDto::from(&node))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
