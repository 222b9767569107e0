//! # tagveil-core
//!
//! Domain types for hiding tag paths from a host application's sidebar
//! without touching the underlying tagged data.
//!
//! The host owns tags, notes, and rendering; this crate only answers one
//! question per sidebar row: is it visible? It defines:
//!
//! - **`tag_path`** - the `::`-separated tag path key and its segment-aware
//!   ancestor test, which is what makes hiding `A::B` also hide `A::B::C`
//!   while leaving `A::BC` alone.
//!
//! - **`hidden_set`** - the normalized set of hidden paths, serializable as
//!   the plain string list stored in the config file.
//!
//! - **`sidebar`** - the host's sidebar tree and the filter over it, both as
//!   in-place pruning and as a lazy restartable iterator.
//!
//! - **`config`** - the persisted configuration record (hidden set plus the
//!   one-time hint flag).
//!
//! This crate has no dependency on OS APIs, UI frameworks, or storage; the
//! companion application crate supplies those through port traits.

pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `tagveil_core::HiddenSet` instead of `tagveil_core::domain::hidden_set::HiddenSet`.
pub use domain::config::AddonConfig;
pub use domain::hidden_set::HiddenSet;
pub use domain::sidebar::{SidebarItemKind, SidebarNode, VisibleNodes};
pub use domain::tag_path::{TagPath, TAG_SEPARATOR};
