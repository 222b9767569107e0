//! Persisted add-on configuration record.
//!
//! Fields use `#[serde(default = "...")]` helpers so a partial or first-run
//! file deserializes to working values, and `Default` mirrors the same
//! defaults for the no-file-at-all case.

use serde::{Deserialize, Serialize};

use super::hidden_set::HiddenSet;

/// Add-on configuration as stored on disk.
///
/// Exclusively owned by the hidden-tag store at runtime; everything else
/// reads it through that store's API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddonConfig {
    /// Full tag paths hidden from the sidebar.
    #[serde(default)]
    pub hidden_tags: HiddenSet,
    /// Whether the one-time hide hint may still appear.
    #[serde(default = "default_show_hide_hint")]
    pub show_hide_hint: bool,
}

fn default_show_hide_hint() -> bool {
    true
}

impl Default for AddonConfig {
    fn default() -> Self {
        Self {
            hidden_tags: HiddenSet::new(),
            show_hide_hint: default_show_hide_hint(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
