//! Infrastructure layer for the add-on.
//!
//! Contains the host-facing adapters: file-system storage for the config
//! blob and the UI command bridge the host's menus and dialogs call into.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `tagveil_core`, but MUST NOT be imported by the application or domain
//! layers.

pub mod storage;
pub mod ui_bridge;
