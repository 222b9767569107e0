//! Application layer use cases for the add-on.
//!
//! # What is the "application" layer? (for beginners)
//!
//! The *application* layer sits between the domain (pure visibility rules in
//! `tagveil-core`) and the infrastructure (file storage, the host's UI).
//!
//! Use cases in this layer:
//!
//! - **Orchestrate** domain objects to fulfil a user goal (e.g., "hide this
//!   tag, save the choice, ask the sidebar to redraw").
//! - **Depend on abstractions** (traits) rather than concrete
//!   implementations, so the host integration and tests can swap in their
//!   own persistence, refresh, and dialog behavior.
//! - **Contain no file-system access and no UI calls** of their own.
//!
//! # Sub-modules
//!
//! - **`hidden_store`** - owns the persisted configuration and the set of
//!   hidden tag paths; every mutation is written back through the
//!   `ConfigStore` port immediately.
//!
//! - **`sidebar_filter`** - the render-pass filter plus the hide/unhide/
//!   toggle orchestration, including the re-render request and the one-time
//!   hide hint.

pub mod hidden_store;
pub mod sidebar_filter;
