//! Storage infrastructure: configuration file persistence.
//!
//! The `config` sub-module is the only place that touches the file system.
//! It handles:
//!
//! - Reading the TOML configuration from the platform-appropriate directory.
//! - Writing changes back with an atomic replace, so a crash mid-write never
//!   leaves a half-written file behind.
//! - Falling back to defaults when the file is missing or unreadable, since
//!   a broken config must never take the host down with it.

pub mod config;
