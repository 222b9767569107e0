//! TOML-based configuration persistence for the add-on.
//!
//! Reads and writes [`AddonConfig`] to the platform-appropriate config file:
//! - Windows:  `%APPDATA%\Tagveil\config.toml`
//! - Linux:    `~/.config/tagveil/config.toml`
//! - macOS:    `~/Library/Application Support/Tagveil/config.toml`
//!
//! Two layers live here. The free functions (`load_config`, `save_config`)
//! return typed errors so tests and tooling can distinguish causes. The
//! [`FileConfigStore`] adapter implements the application's `ConfigStore`
//! port on top of them with the degradation the rest of the add-on relies
//! on: a missing or malformed file loads as defaults, and a failed write is
//! logged and otherwise ignored.
//!
//! Writes replace the file atomically: content goes to a sibling temp file
//! first and is then renamed over the target, so the blob on disk is always
//! either the old config or the new one.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use tagveil_core::{AddonConfig, HiddenSet};

use crate::application::hidden_store::ConfigStore;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// On-disk form before normalization, used to detect entries the
/// [`HiddenSet`] would rewrite (whitespace, duplicates, unsorted order).
#[derive(Deserialize)]
struct RawConfig {
    #[serde(default)]
    hidden_tags: Vec<String>,
    #[serde(default = "raw_show_hide_hint_default")]
    show_hide_hint: bool,
}

fn raw_show_hide_hint_default() -> bool {
    true
}

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot
/// be determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads [`AddonConfig`] from `path`, returning `AddonConfig::default()` if
/// the file does not yet exist.
///
/// Entries are normalized on the way in (trimmed, deduplicated,
/// case-insensitively sorted). When the stored form differs from the
/// normalized form, the file is rewritten best-effort so the on-disk state
/// stays predictable across sessions.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not
/// found", and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: &Path) -> Result<AddonConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AddonConfig::default())
        }
        Err(e) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    let raw: RawConfig = toml::from_str(&content)?;
    let config = AddonConfig {
        hidden_tags: HiddenSet::from(raw.hidden_tags.clone()),
        show_hide_hint: raw.show_hide_hint,
    };

    let normalized: Vec<String> = config.hidden_tags.clone().into();
    if normalized != raw.hidden_tags {
        debug!(path = %path.display(), "rewriting config with normalized hidden tags");
        if let Err(e) = save_config(path, &config) {
            warn!("could not rewrite normalized config: {e}");
        }
    }

    Ok(config)
}

/// Persists `config` to `path` with an atomic replace.
///
/// Creates the parent directory if it does not exist, writes the serialized
/// content to a sibling temp file, then renames it over the target.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(path: &Path, config: &AddonConfig) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;

    let tmp = path.with_extension("toml.tmp");
    fs::write(&tmp, content).map_err(|source| ConfigError::Io {
        path: tmp.clone(),
        source,
    })?;
    fs::rename(&tmp, path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Resolves the platform config base directory including the `Tagveil`
/// subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("Tagveil"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("tagveil"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("Tagveil")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Port adapter ──────────────────────────────────────────────────────────────

/// File-backed implementation of the `ConfigStore` port.
///
/// Absorbs every failure: loads fall back to defaults, saves degrade to
/// "change not saved" with a warning. The host's session state stays correct
/// either way.
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    /// Creates a store over the platform config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoPlatformConfigDir`] when the platform
    /// directory cannot be resolved.
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            path: config_file_path()?,
        })
    }

    /// Creates a store over an explicit file path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> AddonConfig {
        match load_config(&self.path) {
            Ok(config) => config,
            Err(e) => {
                warn!("loading config failed, using defaults: {e}");
                AddonConfig::default()
            }
        }
    }

    fn save(&self, config: &AddonConfig) {
        if let Err(e) = save_config(&self.path, config) {
            warn!("saving config failed, change kept in memory only: {e}");
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tagveil_core::TagPath;
    use tempfile::TempDir;

    fn temp_config_path(dir: &TempDir) -> PathBuf {
        dir.path().join("config.toml")
    }

    // ── load_config / save_config ─────────────────────────────────────────────

    #[test]
    fn test_load_returns_defaults_when_file_absent() {
        let dir = TempDir::new().unwrap();
        let cfg = load_config(&temp_config_path(&dir)).expect("load");
        assert_eq!(cfg, AddonConfig::default());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        // Arrange
        let dir = TempDir::new().unwrap();
        let path = temp_config_path(&dir);
        let mut cfg = AddonConfig::default();
        cfg.hidden_tags.insert(TagPath::new("Work::Urgent"));
        cfg.show_hide_hint = false;

        // Act
        save_config(&path, &cfg).expect("save");
        let loaded = load_config(&path).expect("load");

        // Assert
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn test_save_creates_missing_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("config.toml");

        save_config(&path, &AddonConfig::default()).expect("save");

        assert!(path.exists());
    }

    #[test]
    fn test_save_leaves_no_temp_file_behind() {
        let dir = TempDir::new().unwrap();
        let path = temp_config_path(&dir);

        save_config(&path, &AddonConfig::default()).expect("save");

        let entries: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, vec!["config.toml"]);
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = TempDir::new().unwrap();
        let path = temp_config_path(&dir);
        fs::write(&path, "[[[ not valid toml").unwrap();

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_accepts_partial_document() {
        let dir = TempDir::new().unwrap();
        let path = temp_config_path(&dir);
        fs::write(&path, "show_hide_hint = false\n").unwrap();

        let cfg = load_config(&path).expect("load");

        assert!(!cfg.show_hide_hint);
        assert!(cfg.hidden_tags.is_empty());
    }

    #[test]
    fn test_load_normalizes_and_rewrites_messy_entries() {
        // Arrange: duplicates, whitespace, and unsorted order on disk
        let dir = TempDir::new().unwrap();
        let path = temp_config_path(&dir);
        fs::write(
            &path,
            "hidden_tags = [\"beta\", \" Alpha \", \"beta\", \"  \"]\n",
        )
        .unwrap();

        // Act
        let cfg = load_config(&path).expect("load");

        // Assert: the loaded set is normalized
        assert_eq!(cfg.hidden_tags.len(), 2);
        assert!(cfg.hidden_tags.contains(&TagPath::new("Alpha")));
        assert!(cfg.hidden_tags.contains(&TagPath::new("beta")));

        // and the file was rewritten in normalized form
        let rewritten = fs::read_to_string(&path).unwrap();
        let reparsed: AddonConfig = toml::from_str(&rewritten).unwrap();
        assert_eq!(reparsed, cfg);
        assert!(rewritten.contains("\"Alpha\""));
        assert!(!rewritten.contains("\" Alpha \""));
    }

    #[test]
    fn test_load_does_not_rewrite_already_normalized_file() {
        let dir = TempDir::new().unwrap();
        let path = temp_config_path(&dir);
        let mut cfg = AddonConfig::default();
        cfg.hidden_tags.insert(TagPath::new("Alpha"));
        save_config(&path, &cfg).expect("save");
        let written = fs::read_to_string(&path).unwrap();
        let modified_before = fs::metadata(&path).unwrap().modified().unwrap();

        let _ = load_config(&path).expect("load");

        assert_eq!(fs::read_to_string(&path).unwrap(), written);
        assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), modified_before);
    }

    // ── FileConfigStore adapter ───────────────────────────────────────────────

    #[test]
    fn test_store_load_falls_back_to_defaults_on_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = temp_config_path(&dir);
        fs::write(&path, "hidden_tags = 5\n").unwrap();
        let store = FileConfigStore::with_path(path);

        let cfg = store.load();

        assert_eq!(cfg, AddonConfig::default());
    }

    #[test]
    fn test_store_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = FileConfigStore::with_path(temp_config_path(&dir));
        let mut cfg = AddonConfig::default();
        cfg.hidden_tags.insert(TagPath::new("Archive"));

        store.save(&cfg);
        let loaded = store.load();

        assert_eq!(loaded, cfg);
    }

    #[test]
    fn test_store_save_into_unwritable_location_does_not_panic() {
        // A directory path cannot be replaced by a file; the save must
        // degrade to a logged warning.
        let dir = TempDir::new().unwrap();
        let store = FileConfigStore::with_path(dir.path().to_path_buf());

        store.save(&AddonConfig::default());
    }

    // ── Platform path formation ───────────────────────────────────────────────

    #[test]
    fn test_config_file_path_ends_with_config_toml() {
        if let Ok(path) = config_file_path() {
            assert!(
                path.ends_with("config.toml"),
                "config file must be named config.toml, got {path:?}"
            );
        }
        // NoPlatformConfigDir in a stripped CI environment is also acceptable.
    }
}
