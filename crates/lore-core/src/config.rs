//! Configuration types for lore.
//!
//! [`Config::load`] reads `~/.config/lore/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).
//!
//! The `[labels]` table is display configuration for the CLI listing; the
//! search pipeline never reads it.

use crate::highlight::Markers;
use crate::store::ReloadPolicy;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[store]
path   = "lore.json"
reload = "startup"

[server]
bind = "127.0.0.1:3000"

[highlight]
open  = "<mark>"
close = "</mark>"

[labels]
name        = "名字"
description = "基础描述"
introduce   = "详细介绍"
sentence    = "语录"
content     = "内容"
tone        = "语气"
source      = "来源"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/lore/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub highlight: Markers,
    /// Attribute key → display label.
    #[serde(default)]
    pub labels: HashMap<String, String>,
}

/// `[store]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
    #[serde(default)]
    pub reload: ReloadPolicy,
}

fn default_store_path() -> PathBuf { PathBuf::from("lore.json") }

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            reload: ReloadPolicy::default(),
        }
    }
}

/// `[server]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String { "127.0.0.1:3000".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/lore/config.toml`, layered on top of the built-in
    /// defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Layer the file at `path` (if present) over the built-in defaults.
    pub fn load_from(path: &std::path::Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Display label for an attribute key, or the key itself when unmapped.
    pub fn label<'a>(&'a self, key: &'a str) -> &'a str {
        self.labels.get(key).map(String::as_str).unwrap_or(key)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("lore")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load() {
        let cfg = Config::defaults();
        assert_eq!(cfg.store.path, PathBuf::from("lore.json"));
        assert_eq!(cfg.store.reload, ReloadPolicy::Startup);
        assert_eq!(cfg.server.bind, "127.0.0.1:3000");
        assert_eq!(cfg.highlight, Markers::default());
        assert_eq!(cfg.label("tone"), "语气");
    }

    #[test]
    fn unmapped_label_falls_back_to_key() {
        assert_eq!(Config::defaults().label("favourite_food"), "favourite_food");
    }

    #[test]
    fn user_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[store]
reload = "per_request"

[highlight]
open  = '<span class="highlight">'
close = "</span>"

[labels]
tone = "Tone"
"#,
        )
        .unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.store.reload, ReloadPolicy::PerRequest);
        assert_eq!(cfg.store.path, PathBuf::from("lore.json"));
        assert_eq!(cfg.highlight.open, r#"<span class="highlight">"#);
        assert_eq!(cfg.label("tone"), "Tone");
        assert_eq!(cfg.label("content"), "内容");
    }

    #[test]
    fn missing_user_file_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.server.bind, "127.0.0.1:3000");
    }
}
