//! Configuration file support for codeprompt
//!
//! Config files are loaded in order (later overrides earlier):
//! 1. an explicit file passed by the embedding service
//! 2. `.codeprompt.toml` in the project root
//!
//! Values set programmatically on `EngineOptions` override both.

use serde::Deserialize;
use std::path::Path;

use crate::prompt::{BodySplit, EngineOptions};

/// Configuration options loaded from config files
///
/// # Example
///
/// ```toml
/// # .codeprompt.toml
/// max_model_len = 4096       # Model context window in tokens
/// body_split = "even"        # or "suffix_percent"
/// truncate_suffix_near_cursor = true
/// tokenizer_path = "/models/tokenizer.json"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Model context window size in tokens
    pub max_model_len: Option<usize>,
    /// How the body budget is split between prefix and suffix
    pub body_split: Option<BodySplit>,
    /// Bound the suffix to the enclosing construct before truncation
    pub truncate_suffix_near_cursor: Option<bool>,
    /// Path to a HuggingFace `tokenizer.json`
    pub tokenizer_path: Option<String>,
}

impl Config {
    /// Default context window when no config specifies one
    pub const DEFAULT_MAX_MODEL_LEN: usize = 2048;

    /// Load configuration from an optional explicit file plus the project
    /// config file
    pub fn load(explicit: Option<&Path>, project_root: &Path) -> Self {
        let base = explicit
            .and_then(Self::load_file)
            .unwrap_or_default();

        let project =
            Self::load_file(&project_root.join(".codeprompt.toml")).unwrap_or_default();

        let merged = base.override_with(project);
        tracing::debug!(
            max_model_len = ?merged.max_model_len,
            body_split = ?merged.body_split,
            truncate_suffix_near_cursor = ?merged.truncate_suffix_near_cursor,
            tokenizer_path = ?merged.tokenizer_path,
            "Effective config after merge"
        );
        merged
    }

    /// Load configuration from a specific file
    fn load_file(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!("Failed to read config {}: {}", path.display(), e);
                return None;
            }
        };

        match toml::from_str::<Self>(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!("Failed to parse config {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Layer another config on top (other overrides self where present)
    fn override_with(self, other: Self) -> Self {
        Config {
            max_model_len: other.max_model_len.or(self.max_model_len),
            body_split: other.body_split.or(self.body_split),
            truncate_suffix_near_cursor: other
                .truncate_suffix_near_cursor
                .or(self.truncate_suffix_near_cursor),
            tokenizer_path: other.tokenizer_path.or(self.tokenizer_path),
        }
    }

    /// Engine options with defaults filled in
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            max_model_len: self.max_model_len.unwrap_or(Self::DEFAULT_MAX_MODEL_LEN),
            body_split: self.body_split.unwrap_or_default(),
            truncate_suffix_near_cursor: self.truncate_suffix_near_cursor.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".codeprompt.toml");
        std::fs::write(
            &config_path,
            "max_model_len = 4096\nbody_split = \"even\"\n",
        )
        .unwrap();

        let config = Config::load_file(&config_path).unwrap();
        assert_eq!(config.max_model_len, Some(4096));
        assert_eq!(config.body_split, Some(BodySplit::Even));
        assert_eq!(config.truncate_suffix_near_cursor, None);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(Config::load_file(dir.path().join("nonexistent.toml")).is_none());
    }

    #[test]
    fn test_load_malformed_toml() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".codeprompt.toml");
        std::fs::write(&config_path, "not valid [[[").unwrap();

        assert!(Config::load_file(&config_path).is_none());
    }

    #[test]
    fn test_merge_override() {
        let base = Config {
            max_model_len: Some(2048),
            body_split: Some(BodySplit::SuffixPercent),
            ..Default::default()
        };
        let project = Config {
            max_model_len: Some(8192),
            truncate_suffix_near_cursor: Some(true),
            ..Default::default()
        };

        let merged = base.override_with(project);
        assert_eq!(merged.max_model_len, Some(8192));
        assert_eq!(merged.body_split, Some(BodySplit::SuffixPercent));
        assert_eq!(merged.truncate_suffix_near_cursor, Some(true));
    }

    #[test]
    fn test_engine_options_defaults() {
        let options = Config::default().engine_options();
        assert_eq!(options.max_model_len, Config::DEFAULT_MAX_MODEL_LEN);
        assert_eq!(options.body_split, BodySplit::SuffixPercent);
        assert!(!options.truncate_suffix_near_cursor);
    }

    #[test]
    fn test_project_file_overrides_explicit() {
        let dir = TempDir::new().unwrap();
        let explicit = dir.path().join("service.toml");
        std::fs::write(&explicit, "max_model_len = 2048\n").unwrap();
        std::fs::write(
            dir.path().join(".codeprompt.toml"),
            "max_model_len = 4096\n",
        )
        .unwrap();

        let config = Config::load(Some(&explicit), dir.path());
        assert_eq!(config.max_model_len, Some(4096));
    }
}
