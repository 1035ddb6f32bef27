//! Mask configuration persistence
//!
//! Stores defaults and named mask presets in `~/.config/inputmask/config.yaml`

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::mask::{MaskOptions, DEFAULT_ANY_PLACEHOLDER, DEFAULT_NUMBER_PLACEHOLDER};

/// Configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskConfig {
    /// Placeholder for digit cells
    #[serde(default = "default_number_placeholder")]
    pub number_placeholder: char,

    /// Placeholder for any-character cells
    #[serde(default = "default_any_placeholder")]
    pub any_placeholder: char,

    /// Report numbers instead of masked text
    #[serde(default)]
    pub only_numbers: bool,

    /// Named masks (e.g., "phone" -> "(__) ___-____")
    #[serde(default)]
    pub presets: BTreeMap<String, String>,
}

fn default_number_placeholder() -> char {
    DEFAULT_NUMBER_PLACEHOLDER
}

fn default_any_placeholder() -> char {
    DEFAULT_ANY_PLACEHOLDER
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            number_placeholder: default_number_placeholder(),
            any_placeholder: default_any_placeholder(),
            only_numbers: false,
            presets: BTreeMap::new(),
        }
    }
}

impl MaskConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Self::default()
            }
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse config at {}: {}", path.display(), e))
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Look up a named mask
    pub fn preset(&self, name: &str) -> Option<&str> {
        self.presets.get(name).map(String::as_str)
    }

    /// Add or replace a named mask
    pub fn set_preset(&mut self, name: &str, mask: &str) {
        self.presets.insert(name.to_string(), mask.to_string());
    }

    /// Engine options from the configured defaults
    pub fn options(&self) -> MaskOptions {
        MaskOptions {
            only_numbers: self.only_numbers,
            number_placeholder: self.number_placeholder,
            any_placeholder: self.any_placeholder,
        }
    }
}
