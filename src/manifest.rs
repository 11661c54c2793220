//! Plugin manifest (`nova.toml`).
//!
//! The manifest tells the host what the plugin is called and which
//! preferences it exposes. The converter declares one keyword preference per
//! source encoding; the host stores the user's values and passes them back
//! with every query.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::Preferences;
use crate::core::convert::capitalize;
use crate::encoding::{Encoding, DEFAULT_ICON};
use crate::error::{RadixError, RadixResult};

/// Complete plugin manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginManifest {
    pub extension: ExtensionMeta,

    #[serde(default)]
    pub preferences: Vec<PreferenceConfig>,
}

/// Plugin metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionMeta {
    /// Unique identifier (lowercase, alphanumeric, hyphens).
    pub name: String,

    /// Human-readable display name.
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Semantic version (e.g., "1.0.0").
    pub version: String,

    /// Icon filename relative to the plugin root.
    #[serde(default)]
    pub icon: Option<String>,
}

/// User preference configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceConfig {
    /// Preference key.
    pub name: String,

    /// Human-readable title.
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "type")]
    pub pref_type: PreferenceType,

    #[serde(default)]
    pub default: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferenceType {
    /// A launcher keyword that routes queries to the plugin
    Keyword,
    Text,
}

impl Default for PluginManifest {
    fn default() -> Self {
        let defaults = Preferences::default();
        let preferences = Encoding::ALL
            .into_iter()
            .map(|encoding| PreferenceConfig {
                name: Preferences::key_for(encoding).to_string(),
                title: format!("{} keyword", capitalize(encoding.display_name())),
                description: format!("Convert a {} number", encoding),
                pref_type: PreferenceType::Keyword,
                default: Some(defaults.keyword(encoding).to_string()),
            })
            .collect();

        Self {
            extension: ExtensionMeta {
                name: env!("CARGO_PKG_NAME").to_string(),
                title: "Number Converter".to_string(),
                description: env!("CARGO_PKG_DESCRIPTION").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icon: Some(DEFAULT_ICON.to_string()),
            },
            preferences,
        }
    }
}

impl PluginManifest {
    pub fn from_toml(content: &str) -> RadixResult<Self> {
        let manifest: Self = toml::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn to_toml(&self) -> RadixResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate the manifest for required fields and constraints.
    pub fn validate(&self) -> RadixResult<()> {
        if self.extension.name.is_empty() {
            return Err(RadixError::Config("extension.name is required".to_string()));
        }
        if self.extension.title.is_empty() {
            return Err(RadixError::Config("extension.title is required".to_string()));
        }
        if self.extension.version.is_empty() {
            return Err(RadixError::Config("extension.version is required".to_string()));
        }

        for encoding in Encoding::ALL {
            let key = Preferences::key_for(encoding);
            let declared = self
                .preferences
                .iter()
                .find(|p| p.name == key)
                .ok_or_else(|| RadixError::Config(format!("preference '{}' is missing", key)))?;
            if declared.pref_type != PreferenceType::Keyword {
                return Err(RadixError::Config(format!(
                    "preference '{}' must be a keyword",
                    key
                )));
            }
        }

        Ok(())
    }

    /// Preferences as they are before the user changes anything.
    pub fn default_preferences(&self) -> Preferences {
        let map: HashMap<String, String> = self
            .preferences
            .iter()
            .filter_map(|p| p.default.clone().map(|d| (p.name.clone(), d)))
            .collect();
        Preferences::from_map(&map)
    }
}
