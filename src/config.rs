use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::encoding::Encoding;
use crate::error::RadixResult;

/// Keywords that trigger the converter, one per source encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub kw_hex: String,
    pub kw_bin: String,
    pub kw_dec: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            kw_hex: "hex".to_string(),
            kw_bin: "bin".to_string(),
            kw_dec: "dec".to_string(),
        }
    }
}

impl Preferences {
    /// Preference key holding the keyword for `encoding`.
    pub fn key_for(encoding: Encoding) -> &'static str {
        match encoding {
            Encoding::Hexadecimal => "kw_hex",
            Encoding::Binary => "kw_bin",
            Encoding::Decimal => "kw_dec",
        }
    }

    /// Build from the host's preference map, keeping defaults for missing keys.
    pub fn from_map(map: &HashMap<String, String>) -> Self {
        let mut prefs = Self::default();
        if let Some(kw) = map.get("kw_hex") {
            prefs.kw_hex = kw.clone();
        }
        if let Some(kw) = map.get("kw_bin") {
            prefs.kw_bin = kw.clone();
        }
        if let Some(kw) = map.get("kw_dec") {
            prefs.kw_dec = kw.clone();
        }
        prefs.validate();
        prefs
    }

    pub fn keyword(&self, encoding: Encoding) -> &str {
        match encoding {
            Encoding::Hexadecimal => &self.kw_hex,
            Encoding::Binary => &self.kw_bin,
            Encoding::Decimal => &self.kw_dec,
        }
    }

    /// Source encoding selected by `keyword`.
    ///
    /// Keywords are checked hex, bin, dec; the first match wins.
    pub fn source_for(&self, keyword: &str) -> Option<Encoding> {
        Encoding::ALL
            .into_iter()
            .find(|&encoding| self.keyword(encoding) == keyword)
    }

    /// Get the config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".config"))
                    .unwrap_or_else(|| PathBuf::from("/tmp"))
            })
            .join("nova")
            .join("radix.toml")
    }

    /// Load preferences from the default path, or return defaults if not found
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load preferences from `path`, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        let mut prefs = if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(prefs) => prefs,
                    Err(e) => {
                        warn!(path = %path.display(), "Failed to parse preferences: {}", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    warn!(path = %path.display(), "Failed to read preferences: {}", e);
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        prefs.validate();
        prefs
    }

    /// Trim keywords and restore defaults for empty ones
    fn validate(&mut self) {
        let defaults = Self::default();
        for (kw, default) in [
            (&mut self.kw_hex, defaults.kw_hex),
            (&mut self.kw_bin, defaults.kw_bin),
            (&mut self.kw_dec, defaults.kw_dec),
        ] {
            let trimmed = kw.trim();
            *kw = if trimmed.is_empty() {
                default
            } else {
                trimmed.to_string()
            };
        }
    }

    /// Save preferences to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> RadixResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keywords() {
        let prefs = Preferences::default();
        assert_eq!(prefs.source_for("hex"), Some(Encoding::Hexadecimal));
        assert_eq!(prefs.source_for("bin"), Some(Encoding::Binary));
        assert_eq!(prefs.source_for("dec"), Some(Encoding::Decimal));
        assert_eq!(prefs.source_for("oct"), None);
        assert_eq!(prefs.source_for(""), None);
    }

    #[test]
    fn test_from_map() {
        let map = HashMap::from([
            ("kw_hex".to_string(), "0x".to_string()),
            ("kw_dec".to_string(), "  d ".to_string()),
        ]);
        let prefs = Preferences::from_map(&map);
        assert_eq!(prefs.kw_hex, "0x");
        assert_eq!(prefs.kw_bin, "bin");
        assert_eq!(prefs.kw_dec, "d");
    }

    #[test]
    fn test_duplicate_keyword_prefers_hex_then_bin() {
        let prefs = Preferences {
            kw_hex: "n".to_string(),
            kw_bin: "n".to_string(),
            kw_dec: "n".to_string(),
        };
        assert_eq!(prefs.source_for("n"), Some(Encoding::Hexadecimal));

        let prefs = Preferences {
            kw_hex: "h".to_string(),
            kw_bin: "n".to_string(),
            kw_dec: "n".to_string(),
        };
        assert_eq!(prefs.source_for("n"), Some(Encoding::Binary));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let prefs: Preferences = toml::from_str(r#"kw_hex = "x""#).unwrap();
        assert_eq!(prefs.kw_hex, "x");
        assert_eq!(prefs.kw_bin, "bin");
        assert_eq!(prefs.kw_dec, "dec");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nova").join("radix.toml");

        let prefs = Preferences {
            kw_hex: "h".to_string(),
            kw_bin: "b".to_string(),
            kw_dec: "d".to_string(),
        };
        prefs.save_to(&path).unwrap();

        assert_eq!(Preferences::load_from(&path), prefs);
    }

    #[test]
    fn test_load_missing_or_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("radix.toml");
        assert_eq!(Preferences::load_from(&path), Preferences::default());

        fs::write(&path, "kw_hex = [").unwrap();
        assert_eq!(Preferences::load_from(&path), Preferences::default());
    }

    #[test]
    fn test_load_restores_empty_keywords() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("radix.toml");
        fs::write(&path, "kw_hex = \"\"\nkw_bin = \" b \"\n").unwrap();

        let prefs = Preferences::load_from(&path);
        assert_eq!(prefs.kw_hex, "hex");
        assert_eq!(prefs.kw_bin, "b");
    }
}
