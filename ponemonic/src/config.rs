//! Application configuration that extends the base `Config` from core.
//!
//! This configuration includes:
//! - All table options from `ponemonic_core::Config` (flattened via serde)
//! - Whether the pinyin dictionary reports every reading of a character
//! - The default log filter for the command-line tool
//!
//! # Example
//!
//! ```rust
//! use ponemonic::PonemonicConfig;
//!
//! let config = PonemonicConfig::default();
//! assert!(config.heteronym);
//! let base = config.into_base();
//! assert_eq!(base.comment_marker, '#');
//! ```

use std::path::Path;

use ponemonic_core::ConfigError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PonemonicConfig {
    /// Table loading options (comment marker, dataset override)
    #[serde(flatten)]
    pub base: ponemonic_core::Config,

    /// Keep every reading of a heteronym; `false` keeps only the first one.
    pub heteronym: bool,

    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for PonemonicConfig {
    fn default() -> Self {
        Self {
            base: ponemonic_core::Config::default(),
            heteronym: true,
            log_filter: "ponemonic=info,ponemonic_core=info".to_string(),
        }
    }
}

impl PonemonicConfig {
    pub fn into_base(self) -> ponemonic_core::Config {
        self.base
    }

    pub fn base(&self) -> &ponemonic_core::Config {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut ponemonic_core::Config {
        &mut self.base
    }

    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn flattened_fields_parse() {
        let cfg = PonemonicConfig::from_toml_str(
            "heteronym = false\ncomment_marker = \";\"\ndataset_path = \"chars.csv\"\n",
        )
        .unwrap();
        assert!(!cfg.heteronym);
        assert_eq!(cfg.base().comment_marker, ';');
        assert_eq!(cfg.base().dataset_path, Some(PathBuf::from("chars.csv")));
        assert_eq!(cfg.log_filter, PonemonicConfig::default().log_filter);
    }

    #[test]
    fn toml_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ponemonic.toml");

        let mut cfg = PonemonicConfig::default();
        cfg.heteronym = false;
        cfg.base_mut().comment_marker = '%';
        cfg.save_toml(&path).unwrap();

        assert_eq!(PonemonicConfig::load_toml(&path).unwrap(), cfg);
    }
}
