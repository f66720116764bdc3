//! TOML configuration file support.
//!
//! Settings shared by every run can live in a config file instead of flags:
//!
//! ```toml
//! # polycure.toml
//! [extraction]
//! compound_table = "reference/compounds.csv"
//! pretty = true
//! ```
//!
//! `polycure.toml` in the working directory is picked up automatically;
//! `--config` points elsewhere. Flags always win over the file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "polycure.toml";

/// Root configuration structure for polycure.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Extraction-specific settings.
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

/// Configuration for the extract, validate and compound commands.
#[derive(Debug, Default, Deserialize)]
pub struct ExtractionConfig {
    /// Compound reference table (CSV).
    pub compound_table: Option<PathBuf>,

    /// Pretty-print the JSON output.
    pub pretty: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Explicit config file, else `polycure.toml` if present, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    log::info!("Using {}", fallback.display());
                    Self::from_file(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Compound table from the flag, falling back to the config file.
    pub fn compound_table(&self, flag: Option<PathBuf>) -> Result<PathBuf> {
        flag.or_else(|| self.extraction.compound_table.clone())
            .context("No compound table given: pass --compounds or set [extraction] compound_table")
    }

    /// Whether to pretty-print; `--compact` overrides the config file.
    pub fn pretty(&self, compact: bool) -> bool {
        !compact && self.extraction.pretty.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [extraction]
            compound_table = "reference/compounds.csv"
            pretty = false
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(
            config.extraction.compound_table,
            Some(PathBuf::from("reference/compounds.csv"))
        );
        assert_eq!(config.extraction.pretty, Some(false));
        assert!(!config.pretty(false));
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config::from_str("[extraction]\ncompound_table = \"a.csv\"\n").unwrap();
        let table = config.compound_table(Some(PathBuf::from("b.csv"))).unwrap();
        assert_eq!(table, PathBuf::from("b.csv"));
        assert_eq!(config.compound_table(None).unwrap(), PathBuf::from("a.csv"));
        assert!(config.pretty(false));
        assert!(!config.pretty(true));
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.extraction.compound_table, None);
        assert!(config.compound_table(None).is_err());
    }

    #[test]
    fn test_explicit_config_must_exist() {
        assert!(Config::load(Some(Path::new("/nonexistent/polycure.toml"))).is_err());
    }
}
