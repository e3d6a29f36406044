//! Help configuration.
//!
//! A small YAML file selecting the command table and overriding the program
//! name and build features printed by the features banner.
//!
//! # Example YAML
//!
//! ```yaml
//! program: btrfs
//! table: /usr/share/cmdhelp/btrfs.yml
//! features:
//!   package: btrfs-progs v6.8
//!   crypto_provider: libgcrypt
//!   capabilities:
//!     - { name: EXPERIMENTAL, enabled: false }
//!     - { name: ZSTD, enabled: true }
//! ```

use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use cmdhelp_core::BuildFeatures;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Top-level help configuration. Every field is optional.
///
/// # Examples
///
/// ```
/// use cmdhelp_table::HelpConfig;
///
/// let config: HelpConfig = serde_yaml::from_str("program: mkfs.btrfs").unwrap();
/// assert_eq!(config.program_or("btrfs"), "mkfs.btrfs");
/// assert!(config.table.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HelpConfig {
    /// Program name replacing the table's own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    /// Command table file, tried before the built-in table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<PathBuf>,
    /// Build features for the features banner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<BuildFeatures>,
}

impl HelpConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::TableError::IoError) if the file cannot
    /// be read, or [`YamlError`](crate::TableError::YamlError) if parsing
    /// fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    pub fn program_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.program.as_deref().unwrap_or(default)
    }
}
