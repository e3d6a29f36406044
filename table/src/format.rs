use std::path::Path;

use cmdhelp_core::CommandTable;

use crate::error::{Result, TableError};

/// Serialization format of a command table file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Json,
    Yaml,
}

impl TableFormat {
    /// Picks the format from a file extension: `.json`, `.yml` or `.yaml`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdhelp_table::TableFormat;
    ///
    /// assert_eq!(TableFormat::from_path("btrfs.yml").unwrap(), TableFormat::Yaml);
    /// assert!(TableFormat::from_path("btrfs.toml").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        extension.parse()
    }

    pub fn parse_table(self, text: &str) -> Result<CommandTable> {
        let table = match self {
            Self::Json => serde_json::from_str(text)?,
            Self::Yaml => serde_yaml::from_str(text)?,
        };
        Ok(table)
    }

    pub fn render_table(self, table: &CommandTable) -> Result<String> {
        let text = match self {
            Self::Json => serde_json::to_string_pretty(table)?,
            Self::Yaml => serde_yaml::to_string(table)?,
        };
        Ok(text)
    }
}

impl std::str::FromStr for TableFormat {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yml" | "yaml" => Ok(Self::Yaml),
            other => Err(TableError::UnsupportedFormat(other.to_string())),
        }
    }
}
