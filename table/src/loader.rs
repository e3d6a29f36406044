//! Command table loading with builder pattern and fallback chains.
//!
//! ```no_run
//! use cmdhelp_table::LoadedTable;
//!
//! // Load a single JSON or YAML table file
//! let loaded = LoadedTable::from_file("btrfs.yml").unwrap();
//! println!("{} commands", loaded.table().command_count());
//!
//! // Try a user file first, fall back to the built-in table
//! let loaded = LoadedTable::builder()
//!     .from_file("/etc/cmdhelp/table.json")
//!     .with_builtin()
//!     .build()
//!     .unwrap();
//! ```

use std::path::{Path, PathBuf};

use cmdhelp_core::CommandTable;
use tracing::debug;

use crate::builtin::builtin_table;
use crate::error::{Result, TableError};
use crate::format::TableFormat;

/// Describes where a [`LoadedTable`] was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    /// A JSON or YAML table file.
    File(PathBuf),
    /// The table compiled into the binary.
    Builtin,
    /// A fallback chain of multiple sources.
    Multiple(Vec<TableSource>),
}

/// A command table together with its origin.
#[derive(Debug)]
pub struct LoadedTable {
    table: CommandTable,
    source: TableSource,
}

impl LoadedTable {
    /// Returns a new [`TableBuilder`] for configuring a fallback chain.
    pub fn builder() -> TableBuilder {
        TableBuilder::new()
    }

    /// Loads a table file, picking JSON or YAML by extension.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::UnsupportedFormat`] for an unknown extension,
    /// [`TableError::IoError`] if the file cannot be read, or a JSON/YAML
    /// error if parsing fails.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = TableFormat::from_path(path)?;
        let text = std::fs::read_to_string(path)?;
        let table = format.parse_table(&text)?;
        debug!(path = %path.display(), commands = table.command_count(), "Loaded command table");

        Ok(Self {
            table,
            source: TableSource::File(path.to_path_buf()),
        })
    }

    /// Loads the built-in table.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::UsageError`] if a built-in usage description is
    /// malformed.
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            table: builtin_table()?,
            source: TableSource::Builtin,
        })
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    pub fn into_table(self) -> CommandTable {
        self.table
    }

    /// Returns a reference to the source metadata.
    pub fn source(&self) -> &TableSource {
        &self.source
    }
}

/// Builder for loading a [`LoadedTable`] through a fallback chain.
///
/// Sources are tried in the order they are added. The first successful load
/// wins; if all fail, [`TableError::NoSourcesAvailable`] is returned.
pub struct TableBuilder {
    sources: Vec<TableSource>,
}

impl TableBuilder {
    /// Creates a new builder with no sources.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Adds a table file as a source.
    pub fn from_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(TableSource::File(path.into()));
        self
    }

    /// Adds the built-in table as a source.
    pub fn with_builtin(mut self) -> Self {
        self.sources.push(TableSource::Builtin);
        self
    }

    /// Attempts to load a table from configured sources in order.
    pub fn build(self) -> Result<LoadedTable> {
        if self.sources.is_empty() {
            return Err(TableError::NoSourcesAvailable);
        }

        let all_sources = self.sources.clone();

        for source in &self.sources {
            let result = match source {
                TableSource::File(path) => LoadedTable::from_file(path),
                TableSource::Builtin => LoadedTable::builtin(),
                TableSource::Multiple(_) => continue,
            };

            match result {
                Ok(mut loaded) => {
                    loaded.source = TableSource::Multiple(all_sources);
                    return Ok(loaded);
                }
                Err(err) => debug!(?source, error = %err, "Table source failed, trying next"),
            }
        }

        Err(TableError::NoSourcesAvailable)
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}
