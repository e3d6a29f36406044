//! Command table loading and configuration for `cmdhelp`.
//!
//! Tables are read from JSON or YAML files ([`LoadedTable::from_file`]) or
//! taken from the built-in `btrfs` table ([`builtin_table`]). A
//! [`TableBuilder`] chains several sources and uses the first that loads.
//! [`HelpConfig`] is the optional YAML configuration of the CLI.
//!
//! # Example
//!
//! ```
//! use cmdhelp_table::{LoadedTable, TableFormat};
//!
//! let loaded = LoadedTable::builder()
//!     .from_file("does-not-exist.yml")
//!     .with_builtin()
//!     .build()
//!     .unwrap();
//!
//! let yaml = TableFormat::Yaml.render_table(loaded.table()).unwrap();
//! assert!(yaml.starts_with("program: btrfs\n"));
//! ```

mod builtin;
pub mod config;
pub mod error;
mod format;
pub mod loader;

pub use builtin::builtin_table;
pub use config::HelpConfig;
pub use error::{Result, TableError};
pub use format::TableFormat;
pub use loader::{LoadedTable, TableBuilder, TableSource};
