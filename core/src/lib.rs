//! Core types for rendering help of hierarchical command-line tools.
//!
//! This crate defines the static data a help renderer works from:
//!
//! - [`CommandGroup`] / [`CommandNode`]: the command tree, with
//!   [`CommandFlags`] marking hidden commands, aliases and supported output
//!   formats.
//! - [`UsageText`]: a command's decoded usage description (syntax, short
//!   and long descriptions, options section), parsed once from the raw
//!   positional line format by [`UsageText::parse`].
//! - [`OUTPUT_FORMATS`] / [`output_format_name`]: the output format
//!   registry.
//! - [`CommandTable`]: a serializable bundle of a program's whole tree.
//! - [`BuildFeatures`]: resolved build capabilities for the features
//!   banner.
//!
//! Validation ([`validate_table`], [`validate_group`]) reports authoring
//! defects such as missing short descriptions or duplicate tokens.
//!
//! # Example
//!
//! ```
//! use cmdhelp_core::*;
//!
//! let add = CommandNode::from_lines(
//!     "add",
//!     &[
//!         "btrfs device add [options] <device> [<device>...] <path>",
//!         "Add one or more devices to a mounted filesystem.",
//!         "",
//!         optline!("-f|--force", "force overwrite existing filesystem on the disk"),
//!     ],
//! )
//! .unwrap();
//! let device = CommandGroup::new()
//!     .with_info("manage and query devices in the filesystem")
//!     .with_command(add);
//! let table = CommandTable::new(
//!     "btrfs",
//!     CommandGroup::new().with_command(CommandNode::group("device", device)),
//! );
//!
//! assert_eq!(table.root.resolve("dev").unwrap().token, "device");
//! assert!(validate_table(&table).is_empty());
//! ```

mod features;
mod format;
mod package;
mod types;
mod usage;
mod validate;

pub use features::{BuildFeatures, CAPABILITY_NAMES, Capability};
pub use format::{FormatDescriptor, OUTPUT_FORMATS, output_format_name, supported_formats};
pub use package::CommandTable;
pub use types::*;
pub use usage::{
    DESCRIPTION_MARKER, INSERT_FORMAT, OPTION_MARKER, UsageEntry, UsageError, UsageText,
};
pub use validate::{ValidationError, validate_group, validate_table};
