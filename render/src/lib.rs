//! Help and usage rendering for hierarchical command-line tools.
//!
//! Renders the command trees defined with `cmdhelp-core` into fixed-column
//! help text:
//!
//! - [`usage_command`] / [`render_usage`] print one command, standalone or
//!   in listing style, with option descriptions wrapped at a fixed column
//!   ([`wrap_text`]).
//! - [`render_group_overview`] prints a group's two-column summary;
//!   [`usage_command_group`] lists every command of a group tree.
//! - [`report_unknown_option`], [`report_unknown_token`] and
//!   [`report_ambiguous_token`] write command-line diagnostics; the
//!   `usage_*` / `help_*` variants also terminate the process.
//! - [`HelpContext`] carries the name of the command being dispatched and
//!   checks argument counts.
//!
//! Every renderer writes to a caller-supplied [`std::io::Write`].
//!
//! # Example
//!
//! ```
//! use cmdhelp_core::{CommandGroup, CommandNode, optline};
//! use cmdhelp_render::usage_command_group;
//!
//! let resize = CommandNode::from_lines(
//!     "resize",
//!     &[
//!         "btrfs filesystem resize [options] <size> <path>",
//!         "Resize a mounted filesystem",
//!         "",
//!         optline!("--enqueue", "wait if there's another exclusive operation running"),
//!     ],
//! )
//! .unwrap();
//! let group = CommandGroup::new()
//!     .with_usage("btrfs filesystem <command> [<args>]")
//!     .with_command(resize);
//!
//! let mut out = Vec::new();
//! usage_command_group(&group, false, &mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "usage: btrfs filesystem <command> [<args>]\n\n    btrfs filesystem resize [options] <size> <path>\n        Resize a mounted filesystem\n\n"
//! );
//! ```

mod args;
mod command;
mod context;
mod features;
mod group;
pub mod layout;
mod report;
mod wrap;

pub use args::{ArgsError, BadOption, clean_args_no_options, clean_args_no_options_relaxed};
pub use command::{RenderFlags, RenderStatus, render_command, render_usage, usage_command};
pub use context::{ArgcError, HelpContext};
pub use features::{print_features, write_features};
pub use group::{help_command_group, render_group_overview, usage_command_group, write_group_synopsis};
pub use report::{
    command_prefix, help_ambiguous_token, help_unknown_token, report_ambiguous_token,
    report_unknown_option, report_unknown_token, usage, usage_unknown_option,
};
pub use wrap::wrap_text;
