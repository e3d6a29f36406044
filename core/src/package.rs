use serde::{Deserialize, Serialize};

use crate::CommandGroup;

/// A complete command tree for one program, suitable for serializing to
/// JSON or YAML and loading at startup.
///
/// # Examples
///
/// ```
/// use cmdhelp_core::*;
///
/// let root = CommandGroup::new()
///     .with_usage("tool [--help] <group> [<command>] [<args>]")
///     .with_command(CommandNode::leaf(
///         "version",
///         UsageText::new("tool version").with_short("Display version"),
///     ));
/// let table = CommandTable::new("tool", root);
///
/// assert_eq!(table.program, "tool");
/// assert_eq!(table.command_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandTable {
    /// Program name used as the root of every diagnostic prefix.
    pub program: String,
    /// Optional free-form description of the table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Top-level command group.
    pub root: CommandGroup,
}

impl CommandTable {
    pub fn new(program: impl Into<String>, root: CommandGroup) -> Self {
        Self {
            program: program.into(),
            description: None,
            root,
        }
    }

    /// Returns the number of leaf commands in the whole tree.
    pub fn command_count(&self) -> usize {
        self.root.leaf_count()
    }
}
