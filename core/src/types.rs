//! Command tree definitions.
//!
//! A tool's commands form a tree: each [`CommandGroup`] holds an ordered
//! list of [`CommandNode`]s, and a node either carries a usage description
//! (a leaf command) or routes to a nested group. Trees are built once, at
//! startup, and only read afterwards.

use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::usage::{UsageError, UsageText};

/// Per-command capability bits.
///
/// Serialized as the raw bit value.
///
/// # Examples
///
/// ```
/// use cmdhelp_core::CommandFlags;
///
/// let flags = CommandFlags::HIDDEN | CommandFlags::FORMAT_JSON;
/// assert!(flags.contains(CommandFlags::HIDDEN));
/// assert!(!flags.contains(CommandFlags::ALIAS));
/// assert_eq!(flags.bits(), 0b1001);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandFlags(u32);

impl CommandFlags {
    /// Not shown in listings.
    pub const HIDDEN: Self = Self(1 << 0);
    /// Alternative name of another command; listed with its syntax only.
    pub const ALIAS: Self = Self(1 << 1);
    /// Supports plain text output.
    pub const FORMAT_TEXT: Self = Self(1 << 2);
    /// Supports JSON output.
    pub const FORMAT_JSON: Self = Self(1 << 3);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every bit of `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for CommandFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for CommandFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Failure to resolve a command token within a group.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No command matches the token, neither exactly nor as a prefix.
    #[error("unknown token '{0}'")]
    Unknown(String),
    /// The token is a prefix of more than one command.
    #[error("ambiguous token '{0}'")]
    Ambiguous(String),
}

/// A single entry of a command group.
///
/// # Examples
///
/// ```
/// use cmdhelp_core::{CommandFlags, CommandGroup, CommandNode};
///
/// let node = CommandNode::from_lines("scan", &["btrfs device scan [<device>...]", "Scan devices"])
///     .unwrap()
///     .with_flags(CommandFlags::FORMAT_JSON);
/// assert!(node.is_leaf());
/// assert_eq!(node.short_description(), Some("Scan devices"));
///
/// let device = CommandNode::group("device", CommandGroup::new().with_command(node));
/// assert!(!device.is_leaf());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandNode {
    /// Name typed on the command line.
    pub token: String,
    /// Usage description; absent for group entry points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<UsageText>,
    #[serde(default, skip_serializing_if = "CommandFlags::is_empty")]
    pub flags: CommandFlags,
    /// Nested group this entry routes to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<CommandGroup>,
}

impl CommandNode {
    /// Creates a leaf command with a decoded usage description.
    pub fn leaf(token: impl Into<String>, usage: UsageText) -> Self {
        Self {
            token: token.into(),
            usage: Some(usage),
            flags: CommandFlags::empty(),
            group: None,
        }
    }

    /// Creates a leaf command from raw usage lines.
    ///
    /// An empty slice yields a leaf without usage, which renders as a
    /// placeholder diagnostic.
    pub fn from_lines<S: AsRef<str>>(
        token: impl Into<String>,
        lines: &[S],
    ) -> Result<Self, UsageError> {
        let usage = match UsageText::parse(lines) {
            Ok(usage) => Some(usage),
            Err(UsageError::Empty) => None,
            Err(err) => return Err(err),
        };
        Ok(Self {
            token: token.into(),
            usage,
            flags: CommandFlags::empty(),
            group: None,
        })
    }

    /// Creates an entry point to a nested command group.
    pub fn group(token: impl Into<String>, group: CommandGroup) -> Self {
        Self {
            token: token.into(),
            usage: None,
            flags: CommandFlags::empty(),
            group: Some(group),
        }
    }

    /// Adds capability bits.
    pub fn with_flags(mut self, flags: CommandFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.group.is_none()
    }

    pub fn is_hidden(&self) -> bool {
        self.flags.contains(CommandFlags::HIDDEN)
    }

    pub fn is_alias(&self) -> bool {
        self.flags.contains(CommandFlags::ALIAS)
    }

    /// First syntax line, if the command has a usage description.
    pub fn syntax(&self) -> Option<&str> {
        self.usage.as_ref().map(|usage| usage.syntax.as_str())
    }

    pub fn short_description(&self) -> Option<&str> {
        self.usage.as_ref().and_then(|usage| usage.short.as_deref())
    }
}

/// Ordered collection of commands sharing a parent token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandGroup {
    /// Group synopsis lines, printed as `usage:` / `or:` alternatives.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub usage: Vec<String>,
    /// One-line description shown in the parent's listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    pub commands: Vec<CommandNode>,
}

impl CommandGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a synopsis line.
    pub fn with_usage(mut self, line: impl Into<String>) -> Self {
        self.usage.push(line.into());
        self
    }

    /// Sets the info string.
    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }

    /// Appends a command.
    pub fn with_command(mut self, command: CommandNode) -> Self {
        self.commands.push(command);
        self
    }

    /// Commands not flagged hidden, in declaration order.
    pub fn visible(&self) -> impl Iterator<Item = &CommandNode> {
        self.commands.iter().filter(|c| !c.is_hidden())
    }

    /// Finds a command by exact token.
    pub fn find(&self, token: &str) -> Option<&CommandNode> {
        self.commands.iter().find(|c| c.token == token)
    }

    /// Resolves a possibly abbreviated token.
    ///
    /// An exact match always wins (hidden commands included); otherwise the
    /// token must be a prefix of exactly one visible command.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdhelp_core::{CommandGroup, CommandNode, LookupError, UsageText};
    ///
    /// let group = CommandGroup::new()
    ///     .with_command(CommandNode::leaf("show", UsageText::new("tool show")))
    ///     .with_command(CommandNode::leaf("sync", UsageText::new("tool sync")))
    ///     .with_command(CommandNode::leaf("usage", UsageText::new("tool usage")));
    ///
    /// assert_eq!(group.resolve("u").unwrap().token, "usage");
    /// assert_eq!(group.resolve("s"), Err(LookupError::Ambiguous("s".into())));
    /// assert_eq!(group.resolve("x"), Err(LookupError::Unknown("x".into())));
    /// ```
    pub fn resolve(&self, token: &str) -> Result<&CommandNode, LookupError> {
        if let Some(node) = self.find(token) {
            return Ok(node);
        }
        if token.is_empty() {
            return Err(LookupError::Unknown(String::new()));
        }

        let mut matches = self.visible().filter(|c| c.token.starts_with(token));
        match (matches.next(), matches.next()) {
            (Some(node), None) => {
                debug!(token, resolved = %node.token, "Resolved abbreviated token");
                Ok(node)
            }
            (None, _) => Err(LookupError::Unknown(token.to_string())),
            (Some(_), Some(_)) => Err(LookupError::Ambiguous(token.to_string())),
        }
    }

    /// Tokens of every command starting with `prefix`, hidden ones included.
    pub fn candidates<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> {
        self.commands
            .iter()
            .map(|c| c.token.as_str())
            .filter(move |token| token.starts_with(prefix))
    }

    /// Number of leaf commands in this group and all nested groups.
    pub fn leaf_count(&self) -> usize {
        self.commands
            .iter()
            .map(|c| c.group.as_ref().map_or(1, CommandGroup::leaf_count))
            .sum()
    }
}
