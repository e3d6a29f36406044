//! Command table validation.
//!
//! Catches authoring defects in a command tree, such as duplicate or empty
//! tokens, leaves without a usage description and nested groups without an
//! info string. Rendering never depends on validation: a malformed entry
//! still renders, with a placeholder diagnostic in place of the missing
//! section.
//!
//! # Examples
//!
//! ```
//! use cmdhelp_core::*;
//!
//! let good = CommandGroup::new().with_command(CommandNode::leaf(
//!     "show",
//!     UsageText::new("tool show").with_short("Show things"),
//! ));
//! assert!(validate_group("tool", &good).is_empty());
//!
//! // Missing short description
//! let bad = CommandGroup::new().with_command(CommandNode::leaf("show", UsageText::new("tool show")));
//! assert_eq!(
//!     validate_group("tool", &bad),
//!     vec![ValidationError::MissingShortDescription("tool show".into())]
//! );
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{CommandGroup, CommandNode, CommandTable};

/// Command table validation errors.
///
/// Paths are the space-separated tokens leading to the offending entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Program name is empty or whitespace-only.
    #[error("program name cannot be empty")]
    EmptyProgram,
    /// Command token is empty or contains whitespace.
    #[error("invalid command token at: {0}")]
    InvalidToken(String),
    /// Two commands in the same group share a token.
    #[error("duplicate command in group: {0}")]
    DuplicateToken(String),
    /// A visible leaf command has no usage description.
    #[error("no usage for: {0}")]
    MissingUsage(String),
    /// A non-alias leaf command has no short description.
    #[error("no short description for: {0}")]
    MissingShortDescription(String),
    /// An entry has both a usage description and a nested group.
    #[error("command both executes and routes to a group: {0}")]
    MixedNode(String),
    /// A nested group has no info string for its parent's listing.
    #[error("group has no info string: {0}")]
    MissingGroupInfo(String),
}

/// Validates a full command table.
pub fn validate_table(table: &CommandTable) -> Vec<ValidationError> {
    if table.program.trim().is_empty() {
        return vec![ValidationError::EmptyProgram];
    }
    validate_group(&table.program, &table.root)
}

/// Validates a group and everything below it. `path` is the token path of
/// the group itself.
///
/// Unlike schema validation, every problem is reported, not just the first.
pub fn validate_group(path: &str, group: &CommandGroup) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for node in &group.commands {
        let node_path = format!("{path} {}", node.token);

        if node.token.is_empty() || node.token.contains(char::is_whitespace) {
            errors.push(ValidationError::InvalidToken(node_path));
            continue;
        }
        if !seen.insert(node.token.as_str()) {
            errors.push(ValidationError::DuplicateToken(node_path.clone()));
        }

        match &node.group {
            Some(child) => {
                if node.usage.is_some() {
                    errors.push(ValidationError::MixedNode(node_path.clone()));
                }
                if child.info.is_none() && !node.is_hidden() {
                    errors.push(ValidationError::MissingGroupInfo(node_path.clone()));
                }
                errors.extend(validate_group(&node_path, child));
            }
            None => errors.extend(validate_leaf(node, node_path)),
        }
    }

    errors
}

fn validate_leaf(node: &CommandNode, path: String) -> Option<ValidationError> {
    match &node.usage {
        None if !node.is_hidden() => Some(ValidationError::MissingUsage(path)),
        Some(usage) if usage.short.is_none() && !node.is_alias() => {
            Some(ValidationError::MissingShortDescription(path))
        }
        _ => None,
    }
}
