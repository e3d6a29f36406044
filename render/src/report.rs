//! Diagnostics for bad command lines.
//!
//! The `report_*` functions write a diagnostic to any writer and return;
//! the process-terminating variants write to standard error and exit with
//! status 1.

use std::io::{self, Write};
use std::process;

use cmdhelp_core::{CommandGroup, CommandNode};
use tracing::debug;

use crate::args::BadOption;
use crate::command::usage_command;
use crate::context::HelpContext;
use crate::group::usage_command_group;

/// Guesses the command part of a syntax line: everything before the first
/// argument placeholder (`<`, `[`) or option (`-` after a space).
///
/// # Examples
///
/// ```
/// use cmdhelp_render::command_prefix;
///
/// assert_eq!(command_prefix("btrfs sub add <dir>"), "btrfs sub add");
/// assert_eq!(command_prefix("btrfs check [options] <device>"), "btrfs check");
/// assert_eq!(command_prefix("btrfs fi df -h <path>"), "btrfs fi df");
/// assert_eq!(command_prefix("btrfs version"), "btrfs version");
/// ```
pub fn command_prefix(syntax: &str) -> &str {
    let mut prev = None;
    let end = syntax
        .char_indices()
        .find(|&(_, c)| {
            let stop = c == '<' || c == '[' || (c == '-' && prev == Some(' '));
            prev = Some(c);
            stop
        })
        .map_or(syntax.len(), |(index, _)| index);
    syntax[..end].trim_end()
}

/// Writes the unknown option diagnostic for a command with the given
/// syntax line.
///
/// ```text
/// btrfs device add: unrecognized option '--unknown'
/// Try 'btrfs device add --help' for more information
/// ```
pub fn report_unknown_option(syntax: &str, bad: &BadOption, out: &mut dyn Write) -> io::Result<()> {
    let prefix = command_prefix(syntax);
    writeln!(out, "{prefix}: {bad}")?;
    writeln!(out, "Try '{prefix} --help' for more information")
}

/// Writes the unknown token diagnostic followed by the group's listing.
pub fn report_unknown_token(
    ctx: &HelpContext,
    token: &str,
    group: &CommandGroup,
    out: &mut dyn Write,
) -> io::Result<()> {
    writeln!(out, "{}: unknown token '{token}'", ctx.program())?;
    usage_command_group(group, false, out)
}

/// Writes the ambiguous token diagnostic with the candidate commands.
///
/// Every command whose token starts with `token` is offered, hidden
/// commands included.
pub fn report_ambiguous_token(
    ctx: &HelpContext,
    token: &str,
    group: &CommandGroup,
    out: &mut dyn Write,
) -> io::Result<()> {
    writeln!(out, "{}: ambiguous token '{token}'", ctx.program())?;
    writeln!(out)?;
    writeln!(out, "Did you mean one of these?")?;
    for candidate in group.candidates(token) {
        writeln!(out, "\t{candidate}")?;
    }
    Ok(())
}

/// Reports an option `node` does not accept and exits with status 1.
pub fn usage_unknown_option(node: &CommandNode, bad: &BadOption) -> ! {
    let syntax = node.syntax().unwrap_or(node.token.as_str());
    let result = report_unknown_option(syntax, bad, &mut io::stderr().lock());
    exit_after(result, 1)
}

/// Reports a token matching no command of `group` and exits with status 1.
pub fn help_unknown_token(ctx: &HelpContext, token: &str, group: &CommandGroup) -> ! {
    let result = report_unknown_token(ctx, token, group, &mut io::stderr().lock());
    exit_after(result, 1)
}

/// Reports a token matching several commands of `group` and exits with
/// status 1.
pub fn help_ambiguous_token(ctx: &HelpContext, token: &str, group: &CommandGroup) -> ! {
    let result = report_ambiguous_token(ctx, token, group, &mut io::stderr().lock());
    exit_after(result, 1)
}

/// Prints full usage of `node` to standard error and exits with `code`.
pub fn usage(node: &CommandNode, code: i32) -> ! {
    let result = usage_command(node, true, &mut io::stderr().lock()).map(drop);
    exit_after(result, code)
}

fn exit_after(result: io::Result<()>, code: i32) -> ! {
    if let Err(err) = result {
        debug!(error = %err, "Failed to write diagnostic");
    }
    process::exit(code)
}
