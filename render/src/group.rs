//! Rendering of command groups.
//!
//! Two views exist: the short overview ([`render_group_overview`]), a
//! two-column table of subgroups and commands, and the listing
//! ([`usage_command_group`]), which walks the whole tree and renders every
//! visible command in listing style.

use std::io::{self, Write};

use cmdhelp_core::{CommandGroup, CommandNode};
use tracing::debug;

use crate::command::{RenderFlags, render_command};
use crate::context::HelpContext;
use crate::layout::OVERVIEW_TOKEN_WIDTH;

/// Writes the group synopsis as `usage:` followed by `or:` alternatives.
pub fn write_group_synopsis(group: &CommandGroup, out: &mut dyn Write) -> io::Result<()> {
    let mut lines = group.usage.iter();
    if let Some(first) = lines.next() {
        writeln!(out, "usage: {first}")?;
    }
    for line in lines {
        writeln!(out, "   or: {line}")?;
    }
    Ok(())
}

/// Writes the short overview of a group: synopsis, subgroups with their
/// info strings, commands with their short descriptions, and a guidance
/// footer.
///
/// # Examples
///
/// ```
/// use cmdhelp_core::{CommandGroup, CommandNode, UsageText};
/// use cmdhelp_render::{HelpContext, render_group_overview};
///
/// let group = CommandGroup::new()
///     .with_usage("tool <command> [<args>]")
///     .with_command(CommandNode::leaf("add", UsageText::new("tool add").with_short("Add an item")));
/// let mut out = Vec::new();
/// render_group_overview(&group, &HelpContext::new("tool"), &mut out).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("usage: tool <command> [<args>]\n\nCommand groups:\n\nCommands:\n"));
/// assert!(text.contains("  add               Add an item\n"));
/// ```
pub fn render_group_overview(
    group: &CommandGroup,
    ctx: &HelpContext,
    out: &mut dyn Write,
) -> io::Result<()> {
    write_group_synopsis(group, out)?;
    writeln!(out)?;

    writeln!(out, "Command groups:")?;
    for node in group.visible().filter(|c| !c.is_leaf()) {
        let info = node
            .group
            .as_ref()
            .and_then(|g| g.info.as_deref())
            .unwrap_or_default();
        write_overview_row(&node.token, info, out)?;
    }

    writeln!(out)?;
    writeln!(out, "Commands:")?;
    for node in group.visible().filter(|c| c.is_leaf()) {
        match node.short_description() {
            Some(short) => write_overview_row(&node.token, short, out)?,
            None => {
                let placeholder = format!("No short description for '{}'", node.token);
                write_overview_row(&node.token, &placeholder, out)?;
            }
        }
    }

    writeln!(out)?;
    let program = ctx.program();
    writeln!(out, "For an overview of a given command use '{program} command --help'")?;
    writeln!(out, "or '{program} [command...] --help --full' to print all available options.")?;
    writeln!(out, "Any command name can be shortened as far as it stays unambiguous,")?;
    writeln!(out, "however it is recommended to use full command names in scripts.")?;
    writeln!(out, "All command groups have their manual page named '{program}-<group>'.")
}

fn write_overview_row(token: &str, text: &str, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "  {token:<OVERVIEW_TOKEN_WIDTH$}  {text}")
}

/// Writes the group synopsis, the listing of every visible command in the
/// tree, and the group's info string.
///
/// Without `full`, commands show their syntax and short description;
/// with `full`, their long descriptions and options too.
pub fn usage_command_group(group: &CommandGroup, full: bool, out: &mut dyn Write) -> io::Result<()> {
    write_group_synopsis(group, out)?;
    writeln!(out)?;
    Listing::new(out, full).group(group)?;
    writeln!(out)?;
    if let Some(info) = &group.info {
        writeln!(out, "{info}")?;
    }
    Ok(())
}

/// Handles `help` for a group: `--full` as first argument selects the full
/// listing.
pub fn help_command_group<S: AsRef<str>>(
    group: &CommandGroup,
    args: &[S],
    out: &mut dyn Write,
) -> io::Result<()> {
    let full = args.first().is_some_and(|arg| arg.as_ref() == "--full");
    usage_command_group(group, full, out)
}

/// Listing writer threaded through the group recursion.
///
/// Blank lines go between sibling entries in full mode. In compact mode a
/// nested group's block is separated from whatever precedes it, and from
/// the next leaf command after it, by exactly one blank line.
struct Listing<'a> {
    out: &'a mut dyn Write,
    full: bool,
    pending_separator: bool,
}

impl<'a> Listing<'a> {
    fn new(out: &'a mut dyn Write, full: bool) -> Self {
        Self {
            out,
            full,
            pending_separator: false,
        }
    }

    fn blank_line(&mut self) -> io::Result<()> {
        self.pending_separator = false;
        writeln!(self.out)
    }

    fn group(&mut self, group: &CommandGroup) -> io::Result<()> {
        for (index, node) in group.visible().enumerate() {
            let first = index == 0;
            match &node.group {
                None => self.command(node, first)?,
                Some(nested) => {
                    if !first {
                        self.blank_line()?;
                    }
                    debug!(token = %node.token, full = self.full, "Listing nested group");
                    self.group(nested)?;
                    if !self.full {
                        self.pending_separator = true;
                    }
                }
            }
        }
        Ok(())
    }

    fn command(&mut self, node: &CommandNode, first: bool) -> io::Result<()> {
        if (self.full && !first) || self.pending_separator {
            self.blank_line()?;
        }

        let alias = node.is_alias();
        render_command(node, RenderFlags::entry(self.full, true, alias), self.out)?;
        if alias {
            // Aliases render only their syntax, which is left unterminated.
            writeln!(self.out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use cmdhelp_core::{CommandFlags, UsageText};

    use super::*;

    fn leaf(token: &str) -> CommandNode {
        CommandNode::leaf(
            token,
            UsageText::new(format!("tool {token} <arg>"))
                .with_short(format!("{token} short"))
                .with_long(format!("{token} long"))
                .with_entry(cmdhelp_core::UsageEntry::option("-f", "force")),
        )
    }

    fn nested(name: &str, tokens: &[&str]) -> CommandNode {
        let group = tokens
            .iter()
            .fold(CommandGroup::new().with_info(format!("{name} info")), |g, t| {
                g.with_command(leaf(&format!("{name}-{t}")))
            });
        CommandNode::group(name, group)
    }

    fn listing(group: &CommandGroup, full: bool) -> String {
        let mut out = Vec::new();
        Listing::new(&mut out, full).group(group).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn overview(group: &CommandGroup) -> String {
        let mut out = Vec::new();
        render_group_overview(group, &HelpContext::new("tool"), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn section<'a>(text: &'a str, title: &str) -> Vec<&'a str> {
        text.lines()
            .skip_while(|l| *l != title)
            .skip(1)
            .take_while(|l| !l.is_empty())
            .collect()
    }

    #[test]
    fn test_overview_flat_group() {
        let group = CommandGroup::new()
            .with_command(leaf("add"))
            .with_command(leaf("remove"))
            .with_command(leaf("list"));
        let text = overview(&group);

        assert!(section(&text, "Command groups:").is_empty());
        let commands = section(&text, "Commands:");
        assert_eq!(
            commands,
            vec![
                "  add               add short",
                "  remove            remove short",
                "  list              list short",
            ]
        );
    }

    #[test]
    fn test_overview_splits_groups_and_commands() {
        let group = CommandGroup::new()
            .with_usage("tool [--help] <group> [<command>]")
            .with_usage("tool help [--full]")
            .with_command(nested("device", &["add"]))
            .with_command(leaf("version"))
            .with_command(leaf("secret").with_flags(CommandFlags::HIDDEN));
        let text = overview(&group);

        assert!(text.starts_with("usage: tool [--help] <group> [<command>]\n   or: tool help [--full]\n\n"));
        assert_eq!(section(&text, "Command groups:"), vec!["  device            device info"]);
        assert_eq!(section(&text, "Commands:"), vec!["  version           version short"]);
        assert!(text.ends_with("All command groups have their manual page named 'tool-<group>'.\n"));
    }

    #[test]
    fn test_overview_placeholder_for_missing_short() {
        let group = CommandGroup::new().with_command(CommandNode::leaf("bare", UsageText::new("tool bare")));
        assert!(overview(&group).contains("  bare              No short description for 'bare'\n"));
    }

    #[test]
    fn test_overview_footer_written_to_same_writer() {
        let group = CommandGroup::new().with_command(leaf("add"));
        let footer = concat!(
            "  add               add short\n",
            "\n",
            "For an overview of a given command use 'tool command --help'\n",
            "or 'tool [command...] --help --full' to print all available options.\n",
            "Any command name can be shortened as far as it stays unambiguous,\n",
            "however it is recommended to use full command names in scripts.\n",
            "All command groups have their manual page named 'tool-<group>'.\n",
        );
        assert!(overview(&group).ends_with(footer));
    }

    #[test]
    fn test_compact_listing_separates_nested_block_once() {
        let group = CommandGroup::new()
            .with_command(leaf("first"))
            .with_command(nested("dev", &["a", "b"]))
            .with_command(nested("fs", &["c"]))
            .with_command(leaf("last"));
        let expected = concat!(
            "    tool first <arg>\n",
            "        first short\n",
            "\n",
            "    tool dev-a <arg>\n",
            "        dev-a short\n",
            "    tool dev-b <arg>\n",
            "        dev-b short\n",
            "\n",
            "    tool fs-c <arg>\n",
            "        fs-c short\n",
            "\n",
            "    tool last <arg>\n",
            "        last short\n",
        );
        assert_eq!(listing(&group, false), expected);
    }

    #[test]
    fn test_compact_listing_leading_nested_group() {
        let group = CommandGroup::new()
            .with_command(nested("dev", &["a"]))
            .with_command(leaf("next"))
            .with_command(leaf("after"));
        let expected = concat!(
            "    tool dev-a <arg>\n",
            "        dev-a short\n",
            "\n",
            "    tool next <arg>\n",
            "        next short\n",
            "    tool after <arg>\n",
            "        after short\n",
        );
        assert_eq!(listing(&group, false), expected);
    }

    #[test]
    fn test_alias_shows_syntax_only() {
        let alias = CommandNode::leaf("ls", UsageText::new("tool ls <path>")).with_flags(CommandFlags::ALIAS);
        let group = CommandGroup::new()
            .with_command(alias)
            .with_command(leaf("show"));
        assert_eq!(
            listing(&group, false),
            "    tool ls <path>\n    tool show <arg>\n        show short\n"
        );
    }

    #[test]
    fn test_hidden_commands_skipped() {
        let group = CommandGroup::new()
            .with_command(leaf("secret").with_flags(CommandFlags::HIDDEN))
            .with_command(leaf("shown"));
        assert_eq!(listing(&group, false), "    tool shown <arg>\n        shown short\n");
    }

    #[test]
    fn test_full_listing_blank_between_entries() {
        let group = CommandGroup::new()
            .with_command(leaf("one"))
            .with_command(nested("grp", &["two"]));
        let expected = concat!(
            "    tool one <arg>\n",
            "        one short\n",
            "\n",
            "        one long\n",
            "\n",
            "    -f                        force\n",
            "\n",
            "    tool grp-two <arg>\n",
            "        grp-two short\n",
            "\n",
            "        grp-two long\n",
            "\n",
            "    -f                        force\n",
        );
        assert_eq!(listing(&group, true), expected);
    }

    #[test]
    fn test_usage_command_group_frame() {
        let group = CommandGroup::new()
            .with_usage("tool dev <command>")
            .with_info("manage devices")
            .with_command(leaf("add"));
        let mut out = Vec::new();
        usage_command_group(&group, false, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "usage: tool dev <command>\n\n    tool add <arg>\n        add short\n\nmanage devices\n"
        );
    }

    #[test]
    fn test_help_command_group_full_flag() {
        let group = CommandGroup::new().with_command(leaf("add"));
        let mut compact = Vec::new();
        help_command_group(&group, &["--verbose"], &mut compact).unwrap();
        let mut full = Vec::new();
        help_command_group(&group, &["--full"], &mut full).unwrap();

        let compact = String::from_utf8(compact).unwrap();
        let full = String::from_utf8(full).unwrap();
        assert!(!compact.contains("add long"));
        assert!(full.contains("        add long\n"));
    }
}
