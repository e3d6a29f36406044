//! Rendering of a single command's usage description.
//!
//! A command renders in one of two styles: standalone (`usage: ...`,
//! sections separated by blank lines) or embedded in a group listing
//! (syntax indented, descriptions at the listing column). [`RenderFlags`]
//! select the style and how many sections are printed.

use std::io::{self, Write};
use std::ops::{BitOr, BitOrAssign};

use cmdhelp_core::{CommandFlags, CommandNode, UsageEntry, UsageText, supported_formats};
use tracing::warn;

use crate::layout::{
    DESC_PREFIX, DESC_WIDTH, LISTING_WIDTH, OPTION_MARGIN, OPTION_WIDTH, PREFIX_WIDTH,
};
use crate::wrap::{pad, wrap_text};

/// Sections and style of a rendered usage description.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderFlags(u8);

impl RenderFlags {
    /// The one-line short description.
    pub const SHORT: Self = Self(1 << 0);
    /// The long description.
    pub const LONG: Self = Self(1 << 1);
    /// The options section.
    pub const OPTIONS: Self = Self(1 << 2);
    /// Listing style instead of standalone.
    pub const LISTING: Self = Self(1 << 3);
    /// The synthesized `--format TYPE` line inside the options section.
    pub const FORMAT: Self = Self(1 << 4);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Flags for a command entry: aliases get the syntax only, `full` adds
    /// the long description and options.
    pub fn entry(full: bool, listing: bool, alias: bool) -> Self {
        let mut flags = Self::empty();
        if !alias {
            flags |= Self::SHORT;
        }
        if full {
            flags |= Self::LONG | Self::OPTIONS | Self::FORMAT;
        }
        if listing {
            flags |= Self::LISTING;
        }
        flags
    }
}

impl BitOr for RenderFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for RenderFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Outcome of rendering a usage description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    /// Everything requested was printed.
    Rendered,
    /// The command has no usage description; nothing was printed.
    NoUsage,
    /// A short description was requested but is missing; only the syntax
    /// was printed, without a line terminator.
    NoShortDescription,
}

/// Renders a usage description.
///
/// Sections are printed in order (syntax, short description, long
/// description, options) and rendering stops at the first one that is not
/// requested or not present. The syntax line is left unterminated when the
/// short description is not requested.
///
/// # Examples
///
/// ```
/// use cmdhelp_core::{CommandFlags, UsageText};
/// use cmdhelp_render::{RenderFlags, RenderStatus, render_usage};
///
/// let usage = UsageText::new("btrfs device scan [<device>...]").with_short("Scan devices");
/// let mut out = Vec::new();
/// let status = render_usage(Some(&usage), CommandFlags::empty(), RenderFlags::SHORT, &mut out).unwrap();
///
/// assert_eq!(status, RenderStatus::Rendered);
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "usage: btrfs device scan [<device>...]\n\n    Scan devices\n"
/// );
/// ```
pub fn render_usage(
    usage: Option<&UsageText>,
    command_flags: CommandFlags,
    flags: RenderFlags,
    out: &mut dyn Write,
) -> io::Result<RenderStatus> {
    let Some(usage) = usage else {
        return Ok(RenderStatus::NoUsage);
    };
    let listing = flags.contains(RenderFlags::LISTING);

    if listing {
        pad(out, PREFIX_WIDTH)?;
    } else {
        write!(out, "usage: ")?;
    }
    let continuation = if listing { PREFIX_WIDTH } else { LISTING_WIDTH };
    for (index, form) in usage.forms().enumerate() {
        if index > 0 {
            writeln!(out)?;
            pad(out, continuation)?;
        }
        write!(out, "{form}")?;
    }

    if !flags.contains(RenderFlags::SHORT) {
        return Ok(RenderStatus::Rendered);
    }
    let Some(short) = &usage.short else {
        return Ok(RenderStatus::NoShortDescription);
    };

    writeln!(out)?;
    let column = if listing {
        LISTING_WIDTH
    } else {
        writeln!(out)?;
        PREFIX_WIDTH
    };
    pad(out, column)?;
    writeln!(out, "{short}")?;

    if !flags.contains(RenderFlags::LONG) || (usage.long.is_empty() && usage.options.is_none()) {
        return Ok(RenderStatus::Rendered);
    }
    if !usage.long.is_empty() {
        writeln!(out)?;
    }
    for line in &usage.long {
        pad(out, column)?;
        writeln!(out, "{line}")?;
    }

    let Some(entries) = &usage.options else {
        return Ok(RenderStatus::Rendered);
    };
    if !flags.contains(RenderFlags::OPTIONS) {
        return Ok(RenderStatus::Rendered);
    }

    writeln!(out)?;
    for entry in entries {
        match entry {
            UsageEntry::Format => {
                if flags.contains(RenderFlags::FORMAT) {
                    write_format_line(command_flags, column, out)?;
                }
            }
            UsageEntry::Option { spec, description } => write_option(spec, description, out)?,
            UsageEntry::Text { text } => {
                pad(out, column)?;
                writeln!(out, "{text}")?;
            }
        }
    }

    Ok(RenderStatus::Rendered)
}

fn write_format_line(command_flags: CommandFlags, column: usize, out: &mut dyn Write) -> io::Result<()> {
    pad(out, column)?;
    write!(out, "{:<OPTION_WIDTH$}  where TYPE is: ", "--format TYPE")?;
    let names: Vec<&str> = supported_formats(command_flags).map(|f| f.name).collect();
    writeln!(out, "{}", names.join(", "))
}

fn write_option(spec: &str, description: &str, out: &mut dyn Write) -> io::Result<()> {
    pad(out, PREFIX_WIDTH)?;
    write!(out, "{spec}")?;

    // The description starts at DESC_PREFIX, at least one space after the spec.
    let spec_width = spec.chars().count();
    if spec_width + 1 > OPTION_WIDTH + OPTION_MARGIN {
        writeln!(out)?;
        pad(out, DESC_PREFIX)?;
    } else {
        pad(out, OPTION_WIDTH + OPTION_MARGIN - spec_width)?;
    }

    wrap_text(description, DESC_WIDTH, DESC_PREFIX, out)?;
    writeln!(out)
}

/// Renders a command and replaces a missing section with a placeholder
/// diagnostic naming the command.
///
/// The placeholders flag defects in the command table; rendering of the
/// surrounding help continues.
pub fn render_command(
    node: &CommandNode,
    flags: RenderFlags,
    out: &mut dyn Write,
) -> io::Result<RenderStatus> {
    let status = render_usage(node.usage.as_ref(), node.flags, flags, out)?;
    match status {
        RenderStatus::Rendered => {}
        RenderStatus::NoUsage => {
            warn!(token = %node.token, "Command has no usage description");
            writeln!(out, "No usage for '{}'", node.token)?;
        }
        RenderStatus::NoShortDescription => {
            warn!(token = %node.token, "Command has no short description");
            writeln!(out)?;
            writeln!(out, "No short description for '{}'", node.token)?;
        }
    }
    Ok(status)
}

/// Prints standalone usage of one command: syntax and short description,
/// plus long description and options when `full` is set.
///
/// # Examples
///
/// ```
/// use cmdhelp_core::{CommandNode, UsageText};
/// use cmdhelp_render::usage_command;
///
/// let node = CommandNode::leaf("sync", UsageText::new("btrfs filesystem sync <path>").with_short("Force a sync"));
/// let mut out = Vec::new();
/// usage_command(&node, false, &mut out).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "usage: btrfs filesystem sync <path>\n\n    Force a sync\n\n"
/// );
/// ```
pub fn usage_command(node: &CommandNode, full: bool, out: &mut dyn Write) -> io::Result<RenderStatus> {
    let status = render_command(node, RenderFlags::entry(full, false, false), out)?;
    if status == RenderStatus::Rendered {
        writeln!(out)?;
    }
    Ok(status)
}

#[cfg(test)]
mod tests {
    use cmdhelp_core::{INSERT_FORMAT, optline};

    use super::*;

    fn rendered(usage: &UsageText, command_flags: CommandFlags, flags: RenderFlags) -> String {
        let mut out = Vec::new();
        let status = render_usage(Some(usage), command_flags, flags, &mut out).unwrap();
        assert_eq!(status, RenderStatus::Rendered);
        String::from_utf8(out).unwrap()
    }

    fn full() -> RenderFlags {
        RenderFlags::entry(true, false, false)
    }

    fn subvolume_create() -> UsageText {
        UsageText::parse(&[
            "btrfs subvolume create [options] <dest> [<dest>...]",
            "Create a subvolume",
            "Create a subvolume <name> in <dest>.",
            "",
            optline!("-i <qgroupid>", "add the newly created subvolume to a qgroup"),
            optline!("-p|--parents", "create any missing parent directories"),
            "",
            "Global options:",
        ])
        .unwrap()
    }

    #[test]
    fn test_syntax_only_leaves_line_open() {
        let usage = UsageText::new("btrfs version");
        assert_eq!(
            rendered(&usage, CommandFlags::empty(), RenderFlags::empty()),
            "usage: btrfs version"
        );
    }

    #[test]
    fn test_short_unset_ignores_missing_sections() {
        // Nothing past the syntax is required when SHORT is not requested.
        let usage = UsageText::new("btrfs x");
        let mut out = Vec::new();
        let status =
            render_usage(Some(&usage), CommandFlags::empty(), RenderFlags::LISTING, &mut out).unwrap();
        assert_eq!(status, RenderStatus::Rendered);
        assert_eq!(String::from_utf8(out).unwrap(), "    btrfs x");
    }

    #[test]
    fn test_missing_usage_and_short() {
        let mut out = Vec::new();
        let status =
            render_usage(None, CommandFlags::empty(), RenderFlags::SHORT, &mut out).unwrap();
        assert_eq!(status, RenderStatus::NoUsage);
        assert!(out.is_empty());

        let usage = UsageText::new("btrfs x");
        let status =
            render_usage(Some(&usage), CommandFlags::empty(), RenderFlags::SHORT, &mut out).unwrap();
        assert_eq!(status, RenderStatus::NoShortDescription);
        assert_eq!(String::from_utf8(out).unwrap(), "usage: btrfs x");
    }

    #[test]
    fn test_long_flag_has_no_effect_without_long_lines() {
        let usage = UsageText::new("btrfs filesystem sync <path>").with_short("Force a sync");
        assert_eq!(
            rendered(&usage, CommandFlags::empty(), RenderFlags::SHORT),
            rendered(&usage, CommandFlags::empty(), RenderFlags::SHORT | RenderFlags::LONG)
        );
    }

    #[test]
    fn test_alternate_forms_are_indented() {
        let usage = UsageText::new("btrfs qgroup show <path>\nbtrfs qgroup show -r <path>")
            .with_short("List qgroups");
        assert_eq!(
            rendered(&usage, CommandFlags::empty(), RenderFlags::SHORT),
            "usage: btrfs qgroup show <path>\n        btrfs qgroup show -r <path>\n\n    List qgroups\n"
        );
        assert_eq!(
            rendered(
                &usage,
                CommandFlags::empty(),
                RenderFlags::SHORT | RenderFlags::LISTING
            ),
            "    btrfs qgroup show <path>\n    btrfs qgroup show -r <path>\n        List qgroups\n"
        );
    }

    #[test]
    fn test_full_standalone_layout() {
        let expected = concat!(
            "usage: btrfs subvolume create [options] <dest> [<dest>...]\n",
            "\n",
            "    Create a subvolume\n",
            "\n",
            "    Create a subvolume <name> in <dest>.\n",
            "\n",
            "    -i <qgroupid>             add the newly created subvolume to a qgroup\n",
            "    -p|--parents              create any missing parent directories\n",
            "    \n",
            "    Global options:\n",
        );
        assert_eq!(rendered(&subvolume_create(), CommandFlags::empty(), full()), expected);
    }

    #[test]
    fn test_options_need_options_flag() {
        let flags = RenderFlags::SHORT | RenderFlags::LONG;
        assert_eq!(
            rendered(&subvolume_create(), CommandFlags::empty(), flags),
            "usage: btrfs subvolume create [options] <dest> [<dest>...]\n\n    Create a subvolume\n\n    Create a subvolume <name> in <dest>.\n"
        );
    }

    #[test]
    fn test_listing_full_uses_listing_column() {
        let usage = UsageText::parse(&["btrfs device stats <path>", "Show device IO error statistics", "", "note"]).unwrap();
        let flags = RenderFlags::entry(true, true, false);
        assert_eq!(
            rendered(&usage, CommandFlags::empty(), flags),
            "    btrfs device stats <path>\n        Show device IO error statistics\n\n        note\n"
        );
    }

    #[test]
    fn test_format_line_lists_supported_formats() {
        let usage = UsageText::parse(&["btrfs device stats <path>", "Show stats", "", INSERT_FORMAT]).unwrap();
        let text_only = rendered(&usage, CommandFlags::empty(), full());
        assert!(text_only.ends_with(
            "\n    --format TYPE             where TYPE is: text\n"
        ));

        let with_json = rendered(&usage, CommandFlags::FORMAT_JSON, full());
        assert!(with_json.ends_with("where TYPE is: text, json\n"));

        let without_format = rendered(
            &usage,
            CommandFlags::FORMAT_JSON,
            RenderFlags::SHORT | RenderFlags::LONG | RenderFlags::OPTIONS,
        );
        assert!(!without_format.contains("--format"));
    }

    #[test]
    fn test_long_option_spec_breaks_line() {
        let spec = "--really-long-option <value>"; // 28 characters
        let usage = UsageText::new("cmd")
            .with_short("s")
            .with_entry(UsageEntry::option(spec, "does a thing"));
        let out = rendered(&usage, CommandFlags::empty(), full());
        let expected = format!("    {spec}\n{:30}does a thing\n", "");
        assert!(out.ends_with(&expected), "{out:?}");
    }

    #[test]
    fn test_option_spec_at_width_limit_keeps_one_space() {
        let spec = "a".repeat(25);
        let usage = UsageText::new("cmd")
            .with_short("s")
            .with_entry(UsageEntry::option(spec.clone(), "desc"));
        let out = rendered(&usage, CommandFlags::empty(), full());
        assert!(out.ends_with(&format!("    {spec} desc\n")), "{out:?}");
    }

    #[test]
    fn test_option_description_wraps_at_description_column() {
        let description =
            "one two three four five six seven eight nine ten eleven twelve thirteen fourteen";
        let usage = UsageText::new("cmd")
            .with_short("s")
            .with_entry(UsageEntry::option("-x", description));
        let out = rendered(&usage, CommandFlags::empty(), full());
        let option_lines: Vec<&str> = out.lines().skip_while(|l| !l.starts_with("    -x")).collect();
        assert_eq!(option_lines.len(), 2);
        assert!(option_lines[1].starts_with(&" ".repeat(DESC_PREFIX)));
        assert!(!option_lines[1][DESC_PREFIX..].starts_with(' '));
    }

    #[test]
    fn test_render_command_placeholders() {
        let lines: [&str; 0] = [];
        let ghost = CommandNode::from_lines("ghost", &lines).unwrap();
        let mut out = Vec::new();
        let status = render_command(&ghost, RenderFlags::SHORT, &mut out).unwrap();
        assert_eq!(status, RenderStatus::NoUsage);
        assert_eq!(String::from_utf8(out).unwrap(), "No usage for 'ghost'\n");

        let terse = CommandNode::leaf("terse", UsageText::new("btrfs terse"));
        let mut out = Vec::new();
        let status = usage_command(&terse, false, &mut out).unwrap();
        assert_eq!(status, RenderStatus::NoShortDescription);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "usage: btrfs terse\nNo short description for 'terse'\n"
        );
    }

    #[test]
    fn test_entry_flags() {
        let alias = RenderFlags::entry(false, true, true);
        assert!(!alias.contains(RenderFlags::SHORT));
        assert!(alias.contains(RenderFlags::LISTING));

        let full = RenderFlags::entry(true, false, false);
        assert!(full.contains(RenderFlags::SHORT | RenderFlags::LONG | RenderFlags::OPTIONS | RenderFlags::FORMAT));
        assert!(!full.contains(RenderFlags::LISTING));
    }
}
