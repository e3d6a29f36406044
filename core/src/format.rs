//! Output format registry.

use crate::CommandFlags;

/// Name of an output format a command may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDescriptor {
    /// Capability bit in [`CommandFlags`].
    pub value: u32,
    /// Display name used in help text and `--format` arguments.
    pub name: &'static str,
}

/// Known output formats. The first entry is supported by every command.
pub static OUTPUT_FORMATS: [FormatDescriptor; 2] = [
    FormatDescriptor {
        value: CommandFlags::FORMAT_TEXT.bits(),
        name: "text",
    },
    FormatDescriptor {
        value: CommandFlags::FORMAT_JSON.bits(),
        name: "json",
    },
];

/// Returns the display name of the format with the given bit, or
/// `"UNKNOWN"`.
///
/// # Examples
///
/// ```
/// use cmdhelp_core::{output_format_name, CommandFlags};
///
/// assert_eq!(output_format_name(CommandFlags::FORMAT_JSON.bits()), "json");
/// assert_eq!(output_format_name(999), "UNKNOWN");
/// ```
pub fn output_format_name(value: u32) -> &'static str {
    OUTPUT_FORMATS
        .iter()
        .find(|format| format.value == value)
        .map_or("UNKNOWN", |format| format.name)
}

/// Formats a command supports: the baseline plus every other format whose
/// bit is set in `flags`.
pub fn supported_formats(flags: CommandFlags) -> impl Iterator<Item = &'static FormatDescriptor> {
    let (baseline, rest) = OUTPUT_FORMATS.split_at(1);
    baseline.iter().chain(
        rest.iter()
            .filter(move |format| flags.bits() & format.value != 0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names() {
        assert_eq!(output_format_name(CommandFlags::FORMAT_TEXT.bits()), "text");
        assert_eq!(output_format_name(CommandFlags::FORMAT_JSON.bits()), "json");
        assert_eq!(output_format_name(999), "UNKNOWN");
        assert_eq!(output_format_name(0), "UNKNOWN");
    }

    #[test]
    fn test_baseline_always_supported() {
        let names: Vec<_> = supported_formats(CommandFlags::empty())
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["text"]);

        let names: Vec<_> = supported_formats(CommandFlags::FORMAT_JSON)
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["text", "json"]);
    }
}
