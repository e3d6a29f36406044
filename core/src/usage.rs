//! Usage-description model.
//!
//! A command's help text is authored as an ordered list of lines whose
//! meaning depends on their position:
//!
//! 1. the invocation syntax (alternate forms separated by `\n`),
//! 2. an optional one-line short description,
//! 3. an optional long description, terminated by an empty line,
//! 4. an optional options section following that empty line, made of
//!    option entries, plain text lines and the format-insertion sentinel.
//!
//! Option entries start with [`OPTION_MARKER`] and carry
//! [`DESCRIPTION_MARKER`] between the option spec and its description.
//! [`UsageText::parse`] decodes the raw lines once into a [`UsageText`] so
//! renderers never look at marker characters.
//!
//! # Examples
//!
//! ```
//! use cmdhelp_core::{optline, UsageEntry, UsageText, INSERT_FORMAT};
//!
//! let usage = UsageText::parse(&[
//!     "btrfs subvolume create [options] <dest>",
//!     "Create a subvolume",
//!     "",
//!     optline!("-p|--parents", "create any missing parent directories"),
//!     INSERT_FORMAT,
//! ])
//! .unwrap();
//!
//! assert_eq!(usage.short.as_deref(), Some("Create a subvolume"));
//! assert!(usage.long.is_empty());
//! let options = usage.options.unwrap();
//! assert!(matches!(&options[0], UsageEntry::Option { spec, .. } if spec == "-p|--parents"));
//! assert_eq!(options[1], UsageEntry::Format);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Leading character of an option entry line.
pub const OPTION_MARKER: char = '\x1f';

/// Separator between an option spec and its description.
pub const DESCRIPTION_MARKER: char = '\x1e';

/// Sentinel line replaced by the list of supported output formats.
pub const INSERT_FORMAT: &str = "\x1fformat";

/// Builds a raw option entry line from a spec and a description.
///
/// ```
/// use cmdhelp_core::optline;
///
/// assert_eq!(optline!("-v", "be verbose"), "\x1f-v\x1ebe verbose");
/// ```
#[macro_export]
macro_rules! optline {
    ($spec:expr, $text:expr) => {
        concat!("\x1f", $spec, "\x1e", $text)
    };
}

/// Errors found while decoding raw usage lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// No lines at all; a usage description needs at least a syntax line.
    #[error("usage description has no syntax line")]
    Empty,
    /// An option entry has no description separator.
    #[error("option entry without description marker: {0:?}")]
    MissingDescriptionMarker(String),
}

/// One line of the options section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UsageEntry {
    /// An option with its spec (e.g. `-f|--force`) and description.
    Option { spec: String, description: String },
    /// Placeholder for the `--format TYPE` line.
    Format,
    /// Free text printed verbatim at the section column.
    Text { text: String },
}

impl UsageEntry {
    /// Creates an option entry.
    pub fn option(spec: impl Into<String>, description: impl Into<String>) -> Self {
        Self::Option {
            spec: spec.into(),
            description: description.into(),
        }
    }

    /// Creates a plain text entry.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    fn decode(line: &str) -> Result<Self, UsageError> {
        if line == INSERT_FORMAT {
            return Ok(Self::Format);
        }
        let Some(body) = line.strip_prefix(OPTION_MARKER) else {
            return Ok(Self::text(line));
        };
        match body.split_once(DESCRIPTION_MARKER) {
            Some((spec, description)) => Ok(Self::option(spec, description)),
            None => Err(UsageError::MissingDescriptionMarker(line.to_string())),
        }
    }
}

/// Decoded usage description of a single command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageText {
    /// Invocation syntax; alternate forms are separated by `\n`.
    pub syntax: String,
    /// One-line summary, mandatory for anything but aliases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,
    /// Long description lines.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub long: Vec<String>,
    /// Options section; `Some` even when empty if the separator was present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<UsageEntry>>,
}

impl UsageText {
    /// Creates a usage description with only the syntax line.
    pub fn new(syntax: impl Into<String>) -> Self {
        Self {
            syntax: syntax.into(),
            ..Default::default()
        }
    }

    /// Sets the short description.
    pub fn with_short(mut self, short: impl Into<String>) -> Self {
        self.short = Some(short.into());
        self
    }

    /// Appends a long description line.
    pub fn with_long(mut self, line: impl Into<String>) -> Self {
        self.long.push(line.into());
        self
    }

    /// Appends an options-section entry, opening the section if needed.
    pub fn with_entry(mut self, entry: UsageEntry) -> Self {
        self.options.get_or_insert_with(Vec::new).push(entry);
        self
    }

    /// Decodes raw positional usage lines.
    ///
    /// The second line is the short description; subsequent non-empty lines
    /// form the long description up to the first empty line, and everything
    /// after that empty line belongs to the options section.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::Empty`] for an empty slice and
    /// [`UsageError::MissingDescriptionMarker`] for a malformed option entry.
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Self, UsageError> {
        let mut lines = lines.iter().map(AsRef::<str>::as_ref);
        let syntax = lines.next().ok_or(UsageError::Empty)?;
        let mut usage = Self::new(syntax);

        let Some(short) = lines.next() else {
            return Ok(usage);
        };
        usage.short = Some(short.to_string());

        let mut separated = false;
        for line in lines.by_ref() {
            if line.is_empty() {
                separated = true;
                break;
            }
            usage.long.push(line.to_string());
        }
        if separated {
            let entries = lines
                .map(UsageEntry::decode)
                .collect::<Result<Vec<_>, _>>()?;
            usage.options = Some(entries);
        }

        Ok(usage)
    }

    /// Alternate invocation forms of the syntax line.
    pub fn forms(&self) -> impl Iterator<Item = &str> {
        self.syntax.split('\n')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_syntax_only() {
        let usage = UsageText::parse(&["btrfs device scan"]).unwrap();
        assert_eq!(usage.syntax, "btrfs device scan");
        assert!(usage.short.is_none());
        assert!(usage.options.is_none());
    }

    #[test]
    fn test_parse_rejects_empty() {
        let lines: [&str; 0] = [];
        assert_eq!(UsageText::parse(&lines), Err(UsageError::Empty));
    }

    #[test]
    fn test_parse_long_description_stops_at_sentinel() {
        let usage = UsageText::parse(&[
            "btrfs balance start <path>",
            "Balance chunks across the devices",
            "Balance and/or convert chunks of the filesystem.",
            "This may take a while.",
            "",
            "plain note",
        ])
        .unwrap();

        assert_eq!(usage.long.len(), 2);
        assert_eq!(usage.options, Some(vec![UsageEntry::text("plain note")]));
    }

    #[test]
    fn test_parse_long_without_options() {
        let usage = UsageText::parse(&["cmd", "short", "long one"]).unwrap();
        assert_eq!(usage.long, vec!["long one".to_string()]);
        assert!(usage.options.is_none());
    }

    #[test]
    fn test_parse_empty_options_section() {
        let usage = UsageText::parse(&["cmd", "short", ""]).unwrap();
        assert_eq!(usage.options, Some(Vec::new()));
    }

    #[test]
    fn test_parse_option_entry_splits_at_marker() {
        let usage = UsageText::parse(&[
            "cmd",
            "short",
            "",
            optline!("-s <size>", "size in bytes"),
            INSERT_FORMAT,
        ])
        .unwrap();
        assert_eq!(
            usage.options.unwrap(),
            vec![
                UsageEntry::option("-s <size>", "size in bytes"),
                UsageEntry::Format
            ]
        );
    }

    #[test]
    fn test_parse_option_entry_without_marker_fails() {
        let err = UsageText::parse(&["cmd", "short", "", "\x1f-x no marker"]).unwrap_err();
        assert!(matches!(err, UsageError::MissingDescriptionMarker(_)));
    }

    #[test]
    fn test_forms_split_on_newline() {
        let usage = UsageText::new("cmd a <x>\ncmd a -l");
        assert_eq!(usage.forms().collect::<Vec<_>>(), vec!["cmd a <x>", "cmd a -l"]);
    }
}
