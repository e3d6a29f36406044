//! Pre-scan of command arguments for commands that take no options.

use thiserror::Error;
use tracing::debug;

use cmdhelp_core::CommandNode;

/// An option a command does not accept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BadOption {
    /// A whole unrecognized long option, such as `--frobnicate`.
    #[error("unrecognized option '{0}'")]
    Unrecognized(String),
    /// The first invalid character of a short option cluster.
    #[error("invalid option '{0}'")]
    Invalid(char),
}

/// Outcome of a pre-scan that did not end in positional arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("help requested")]
    HelpRequested,
    #[error(transparent)]
    UnknownOption(#[from] BadOption),
}

/// Returns the positional arguments of a command that accepts only
/// `--help`.
///
/// `--` ends option parsing. `--help`, or any abbreviation of it, is a
/// help request. Other options are rejected. Options of a command with no
/// usage description, `--help` included, are silently dropped.
///
/// # Examples
///
/// ```
/// use cmdhelp_core::{CommandNode, UsageText};
/// use cmdhelp_render::{ArgsError, BadOption, clean_args_no_options};
///
/// let node = CommandNode::leaf("sync", UsageText::new("btrfs filesystem sync <path>"));
/// assert_eq!(clean_args_no_options(&node, &["/mnt"]).unwrap(), vec!["/mnt"]);
/// assert_eq!(clean_args_no_options(&node, &["--he"]), Err(ArgsError::HelpRequested));
/// assert_eq!(
///     clean_args_no_options(&node, &["-q", "/mnt"]),
///     Err(ArgsError::UnknownOption(BadOption::Invalid('q')))
/// );
/// assert_eq!(clean_args_no_options(&node, &["--", "-q"]).unwrap(), vec!["-q"]);
/// ```
pub fn clean_args_no_options<'a, S: AsRef<str>>(
    node: &CommandNode,
    args: &'a [S],
) -> Result<Vec<&'a str>, ArgsError> {
    let mut positional = Vec::new();
    let mut args = args.iter().map(AsRef::<str>::as_ref);

    while let Some(arg) = args.next() {
        if arg == "--" {
            positional.extend(args.by_ref());
            break;
        }

        let err = if let Some(long) = arg.strip_prefix("--") {
            if "help".starts_with(long) {
                ArgsError::HelpRequested
            } else {
                BadOption::Unrecognized(arg.to_string()).into()
            }
        } else if let Some(first) = arg.strip_prefix('-').and_then(|short| short.chars().next()) {
            BadOption::Invalid(first).into()
        } else {
            positional.push(arg);
            continue;
        };

        if node.usage.is_none() {
            debug!(token = %node.token, option = arg, "Dropping option of command without usage");
            continue;
        }
        return Err(err);
    }

    Ok(positional)
}

/// Drops a leading `--` and returns the remaining arguments untouched.
pub fn clean_args_no_options_relaxed<S: AsRef<str>>(args: &[S]) -> &[S] {
    match args.split_first() {
        Some((first, rest)) if first.as_ref() == "--" => rest,
        _ => args,
    }
}
