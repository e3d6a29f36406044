//! Per-dispatch help context.

use thiserror::Error;

/// Argument count violations, rendered with the program name prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgcError {
    #[error("{program}: exactly {expected} argument{} expected, {given} given", plural(.expected))]
    Exact {
        program: String,
        expected: usize,
        given: usize,
    },
    #[error("{program}: not enough arguments: {given} but at least {expected} expected")]
    TooFew {
        program: String,
        expected: usize,
        given: usize,
    },
    #[error("{program}: too many arguments: {given} but at most {expected} expected")]
    TooMany {
        program: String,
        expected: usize,
        given: usize,
    },
}

fn plural(n: &usize) -> &'static str {
    if *n == 1 { "" } else { "s" }
}

/// Name of the command being dispatched, such as `btrfs subvolume`.
///
/// Each dispatch level derives its own context from its parent's with
/// [`HelpContext::descend`]; a context is never modified after creation.
///
/// # Examples
///
/// ```
/// use cmdhelp_render::HelpContext;
///
/// let root = HelpContext::new("btrfs");
/// let sub = root.descend("subvolume");
/// assert_eq!(sub.program(), "btrfs subvolume");
/// assert_eq!(root.program(), "btrfs");
///
/// assert!(sub.check_argc_exact(1, 1).is_ok());
/// assert_eq!(
///     sub.check_argc_max(3, 2).unwrap_err().to_string(),
///     "btrfs subvolume: too many arguments: 3 but at most 2 expected"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpContext {
    program: String,
}

impl HelpContext {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Context for a subcommand of this one.
    pub fn descend(&self, token: &str) -> Self {
        Self::new(format!("{} {token}", self.program))
    }

    pub fn check_argc_exact(&self, given: usize, expected: usize) -> Result<(), ArgcError> {
        if given == expected {
            return Ok(());
        }
        Err(ArgcError::Exact {
            program: self.program.clone(),
            expected,
            given,
        })
    }

    pub fn check_argc_min(&self, given: usize, expected: usize) -> Result<(), ArgcError> {
        if given >= expected {
            return Ok(());
        }
        Err(ArgcError::TooFew {
            program: self.program.clone(),
            expected,
            given,
        })
    }

    pub fn check_argc_max(&self, given: usize, expected: usize) -> Result<(), ArgcError> {
        if given <= expected {
            return Ok(());
        }
        Err(ArgcError::TooMany {
            program: self.program.clone(),
            expected,
            given,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_argc_exact() {
        let ctx = HelpContext::new("btrfs device add");
        assert!(ctx.check_argc_exact(3, 3).is_ok());

        let err = ctx.check_argc_exact(2, 3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "btrfs device add: exactly 3 arguments expected, 2 given"
        );
    }

    #[test]
    fn test_check_argc_exact_singular() {
        let err = HelpContext::new("tool").check_argc_exact(0, 1).unwrap_err();
        assert_eq!(err.to_string(), "tool: exactly 1 argument expected, 0 given");
    }

    #[test]
    fn test_check_argc_exact_zero_is_plural() {
        let err = HelpContext::new("tool").check_argc_exact(1, 0).unwrap_err();
        assert_eq!(err.to_string(), "tool: exactly 0 arguments expected, 1 given");
    }

    #[test]
    fn test_check_argc_bounds() {
        let ctx = HelpContext::new("tool");
        assert!(ctx.check_argc_min(2, 2).is_ok());
        assert!(ctx.check_argc_max(2, 2).is_ok());
        assert_eq!(
            ctx.check_argc_min(1, 2).unwrap_err().to_string(),
            "tool: not enough arguments: 1 but at least 2 expected"
        );
        assert!(matches!(
            ctx.check_argc_max(5, 4),
            Err(ArgcError::TooMany { given: 5, expected: 4, .. })
        ));
    }

    #[test]
    fn test_descend_does_not_touch_parent() {
        let root = HelpContext::new("btrfs");
        let leaf = root.descend("filesystem").descend("show");
        assert_eq!(leaf.program(), "btrfs filesystem show");
        assert_eq!(root.program(), "btrfs");
    }
}
