//! Built-in shell commands
//!
//! Each builtin parses its own flags, validates argument counts, calls one
//! core filesystem operation, and renders errors as `verb: message` stderr
//! lines. User mistakes come back as a failed [`ExecResult`], never as an
//! `Err`: the session always continues.

mod cat;
mod echo;
mod fileops;
mod ls;
mod navigation;

pub use cat::Cat;
pub use echo::Echo;
pub use fileops::{Cp, Mkdir, Mv, Rm, Touch};
pub use ls::{Ls, Rmdir};
pub use navigation::{Cd, Pwd};

use crate::error::Result;
use crate::fs::VirtualFs;
use crate::interpreter::ExecResult;

/// Execution context for builtin commands.
pub struct Context<'a> {
    /// Command arguments (not including the command name).
    pub args: &'a [String],
    /// The session's virtual filesystem.
    pub fs: &'a mut VirtualFs,
}

/// Trait for implementing builtin commands.
pub trait Builtin: Send + Sync {
    /// Execute the builtin command.
    ///
    /// Returns `Ok(ExecResult)` with stdout/stderr/exit code; `Err` is
    /// reserved for internal failures and never raised for bad user input.
    fn execute(&self, ctx: Context<'_>) -> Result<ExecResult>;
}

/// Split args into single-dash flag characters and positional operands.
/// Grouped flags (`-la`) come back as individual characters.
pub(crate) fn split_flags(args: &[String]) -> (Vec<char>, Vec<&str>) {
    let mut flags = Vec::new();
    let mut positional = Vec::new();
    for arg in args {
        if let Some(body) = arg.strip_prefix('-') {
            if !body.is_empty() && body != "-" && body.chars().all(|c| c.is_ascii_alphabetic()) {
                flags.extend(body.chars());
                continue;
            }
        }
        positional.push(arg.as_str());
    }
    (flags, positional)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn split_flags_groups_and_positionals() {
        let args = strings(&["-la", "docs", "-r"]);
        let (flags, positional) = split_flags(&args);
        assert_eq!(flags, vec!['l', 'a', 'r']);
        assert_eq!(positional, vec!["docs"]);
    }

    #[test]
    fn dash_alone_is_positional() {
        let args = strings(&["-"]);
        let (flags, positional) = split_flags(&args);
        assert!(flags.is_empty());
        assert_eq!(positional, vec!["-"]);
    }
}
