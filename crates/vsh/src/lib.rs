//! vsh - shell-style command interpreter over an in-memory virtual
//! filesystem.
//!
//! The whole tree lives in process memory: nothing is ever read from or
//! written to disk, and the session's state is discarded on drop.
//!
//! # Example
//!
//! ```rust
//! use vsh::Shell;
//!
//! let mut shell = Shell::new();
//! shell.exec("mkdir docs").unwrap();
//! shell.exec("cd docs").unwrap();
//! let result = shell.exec("pwd").unwrap();
//! assert_eq!(result.stdout, "/home/user/docs\n");
//! assert_eq!(result.exit_code, 0);
//! ```

mod builtins;
mod editor;
mod error;
mod fs;
mod interpreter;
mod parser;

pub use editor::{Editor, EditorOutcome};
pub use error::{Error, Result};
pub use fs::{Clobber, LsEntry, MkdirParents, Node, NodeId, NodeKind, Policy, VirtualFs, HOME_PATH};
pub use interpreter::ExecResult;

use interpreter::Interpreter;

/// Main entry point for vsh.
///
/// One `Shell` is one session: a fresh tree with the `/home/user`
/// scaffold, a working-directory cursor, and the builtin registry.
pub struct Shell {
    interpreter: Interpreter,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    /// Create a new Shell with default settings.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a ShellBuilder for customized configuration.
    pub fn builder() -> ShellBuilder {
        ShellBuilder::default()
    }

    /// Execute one command line and return the result.
    pub fn exec(&mut self, line: &str) -> Result<ExecResult> {
        self.interpreter.exec_line(line)
    }

    /// Absolute path of the current directory (for prompts).
    pub fn cwd(&self) -> String {
        self.interpreter.fs().pwd()
    }

    /// Borrow the underlying filesystem.
    pub fn fs(&self) -> &VirtualFs {
        self.interpreter.fs()
    }

    /// Mutably borrow the underlying filesystem (the editor needs this).
    pub fn fs_mut(&mut self) -> &mut VirtualFs {
        self.interpreter.fs_mut()
    }
}

/// Builder for customized Shell configuration.
#[derive(Default)]
pub struct ShellBuilder {
    policy: Policy,
    cwd: Option<String>,
}

impl ShellBuilder {
    /// Set the edge-case policy (mkdir -p on existing dirs, cp/mv clobber).
    pub fn policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the starting directory. Stays at `/home/user` when the path
    /// does not name an existing directory.
    pub fn cwd(mut self, cwd: impl Into<String>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Build the Shell instance.
    pub fn build(self) -> Shell {
        let mut fs = VirtualFs::with_policy(self.policy);
        if let Some(cwd) = self.cwd {
            let _ = fs.cd(&cwd);
        }
        Shell {
            interpreter: Interpreter::new(fs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fresh_session_pwd() {
        let mut shell = Shell::new();
        let result = shell.exec("pwd").unwrap();
        assert_eq!(result.stdout, "/home/user\n");
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn echo_prints() {
        let mut shell = Shell::new();
        let result = shell.exec("echo hello world").unwrap();
        assert_eq!(result.stdout, "hello world\n");
    }

    #[test]
    fn write_and_read_back() {
        let mut shell = Shell::new();
        shell.exec("echo data > /tmp.txt").unwrap();
        let result = shell.exec("cat /tmp.txt").unwrap();
        assert_eq!(result.stdout, "data\n");
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let mut shell = Shell::new();
        let result = shell.exec("cat ghost").unwrap();
        assert_eq!(result.exit_code, 1);
        let result = shell.exec("pwd").unwrap();
        assert!(result.is_success());
    }

    #[test]
    fn builder_sets_starting_directory() {
        let mut shell = Shell::builder().cwd("/home").build();
        assert_eq!(shell.exec("pwd").unwrap().stdout, "/home\n");
    }

    #[test]
    fn builder_invalid_cwd_falls_back_to_home() {
        let mut shell = Shell::builder().cwd("/nope").build();
        assert_eq!(shell.exec("pwd").unwrap().stdout, "/home/user\n");
    }

    #[test]
    fn quoted_arguments_keep_spaces() {
        let mut shell = Shell::new();
        shell.exec(r#"echo "Hello World" > greeting.txt"#).unwrap();
        let result = shell.exec("cat greeting.txt").unwrap();
        assert_eq!(result.stdout, "Hello World\n");
    }
}
