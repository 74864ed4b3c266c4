//! Command dispatch.
//!
//! The interpreter owns the virtual filesystem and a name -> builtin
//! registry. It parses a line, hands the arguments to the matching
//! builtin, and returns the structured result; it is the only place that
//! turns core errors into user-visible text.

use std::collections::HashMap;

use tracing::debug;

use crate::builtins::{self, Builtin, Context};
use crate::error::{Error, Result};
use crate::fs::VirtualFs;
use crate::parser;

/// Result of executing one command line.
#[derive(Debug, Clone, Default)]
pub struct ExecResult {
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
    /// Exit code
    pub exit_code: i32,
}

impl ExecResult {
    /// Create a successful result with the given stdout.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            exit_code: 0,
        }
    }

    /// Create a failed result with the given stderr.
    pub fn err(stderr: impl Into<String>, exit_code: i32) -> Self {
        Self {
            stdout: String::new(),
            stderr: stderr.into(),
            exit_code,
        }
    }

    /// Check if the result indicates success.
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

pub struct Interpreter {
    fs: VirtualFs,
    builtins: HashMap<&'static str, Box<dyn Builtin>>,
}

impl Interpreter {
    pub fn new(fs: VirtualFs) -> Self {
        let mut builtins: HashMap<&'static str, Box<dyn Builtin>> = HashMap::new();
        builtins.insert("pwd", Box::new(builtins::Pwd));
        builtins.insert("cd", Box::new(builtins::Cd));
        builtins.insert("ls", Box::new(builtins::Ls));
        builtins.insert("mkdir", Box::new(builtins::Mkdir));
        builtins.insert("touch", Box::new(builtins::Touch));
        builtins.insert("rm", Box::new(builtins::Rm));
        builtins.insert("rmdir", Box::new(builtins::Rmdir));
        builtins.insert("cp", Box::new(builtins::Cp));
        builtins.insert("mv", Box::new(builtins::Mv));
        builtins.insert("cat", Box::new(builtins::Cat));
        builtins.insert("echo", Box::new(builtins::Echo));
        Self { fs, builtins }
    }

    /// Execute one command line. Blank lines succeed with empty output.
    pub fn exec_line(&mut self, line: &str) -> Result<ExecResult> {
        let Some(command) = parser::parse_line(line) else {
            return Ok(ExecResult::ok(""));
        };
        debug!(command = %command.name, argc = command.args.len(), "dispatch");
        match self.builtins.get(command.name.as_str()) {
            Some(builtin) => builtin.execute(Context {
                args: &command.args,
                fs: &mut self.fs,
            }),
            None => {
                let err = Error::CommandNotFound(command.name);
                Ok(ExecResult::err(format!("vsh: {err}\n"), 127))
            }
        }
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    pub fn fs_mut(&mut self) -> &mut VirtualFs {
        &mut self.fs
    }
}
