//! Navigation builtins (cd, pwd)

use super::{Builtin, Context};
use crate::error::Result;
use crate::interpreter::ExecResult;

/// The cd builtin - change directory.
///
/// Usage: cd [PATH]
///
/// With no argument, changes to the home directory. `cd -` returns to the
/// previous working directory.
pub struct Cd;

impl Builtin for Cd {
    fn execute(&self, ctx: Context<'_>) -> Result<ExecResult> {
        if ctx.args.len() > 1 {
            return Ok(ExecResult::err("cd: too many arguments\n".to_string(), 1));
        }
        let target = ctx.args.first().map(String::as_str).unwrap_or("");
        match ctx.fs.cd(target) {
            Ok(()) => Ok(ExecResult::ok("")),
            Err(e) => Ok(ExecResult::err(format!("cd: {e}\n"), 1)),
        }
    }
}

/// The pwd builtin - print working directory.
pub struct Pwd;

impl Builtin for Pwd {
    fn execute(&self, ctx: Context<'_>) -> Result<ExecResult> {
        Ok(ExecResult::ok(format!("{}\n", ctx.fs.pwd())))
    }
}
