//! echo builtin command
//!
//! `echo` is also the write path into the filesystem: a `>` or `>>`
//! operand redirects the text (with its trailing newline) into a file
//! instead of stdout. That single form is the only redirection this shell
//! has; there are no pipes or redirection chains.

use super::{Builtin, Context};
use crate::error::Result;
use crate::interpreter::ExecResult;

/// The echo builtin - print text, or write it to a file.
///
/// Usage: echo [TEXT...]
///        echo [TEXT...] > FILE
///        echo [TEXT...] >> FILE
pub struct Echo;

impl Builtin for Echo {
    fn execute(&self, ctx: Context<'_>) -> Result<ExecResult> {
        let marker = ctx
            .args
            .iter()
            .position(|arg| arg == ">" || arg == ">>");

        let Some(idx) = marker else {
            return Ok(ExecResult::ok(format!("{}\n", ctx.args.join(" "))));
        };

        let append = ctx.args[idx] == ">>";
        let targets = &ctx.args[idx + 1..];
        let path = match targets {
            [path] => path.as_str(),
            [] => {
                return Ok(ExecResult::err("echo: missing filename\n".to_string(), 1));
            }
            _ => {
                return Ok(ExecResult::err(
                    "echo: too many arguments\n".to_string(),
                    1,
                ));
            }
        };

        let mut text = ctx.args[..idx].join(" ");
        text.push('\n');
        match ctx.fs.write(text.as_bytes(), path, append) {
            Ok(()) => Ok(ExecResult::ok("")),
            Err(e) => Ok(ExecResult::err(format!("echo: {path}: {e}\n"), 1)),
        }
    }
}
