//! cat builtin command

use super::{split_flags, Builtin, Context};
use crate::error::Result;
use crate::interpreter::ExecResult;

/// The cat builtin - print file contents.
///
/// Usage: cat FILE...
///
/// Multiple files are concatenated in argument order. Content is shown
/// verbatim: no trailing-newline normalization happens here.
pub struct Cat;

impl Builtin for Cat {
    fn execute(&self, ctx: Context<'_>) -> Result<ExecResult> {
        let (_, files) = split_flags(ctx.args);
        if files.is_empty() {
            return Ok(ExecResult::err("cat: missing operand\n".to_string(), 1));
        }

        let mut output = String::new();
        for file in files {
            match ctx.fs.cat(file) {
                Ok(content) => output.push_str(&String::from_utf8_lossy(&content)),
                Err(e) => {
                    return Ok(ExecResult::err(format!("cat: {file}: {e}\n"), 1));
                }
            }
        }
        Ok(ExecResult::ok(output))
    }
}
