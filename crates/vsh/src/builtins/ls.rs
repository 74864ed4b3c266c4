//! Directory listing builtins - ls, rmdir

use super::{split_flags, Builtin, Context};
use crate::error::Result;
use crate::fs::{LsEntry, NodeKind};
use crate::interpreter::ExecResult;

/// The ls builtin - list directory contents.
///
/// Usage: ls [-l] [-a] [PATH...]
///
/// Options:
///   -l   Use long listing format
///   -a   Show hidden files (starting with .)
pub struct Ls;

impl Builtin for Ls {
    fn execute(&self, ctx: Context<'_>) -> Result<ExecResult> {
        let (flags, mut paths) = split_flags(ctx.args);
        let long = flags.contains(&'l');
        let all = flags.contains(&'a');

        if paths.is_empty() {
            paths.push("");
        }

        let mut output = String::new();
        let show_headers = paths.len() > 1;
        for (i, path) in paths.iter().copied().enumerate() {
            let entries = match ctx.fs.ls(path, all) {
                Ok(entries) => entries,
                Err(e) => {
                    return Ok(ExecResult::err(
                        format!("ls: cannot access '{path}': {e}\n"),
                        2,
                    ));
                }
            };
            if show_headers {
                if i > 0 {
                    output.push('\n');
                }
                output.push_str(&format!("{path}:\n"));
            }
            for entry in &entries {
                if long {
                    output.push_str(&format_long_entry(entry));
                } else {
                    output.push_str(&entry.name);
                    output.push('\n');
                }
            }
        }
        Ok(ExecResult::ok(output))
    }
}

/// One long-format line: type+permissions, link count, owner, group,
/// size, month, day, HH:MM, name. The owner/group/link columns are fixed:
/// there is exactly one cosmetic user in this filesystem.
fn format_long_entry(entry: &LsEntry) -> String {
    format!(
        "{}{} 1 user user {} {} {}\n",
        type_char(entry.kind),
        perm_string(entry.mode),
        entry.size,
        entry.modified.format("%b %e %H:%M"),
        entry.name
    )
}

fn type_char(kind: NodeKind) -> char {
    match kind {
        NodeKind::Directory => 'd',
        NodeKind::File => '-',
    }
}

fn perm_string(mode: u32) -> String {
    let mut perms = String::with_capacity(9);
    for shift in [6u32, 3, 0] {
        let bits = (mode >> shift) & 0o7;
        perms.push(if bits & 0o4 != 0 { 'r' } else { '-' });
        perms.push(if bits & 0o2 != 0 { 'w' } else { '-' });
        perms.push(if bits & 0o1 != 0 { 'x' } else { '-' });
    }
    perms
}

/// The rmdir builtin - remove empty directories.
///
/// Usage: rmdir DIRECTORY...
pub struct Rmdir;

impl Builtin for Rmdir {
    fn execute(&self, ctx: Context<'_>) -> Result<ExecResult> {
        let (_, dirs) = split_flags(ctx.args);
        if dirs.is_empty() {
            return Ok(ExecResult::err("rmdir: missing operand\n".to_string(), 1));
        }

        for dir in dirs {
            if let Err(e) = ctx.fs.rmdir(dir) {
                return Ok(ExecResult::err(
                    format!("rmdir: failed to remove '{dir}': {e}\n"),
                    1,
                ));
            }
        }
        Ok(ExecResult::ok(""))
    }
}
