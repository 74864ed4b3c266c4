//! File operation builtins - mkdir, touch, rm, cp, mv

use super::{split_flags, Builtin, Context};
use crate::error::Result;
use crate::interpreter::ExecResult;

/// The mkdir builtin - create directories.
///
/// Usage: mkdir [-p] DIRECTORY...
///
/// Options:
///   -p   Create parent directories as needed
pub struct Mkdir;

impl Builtin for Mkdir {
    fn execute(&self, ctx: Context<'_>) -> Result<ExecResult> {
        let (flags, dirs) = split_flags(ctx.args);
        let parents = flags.contains(&'p');

        if dirs.is_empty() {
            return Ok(ExecResult::err("mkdir: missing operand\n".to_string(), 1));
        }

        for dir in dirs {
            if let Err(e) = ctx.fs.mkdir(dir, parents) {
                return Ok(ExecResult::err(
                    format!("mkdir: cannot create directory '{dir}': {e}\n"),
                    1,
                ));
            }
        }
        Ok(ExecResult::ok(""))
    }
}

/// The touch builtin - create empty files or update timestamps.
///
/// Usage: touch FILE...
pub struct Touch;

impl Builtin for Touch {
    fn execute(&self, ctx: Context<'_>) -> Result<ExecResult> {
        let (_, files) = split_flags(ctx.args);
        if files.is_empty() {
            return Ok(ExecResult::err(
                "touch: missing file operand\n".to_string(),
                1,
            ));
        }

        for file in files {
            if let Err(e) = ctx.fs.touch(file) {
                return Ok(ExecResult::err(
                    format!("touch: cannot touch '{file}': {e}\n"),
                    1,
                ));
            }
        }
        Ok(ExecResult::ok(""))
    }
}

/// The rm builtin - remove files or directories.
///
/// Usage: rm [-r] FILE...
///
/// Options:
///   -r, -R   Remove directories and their contents recursively
pub struct Rm;

impl Builtin for Rm {
    fn execute(&self, ctx: Context<'_>) -> Result<ExecResult> {
        let (flags, files) = split_flags(ctx.args);
        let recursive = flags.contains(&'r') || flags.contains(&'R');

        if files.is_empty() {
            return Ok(ExecResult::err("rm: missing operand\n".to_string(), 1));
        }

        for file in files {
            if let Err(e) = ctx.fs.rm(file, recursive) {
                return Ok(ExecResult::err(
                    format!("rm: cannot remove '{file}': {e}\n"),
                    1,
                ));
            }
        }
        Ok(ExecResult::ok(""))
    }
}

/// The cp builtin - copy files and directories.
///
/// Usage: cp [-r] SOURCE... DEST
///
/// Options:
///   -r, -R   Copy directories recursively
pub struct Cp;

impl Builtin for Cp {
    fn execute(&self, ctx: Context<'_>) -> Result<ExecResult> {
        let (flags, files) = split_flags(ctx.args);
        let recursive = flags.contains(&'r') || flags.contains(&'R');

        let Some((&dest, sources)) = files.split_last() else {
            return Ok(ExecResult::err(
                "cp: missing file operand\n".to_string(),
                1,
            ));
        };
        if sources.is_empty() {
            return Ok(ExecResult::err(
                "cp: missing destination file operand\n".to_string(),
                1,
            ));
        }

        let dest_is_dir = ctx
            .fs
            .resolve(dest)
            .map(|id| ctx.fs.node(id).is_dir())
            .unwrap_or(false);
        if sources.len() > 1 && !dest_is_dir {
            return Ok(ExecResult::err(
                format!("cp: target '{dest}' is not a directory\n"),
                1,
            ));
        }

        for &source in sources {
            if let Err(e) = ctx.fs.cp(source, dest, recursive) {
                return Ok(ExecResult::err(
                    format!("cp: cannot copy '{source}': {e}\n"),
                    1,
                ));
            }
        }
        Ok(ExecResult::ok(""))
    }
}

/// The mv builtin - move (rename) files and directories.
///
/// Usage: mv SOURCE... DEST
pub struct Mv;

impl Builtin for Mv {
    fn execute(&self, ctx: Context<'_>) -> Result<ExecResult> {
        let (_, files) = split_flags(ctx.args);

        let Some((&dest, sources)) = files.split_last() else {
            return Ok(ExecResult::err(
                "mv: missing file operand\n".to_string(),
                1,
            ));
        };
        if sources.is_empty() {
            return Ok(ExecResult::err(
                "mv: missing destination file operand\n".to_string(),
                1,
            ));
        }

        let dest_is_dir = ctx
            .fs
            .resolve(dest)
            .map(|id| ctx.fs.node(id).is_dir())
            .unwrap_or(false);
        if sources.len() > 1 && !dest_is_dir {
            return Ok(ExecResult::err(
                format!("mv: target '{dest}' is not a directory\n"),
                1,
            ));
        }

        for &source in sources {
            if let Err(e) = ctx.fs.mv(source, dest) {
                return Ok(ExecResult::err(
                    format!("mv: cannot move '{source}': {e}\n"),
                    1,
                ));
            }
        }
        Ok(ExecResult::ok(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::VirtualFs;
    use pretty_assertions::assert_eq;

    fn run(builtin: &dyn Builtin, fs: &mut VirtualFs, args: &[&str]) -> ExecResult {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        builtin.execute(Context { args: &args, fs }).unwrap()
    }

    #[test]
    fn mkdir_simple() {
        let mut fs = VirtualFs::new();
        let result = run(&Mkdir, &mut fs, &["testdir"]);
        assert_eq!(result.exit_code, 0);
        assert!(fs.resolve("testdir").is_ok());
    }

    #[test]
    fn mkdir_missing_operand() {
        let mut fs = VirtualFs::new();
        let result = run(&Mkdir, &mut fs, &["-p"]);
        assert_eq!(result.stderr, "mkdir: missing operand\n");
    }

    #[test]
    fn mkdir_recursive() {
        let mut fs = VirtualFs::new();
        let result = run(&Mkdir, &mut fs, &["-p", "a/b/c"]);
        assert_eq!(result.exit_code, 0);
        assert!(fs.resolve("a/b/c").is_ok());
    }

    #[test]
    fn mkdir_existing_reports_file_exists() {
        let mut fs = VirtualFs::new();
        run(&Mkdir, &mut fs, &["d"]);
        let result = run(&Mkdir, &mut fs, &["d"]);
        assert_eq!(
            result.stderr,
            "mkdir: cannot create directory 'd': file exists: d\n"
        );
    }

    #[test]
    fn touch_creates_empty_file() {
        let mut fs = VirtualFs::new();
        let result = run(&Touch, &mut fs, &["newfile.txt"]);
        assert_eq!(result.exit_code, 0);
        assert_eq!(fs.cat("newfile.txt").unwrap(), b"");
    }

    #[test]
    fn rm_removes_file() {
        let mut fs = VirtualFs::new();
        fs.write(b"content", "testfile.txt", false).unwrap();
        let result = run(&Rm, &mut fs, &["testfile.txt"]);
        assert_eq!(result.exit_code, 0);
        assert!(fs.resolve("testfile.txt").is_err());
    }

    #[test]
    fn rm_directory_without_recursive_flag() {
        let mut fs = VirtualFs::new();
        fs.mkdir("d", false).unwrap();
        fs.touch("d/x").unwrap();
        let result = run(&Rm, &mut fs, &["d"]);
        assert_eq!(
            result.stderr,
            "rm: cannot remove 'd': directory not empty: d\n"
        );
        let result = run(&Rm, &mut fs, &["-r", "d"]);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn cp_copies_file() {
        let mut fs = VirtualFs::new();
        fs.write(b"content", "source.txt", false).unwrap();
        let result = run(&Cp, &mut fs, &["source.txt", "dest.txt"]);
        assert_eq!(result.exit_code, 0);
        assert_eq!(fs.cat("dest.txt").unwrap(), b"content");
    }

    #[test]
    fn cp_multiple_sources_need_directory_target() {
        let mut fs = VirtualFs::new();
        fs.touch("a").unwrap();
        fs.touch("b").unwrap();
        let result = run(&Cp, &mut fs, &["a", "b", "c"]);
        assert_eq!(result.stderr, "cp: target 'c' is not a directory\n");

        fs.mkdir("d", false).unwrap();
        let result = run(&Cp, &mut fs, &["a", "b", "d"]);
        assert_eq!(result.exit_code, 0);
        assert!(fs.resolve("d/a").is_ok());
        assert!(fs.resolve("d/b").is_ok());
    }

    #[test]
    fn cp_directory_without_recursive_flag() {
        let mut fs = VirtualFs::new();
        fs.mkdir("d", false).unwrap();
        let result = run(&Cp, &mut fs, &["d", "e"]);
        assert_eq!(
            result.stderr,
            "cp: cannot copy 'd': omitting directory 'd'\n"
        );
    }

    #[test]
    fn mv_renames_file() {
        let mut fs = VirtualFs::new();
        fs.write(b"content", "source.txt", false).unwrap();
        let result = run(&Mv, &mut fs, &["source.txt", "dest.txt"]);
        assert_eq!(result.exit_code, 0);
        assert!(fs.resolve("source.txt").is_err());
        assert_eq!(fs.cat("dest.txt").unwrap(), b"content");
    }

    #[test]
    fn mv_missing_destination() {
        let mut fs = VirtualFs::new();
        let result = run(&Mv, &mut fs, &["only"]);
        assert_eq!(result.stderr, "mv: missing destination file operand\n");
    }
}
