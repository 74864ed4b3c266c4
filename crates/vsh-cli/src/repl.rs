//! Interactive REPL loop.
//!
//! Everything interactive lives here: the prompt, line editing and
//! history, ANSI screen clearing, help text, and the read-print loop
//! driving the library's editor state machine. The library itself never
//! touches the terminal.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use vsh::{Editor, EditorOutcome, Shell, HOME_PATH};

const HELP: &str = "Available commands:
  pwd                     Print working directory
  cd [PATH]               Change directory (cd - returns to the previous one)
  ls [-l] [-a] [PATH...]  List directory contents
  mkdir [-p] DIR...       Create directories
  touch FILE...           Create empty files / update timestamps
  cat FILE...             Print file contents
  echo TEXT [> FILE]      Print text, or write it to a file (>> appends)
  rm [-r] PATH...         Remove files or directories
  rmdir DIR...            Remove empty directories
  cp [-r] SRC... DEST     Copy files or directories
  mv SRC... DEST          Move or rename files or directories
  edit FILE               Line-based editor (:w save, :q quit, :wq both)
  history                 Show command history
  clear                   Clear the screen
  help                    Show this help
  exit, quit              Leave the shell
";

pub fn run(shell: &mut Shell) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut history: Vec<String> = Vec::new();

    loop {
        let prompt = format!("user@vsh:{}$ ", display_cwd(&shell.cwd()));
        let line = match rl.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(trimmed);
        history.push(trimmed.to_string());

        let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (trimmed, ""),
        };

        match verb {
            "exit" | "quit" => break,
            "clear" => print!("\x1b[2J\x1b[H"),
            "help" => print!("{HELP}"),
            "history" => {
                for (i, entry) in history.iter().enumerate() {
                    println!("{:5}  {}", i + 1, entry);
                }
            }
            "edit" => {
                if rest.is_empty() {
                    eprintln!("edit: missing operand");
                } else {
                    run_editor(shell, &mut rl, rest)?;
                }
            }
            _ => {
                let result = shell.exec(trimmed)?;
                print!("{}", result.stdout);
                if !result.stderr.is_empty() {
                    eprint!("{}", result.stderr);
                }
            }
        }
    }
    Ok(())
}

/// Abbreviate the home prefix to `~`, the way prompts usually do.
fn display_cwd(cwd: &str) -> String {
    if cwd == HOME_PATH {
        "~".to_string()
    } else if let Some(rest) = cwd.strip_prefix(HOME_PATH) {
        format!("~{rest}")
    } else {
        cwd.to_string()
    }
}

/// Drive the library's editor state machine with lines from the terminal.
fn run_editor(shell: &mut Shell, rl: &mut DefaultEditor, path: &str) -> Result<()> {
    let mut editor = match Editor::open(shell.fs_mut(), path) {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("edit: {e}");
            return Ok(());
        }
    };

    loop {
        println!("--- {} ---", editor.path());
        print!("{}", editor.render());

        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        match editor.feed(shell.fs_mut(), &line) {
            Ok(EditorOutcome::Continue) => {}
            Ok(EditorOutcome::Saved) => println!("saved"),
            Ok(EditorOutcome::Quit) => break,
            Ok(EditorOutcome::SavedAndQuit) => {
                println!("saved");
                break;
            }
            Ok(EditorOutcome::Unknown(cmd)) => println!("edit: unknown command: :{cmd}"),
            Err(e) => eprintln!("edit: {e}"),
        }
    }
    Ok(())
}
