//! Line-based file editor state machine.
//!
//! The editor itself owns no terminal: callers (the CLI's interactive
//! loop) read input lines and feed them here one at a time. Plain lines
//! append to the buffer; `:w`, `:q`, and `:wq` save and/or end the
//! session. Saving writes `lines.join("\n") + "\n"` through the normal
//! write path.

use crate::error::{Error, Result};
use crate::fs::VirtualFs;

/// What the caller should do after feeding one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorOutcome {
    /// Keep reading input.
    Continue,
    /// Buffer was written; keep reading input.
    Saved,
    /// Session over without saving.
    Quit,
    /// Buffer was written; session over.
    SavedAndQuit,
    /// Unrecognized `:` command; keep reading input.
    Unknown(String),
}

/// An in-progress edit of one file.
#[derive(Debug)]
pub struct Editor {
    path: String,
    lines: Vec<String>,
}

impl Editor {
    /// Load a file into the buffer, creating it (empty) when missing.
    /// The parent directory must exist; directories cannot be edited.
    pub fn open(fs: &mut VirtualFs, path: &str) -> Result<Editor> {
        let content = match fs.cat(path) {
            Ok(content) => content,
            Err(Error::NotFound(_)) => {
                fs.write(b"", path, false)?;
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        let text = String::from_utf8_lossy(&content);
        let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        // A final newline produces one trailing empty chunk, not a line.
        if lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        Ok(Editor {
            path: path.to_string(),
            lines,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Numbered listing of the current buffer.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            out.push_str(&format!("{}: {}\n", i + 1, line));
        }
        out
    }

    /// Feed one input line and report what happened.
    pub fn feed(&mut self, fs: &mut VirtualFs, input: &str) -> Result<EditorOutcome> {
        let input = input.trim();
        if let Some(command) = input.strip_prefix(':') {
            return match command.trim() {
                "w" => {
                    self.save(fs)?;
                    Ok(EditorOutcome::Saved)
                }
                "q" => Ok(EditorOutcome::Quit),
                "wq" => {
                    self.save(fs)?;
                    Ok(EditorOutcome::SavedAndQuit)
                }
                other => Ok(EditorOutcome::Unknown(other.to_string())),
            };
        }
        if !input.is_empty() {
            self.lines.push(input.to_string());
        }
        Ok(EditorOutcome::Continue)
    }

    fn save(&self, fs: &mut VirtualFs) -> Result<()> {
        let mut text = self.lines.join("\n");
        text.push('\n');
        fs.write(text.as_bytes(), &self.path, false)
    }
}
