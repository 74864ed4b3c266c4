//! Path resolution against the live cursor.
//!
//! Resolution is purely functional: it never mutates the tree or the
//! cursor. Relative paths start from the current directory *at call time*,
//! which matters for operations that resolve a source and a destination in
//! sequence.

use super::{HOME_PATH, VirtualFs};
use crate::error::{Error, Result};
use crate::fs::tree::NodeId;

impl VirtualFs {
    /// Map a path string to a node id.
    ///
    /// - `""` resolves to the current directory, `"~"` to `/home/user`,
    ///   `"-"` to the previous directory (or [`Error::NoPreviousDirectory`]).
    /// - A leading `/` starts at root; anything else starts at the current
    ///   directory.
    /// - Empty segments from repeated or trailing slashes are discarded,
    ///   `.` stays put, and `..` moves to the parent (a no-op at root,
    ///   never an error).
    pub fn resolve(&self, path: &str) -> Result<NodeId> {
        if path.is_empty() {
            return Ok(self.cwd);
        }
        if path == "-" {
            return self.prev.ok_or(Error::NoPreviousDirectory);
        }

        let (mut current, rest) = self.walk_origin(path)?;
        for segment in rest.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    if let Some(parent) = self.tree.node(current).parent {
                        current = parent;
                    }
                }
                name => {
                    let node = self.tree.node(current);
                    if !node.is_dir() {
                        return Err(Error::NotADirectory(node.name.clone()));
                    }
                    current = *node
                        .children
                        .get(name)
                        .ok_or_else(|| Error::NotFound(name.to_string()))?;
                }
            }
        }
        Ok(current)
    }

    /// Pick the traversal start and the remaining segments for `path`.
    /// `~` and `~/...` start at the home directory, absolute paths at
    /// root, everything else at the current directory.
    pub(super) fn walk_origin<'a>(&self, path: &'a str) -> Result<(NodeId, &'a str)> {
        if let Some(rest) = path.strip_prefix('/') {
            Ok((self.root, rest))
        } else if path == "~" {
            Ok((self.resolve(HOME_PATH)?, ""))
        } else if let Some(rest) = path.strip_prefix("~/") {
            Ok((self.resolve(HOME_PATH)?, rest))
        } else {
            Ok((self.cwd, path))
        }
    }

    /// Absolute path of a node, computed by walking parent links to root
    /// and joining names with `/`. Root itself renders as `/`.
    pub fn absolute_path(&self, id: NodeId) -> String {
        let mut parts = Vec::new();
        let mut current = id;
        while let Some(parent) = self.tree.node(current).parent {
            parts.push(self.tree.node(current).name.clone());
            current = parent;
        }
        parts.reverse();
        format!("/{}", parts.join("/"))
    }

    /// Split a path into an existing parent directory and the final name,
    /// for operations that create the final segment. Callers resolve the
    /// full path first, so this only runs when the target itself is
    /// missing. Fails with [`Error::NotFound`] when the parent is missing
    /// too, or [`Error::NotADirectory`] when it exists as a file.
    pub(super) fn split_target(&self, path: &str) -> Result<(NodeId, String)> {
        let trimmed = path.trim_end_matches('/');
        let (dir_part, name) = match trimmed.rfind('/') {
            Some(0) => ("/", &trimmed[1..]),
            Some(idx) => (&trimmed[..idx], &trimmed[idx + 1..]),
            None => ("", trimmed),
        };
        let parent = self.resolve(dir_part)?;
        if !self.tree.node(parent).is_dir() {
            return Err(Error::NotADirectory(dir_part.to_string()));
        }
        Ok((parent, name.to_string()))
    }
}
