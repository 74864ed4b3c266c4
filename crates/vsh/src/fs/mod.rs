//! Virtual filesystem for vsh
//!
//! Three layers, strictly stacked:
//! - [`tree`]: the node arena (structural integrity, no path knowledge)
//! - [`path`]: pure resolution of path strings against the cursor
//! - [`VirtualFs`]: the session handle implementing the filesystem verbs
//!
//! Every verb resolves paths first, validates everything it is going to
//! need, and only then mutates, so a failed operation leaves the tree
//! unchanged.

mod path;
mod tree;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::{Error, Result};
pub use tree::{Node, NodeId, NodeKind, Tree};

/// The fixed home directory; `~` always means this.
pub const HOME_PATH: &str = "/home/user";

/// What `mkdir -p` does when the final segment already exists as a
/// directory. The plain form always fails on an existing name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MkdirParents {
    /// Existing final directory is a no-op.
    #[default]
    TolerateExisting,
    /// Existing final directory still fails with `AlreadyExists`.
    RejectExisting,
}

/// What `cp`/`mv` do when the destination path itself names an existing
/// file. An existing destination *directory* always means nest-inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clobber {
    /// Fail with `AlreadyExists`.
    #[default]
    Reject,
    /// Replace the existing file.
    Overwrite,
}

/// The configurable edge-case behaviors; everything else is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Policy {
    pub mkdir_parents: MkdirParents,
    pub clobber: Clobber,
}

/// One entry of a directory listing, pre-sorted and pre-filtered by
/// [`VirtualFs::ls`]; rendering (short vs long format) is the caller's.
#[derive(Debug, Clone)]
pub struct LsEntry {
    pub name: String,
    pub kind: NodeKind,
    pub mode: u32,
    pub size: u64,
    pub modified: DateTime<Utc>,
}

impl LsEntry {
    fn of(node: &Node) -> Self {
        Self {
            name: node.name.clone(),
            kind: node.kind,
            mode: node.mode,
            size: node.size,
            modified: node.modified,
        }
    }
}

/// The mutable session state layered on the tree: the arena, the root,
/// and the current/previous-directory cursor.
pub struct VirtualFs {
    tree: Tree,
    root: NodeId,
    cwd: NodeId,
    prev: Option<NodeId>,
    policy: Policy,
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualFs {
    /// Fresh tree with the `/home/user` scaffold; the session starts there.
    pub fn new() -> Self {
        Self::with_policy(Policy::default())
    }

    pub fn with_policy(policy: Policy) -> Self {
        let mut tree = Tree::new();
        let root = tree.alloc("", NodeKind::Directory);
        let home = tree.alloc("home", NodeKind::Directory);
        let user = tree.alloc("user", NodeKind::Directory);
        tree.attach(root, home).expect("empty tree has no conflicts");
        tree.attach(home, user).expect("empty tree has no conflicts");
        Self {
            tree,
            root,
            cwd: user,
            prev: None,
            policy,
        }
    }

    /// Borrow a node for inspection.
    pub fn node(&self, id: NodeId) -> &Node {
        self.tree.node(id)
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Absolute path of the current directory.
    pub fn pwd(&self) -> String {
        self.absolute_path(self.cwd)
    }

    /// Change the current directory. An omitted path means `~`; `-` swaps
    /// with the previous directory.
    pub fn cd(&mut self, path: &str) -> Result<()> {
        let target = if path.is_empty() { "~" } else { path };
        if target == "-" {
            let prev = self.prev.ok_or(Error::NoPreviousDirectory)?;
            self.prev = Some(self.cwd);
            self.cwd = prev;
            return Ok(());
        }
        let id = self.resolve(target)?;
        if !self.tree.node(id).is_dir() {
            return Err(Error::NotADirectory(target.to_string()));
        }
        self.prev = Some(self.cwd);
        self.cwd = id;
        Ok(())
    }

    /// Create a directory. Without `parents` the immediate parent must
    /// already exist and the target name must be free; with `parents`,
    /// missing intermediate directories are created on the way down.
    pub fn mkdir(&mut self, path: &str, parents: bool) -> Result<()> {
        if parents {
            return self.mkdir_parents(path);
        }
        match self.resolve(path) {
            Ok(_) => Err(Error::AlreadyExists(path.to_string())),
            Err(Error::NotFound(_)) => {
                let (parent, name) = self.split_target(path)?;
                let id = self.tree.alloc(name, NodeKind::Directory);
                self.tree.attach(parent, id)
            }
            Err(e) => Err(e),
        }
    }

    fn mkdir_parents(&mut self, path: &str) -> Result<()> {
        let (start, rest) = self.walk_origin(path)?;
        let mut current = start;
        let mut created_final = false;
        for segment in rest.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    if let Some(parent) = self.tree.node(current).parent {
                        current = parent;
                    }
                    created_final = false;
                }
                name => {
                    let node = self.tree.node(current);
                    if !node.is_dir() {
                        return Err(Error::NotADirectory(node.name.clone()));
                    }
                    match node.children.get(name).copied() {
                        Some(child) => {
                            if !self.tree.node(child).is_dir() {
                                return Err(Error::NotADirectory(name.to_string()));
                            }
                            current = child;
                            created_final = false;
                        }
                        None => {
                            let id = self.tree.alloc(name, NodeKind::Directory);
                            self.tree.attach(current, id)?;
                            current = id;
                            created_final = true;
                        }
                    }
                }
            }
        }
        if !created_final && self.policy.mkdir_parents == MkdirParents::RejectExisting {
            return Err(Error::AlreadyExists(path.to_string()));
        }
        Ok(())
    }

    /// Create an empty file, or bump the mtime of an existing one.
    pub fn touch(&mut self, path: &str) -> Result<()> {
        match self.resolve(path) {
            Ok(id) => {
                if self.tree.node(id).is_dir() {
                    return Err(Error::IsADirectory(path.to_string()));
                }
                self.tree.node_mut(id).touch();
                Ok(())
            }
            Err(Error::NotFound(_)) => {
                let (parent, name) = self.split_target(path)?;
                let id = self.tree.alloc(name, NodeKind::File);
                self.tree.attach(parent, id)
            }
            Err(e) => Err(e),
        }
    }

    /// Remove a file or directory. A directory that still has children
    /// needs `recursive`; an empty one does not.
    pub fn rm(&mut self, path: &str, recursive: bool) -> Result<()> {
        let id = self.resolve(path)?;
        if id == self.root {
            return Err(Error::CannotRemoveRoot);
        }
        let node = self.tree.node(id);
        if node.is_dir() && !node.children.is_empty() && !recursive {
            return Err(Error::DirectoryNotEmpty(path.to_string()));
        }
        debug!(path, recursive, "rm");
        self.remove_node(id)
    }

    /// Remove an empty directory; never removes files, even empty ones.
    pub fn rmdir(&mut self, path: &str) -> Result<()> {
        let id = self.resolve(path)?;
        let node = self.tree.node(id);
        if !node.is_dir() {
            return Err(Error::NotADirectory(path.to_string()));
        }
        if id == self.root {
            return Err(Error::CannotRemoveRoot);
        }
        if !node.children.is_empty() {
            return Err(Error::DirectoryNotEmpty(path.to_string()));
        }
        self.remove_node(id)
    }

    /// Copy `src` to `dest`. An existing destination directory receives
    /// the copy *inside* it under the source's own name. Directories need
    /// `recursive` and are copied deeply: fresh nodes, independent
    /// content buffers, fresh timestamps, same permission bits.
    pub fn cp(&mut self, src: &str, dest: &str, recursive: bool) -> Result<()> {
        let src_id = self.resolve(src)?;
        let src_is_dir = self.tree.node(src_id).is_dir();
        if src_is_dir && !recursive {
            return Err(Error::OmittingDirectory(src.to_string()));
        }
        let (dest_parent, dest_name, replaced) = self.dest_target(src_id, dest)?;
        if src_is_dir && self.tree.contains(src_id, dest_parent) {
            return Err(Error::CopyIntoSelf(src.to_string()));
        }
        debug!(src, dest, recursive, "cp");
        if let Some(existing) = replaced {
            self.remove_node(existing)?;
        }
        self.copy_subtree(src_id, dest_parent, &dest_name)?;
        Ok(())
    }

    /// Move/rename: a pure re-parent. Node ids are stable, so the whole
    /// subtree (and a cursor pointing into it) stays valid.
    pub fn mv(&mut self, src: &str, dest: &str) -> Result<()> {
        let src_id = self.resolve(src)?;
        if src_id == self.root {
            return Err(Error::CannotRemoveRoot);
        }
        let (dest_parent, dest_name, replaced) = self.dest_target(src_id, dest)?;
        if self.tree.contains(src_id, dest_parent) {
            return Err(Error::MoveIntoSelf(src.to_string()));
        }
        debug!(src, dest, "mv");
        if let Some(existing) = replaced {
            self.remove_node(existing)?;
        }
        self.tree.detach(src_id)?;
        {
            let node = self.tree.node_mut(src_id);
            node.name = dest_name;
            node.touch();
        }
        self.tree.attach(dest_parent, src_id)
    }

    /// Content bytes of a file, verbatim.
    pub fn cat(&self, path: &str) -> Result<Vec<u8>> {
        let id = self.resolve(path)?;
        let node = self.tree.node(id);
        if node.is_dir() {
            return Err(Error::IsADirectory(path.to_string()));
        }
        Ok(node.content.clone())
    }

    /// Write `text` to a file, creating it if missing. `append`
    /// concatenates onto existing content instead of replacing it.
    pub fn write(&mut self, text: &[u8], path: &str, append: bool) -> Result<()> {
        match self.resolve(path) {
            Ok(id) => {
                if self.tree.node(id).is_dir() {
                    return Err(Error::IsADirectory(path.to_string()));
                }
                let node = self.tree.node_mut(id);
                if append {
                    let mut content = std::mem::take(&mut node.content);
                    content.extend_from_slice(text);
                    node.set_content(content);
                } else {
                    node.set_content(text.to_vec());
                }
                Ok(())
            }
            Err(Error::NotFound(_)) => {
                let (parent, name) = self.split_target(path)?;
                let id = self.tree.alloc(name, NodeKind::File);
                self.tree.node_mut(id).set_content(text.to_vec());
                self.tree.attach(parent, id)
            }
            Err(e) => Err(e),
        }
    }

    /// List a directory (sorted lexicographically, dotfiles hidden unless
    /// `all`), or a single file as its own one-entry listing.
    pub fn ls(&self, path: &str, all: bool) -> Result<Vec<LsEntry>> {
        let id = self.resolve(path)?;
        let node = self.tree.node(id);
        if node.is_file() {
            return Ok(vec![LsEntry::of(node)]);
        }
        Ok(node
            .children
            .values()
            .map(|&child| self.tree.node(child))
            .filter(|child| all || !child.name.starts_with('.'))
            .map(LsEntry::of)
            .collect())
    }

    /// Effective destination for cp/mv: parent directory, final name, and
    /// the existing file to replace when the clobber policy allows it.
    fn dest_target(&self, src: NodeId, dest: &str) -> Result<(NodeId, String, Option<NodeId>)> {
        match self.resolve(dest) {
            Ok(id) if self.tree.node(id).is_dir() => {
                let name = self.tree.node(src).name.clone();
                if self.tree.node(id).children.contains_key(&name) {
                    return Err(Error::AlreadyExists(format!(
                        "{}/{}",
                        dest.trim_end_matches('/'),
                        name
                    )));
                }
                Ok((id, name, None))
            }
            Ok(id) => {
                if id == src {
                    return Err(Error::AlreadyExists(dest.to_string()));
                }
                match self.policy.clobber {
                    Clobber::Reject => Err(Error::AlreadyExists(dest.to_string())),
                    Clobber::Overwrite => {
                        let node = self.tree.node(id);
                        let Some(parent) = node.parent else {
                            return Err(Error::CannotRemoveRoot);
                        };
                        Ok((parent, node.name.clone(), Some(id)))
                    }
                }
            }
            Err(Error::NotFound(_)) => {
                let (parent, name) = self.split_target(dest)?;
                Ok((parent, name, None))
            }
            Err(e) => Err(e),
        }
    }

    fn copy_subtree(&mut self, src: NodeId, dest_parent: NodeId, name: &str) -> Result<NodeId> {
        let src_node = self.tree.node(src);
        let kind = src_node.kind;
        let mode = src_node.mode;
        let content = src_node.content.clone();
        let children = src_node.children.clone();

        let id = self.tree.alloc(name, kind);
        {
            let node = self.tree.node_mut(id);
            node.mode = mode;
            if kind.is_file() {
                node.set_content(content);
            }
        }
        self.tree.attach(dest_parent, id)?;
        if kind.is_dir() {
            for (child_name, child_id) in children {
                self.copy_subtree(child_id, id, &child_name)?;
            }
        }
        Ok(id)
    }

    /// Detach and free a subtree, keeping the cursor valid: a current or
    /// previous directory inside the doomed subtree falls back to the
    /// nearest surviving ancestor (or unset, for `prev`).
    fn remove_node(&mut self, id: NodeId) -> Result<()> {
        if self.tree.contains(id, self.cwd) {
            match self.tree.node(id).parent {
                Some(parent) => self.cwd = parent,
                None => return Err(Error::CannotRemoveRoot),
            }
        }
        if let Some(prev) = self.prev {
            if self.tree.contains(id, prev) {
                self.prev = None;
            }
        }
        self.tree.detach(id)?;
        self.tree.release(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fresh_session_starts_in_home() {
        let fs = VirtualFs::new();
        assert_eq!(fs.pwd(), "/home/user");
    }

    #[test]
    fn cd_updates_previous_directory() {
        let mut fs = VirtualFs::new();
        fs.cd("/home").unwrap();
        assert_eq!(fs.pwd(), "/home");
        fs.cd("-").unwrap();
        assert_eq!(fs.pwd(), "/home/user");
        fs.cd("-").unwrap();
        assert_eq!(fs.pwd(), "/home");
    }

    #[test]
    fn cd_into_file_fails() {
        let mut fs = VirtualFs::new();
        fs.touch("f").unwrap();
        assert_eq!(fs.cd("f"), Err(Error::NotADirectory("f".into())));
        assert_eq!(fs.pwd(), "/home/user");
    }

    #[test]
    fn cd_default_is_home() {
        let mut fs = VirtualFs::new();
        fs.cd("/").unwrap();
        fs.cd("").unwrap();
        assert_eq!(fs.pwd(), "/home/user");
    }

    #[test]
    fn plain_mkdir_requires_existing_parent() {
        let mut fs = VirtualFs::new();
        assert_eq!(
            fs.mkdir("a/b", false),
            Err(Error::NotFound("a".into()))
        );
    }

    #[test]
    fn plain_mkdir_of_existing_name_fails() {
        let mut fs = VirtualFs::new();
        fs.mkdir("docs", false).unwrap();
        assert_eq!(
            fs.mkdir("docs", false),
            Err(Error::AlreadyExists("docs".into()))
        );
        fs.touch("f").unwrap();
        assert_eq!(fs.mkdir("f", false), Err(Error::AlreadyExists("f".into())));
    }

    #[test]
    fn mkdir_parents_creates_chain() {
        let mut fs = VirtualFs::new();
        fs.mkdir("a/b/c", true).unwrap();
        assert!(fs.resolve("a/b/c").is_ok());
    }

    #[test]
    fn mkdir_parents_through_file_fails() {
        let mut fs = VirtualFs::new();
        fs.touch("a").unwrap();
        assert_eq!(
            fs.mkdir("a/b", true),
            Err(Error::NotADirectory("a".into()))
        );
    }

    #[test]
    fn mkdir_parents_existing_final_follows_policy() {
        let mut fs = VirtualFs::new();
        fs.mkdir("a", false).unwrap();
        // Default policy tolerates the existing directory.
        fs.mkdir("a", true).unwrap();

        let mut strict = VirtualFs::with_policy(Policy {
            mkdir_parents: MkdirParents::RejectExisting,
            ..Policy::default()
        });
        strict.mkdir("a", false).unwrap();
        assert_eq!(
            strict.mkdir("a", true),
            Err(Error::AlreadyExists("a".into()))
        );
        // Creating something new under the existing prefix is still fine.
        strict.mkdir("a/b", true).unwrap();
    }

    #[test]
    fn touch_existing_directory_fails() {
        let mut fs = VirtualFs::new();
        fs.mkdir("d", false).unwrap();
        assert_eq!(fs.touch("d"), Err(Error::IsADirectory("d".into())));
    }

    #[test]
    fn touch_existing_file_keeps_content() {
        let mut fs = VirtualFs::new();
        fs.write(b"data", "f", false).unwrap();
        fs.touch("f").unwrap();
        assert_eq!(fs.cat("f").unwrap(), b"data");
    }

    #[test]
    fn rm_root_fails() {
        let mut fs = VirtualFs::new();
        assert_eq!(fs.rm("/", true), Err(Error::CannotRemoveRoot));
        assert_eq!(fs.rmdir("/"), Err(Error::CannotRemoveRoot));
        assert_eq!(fs.mv("/", "elsewhere"), Err(Error::CannotRemoveRoot));
    }

    #[test]
    fn rm_nonempty_directory_needs_recursive() {
        let mut fs = VirtualFs::new();
        fs.mkdir("d", false).unwrap();
        fs.touch("d/x").unwrap();
        assert_eq!(
            fs.rm("d", false),
            Err(Error::DirectoryNotEmpty("d".into()))
        );
        fs.rm("d", true).unwrap();
        assert_eq!(fs.resolve("d"), Err(Error::NotFound("d".into())));
        assert_eq!(fs.resolve("d/x"), Err(Error::NotFound("d".into())));
    }

    #[test]
    fn rm_empty_directory_without_recursive_succeeds() {
        let mut fs = VirtualFs::new();
        fs.mkdir("d", false).unwrap();
        fs.rm("d", false).unwrap();
        assert_eq!(fs.resolve("d"), Err(Error::NotFound("d".into())));
    }

    #[test]
    fn rmdir_never_removes_files() {
        let mut fs = VirtualFs::new();
        fs.touch("f").unwrap();
        assert_eq!(fs.rmdir("f"), Err(Error::NotADirectory("f".into())));
        assert!(fs.resolve("f").is_ok());
    }

    #[test]
    fn rm_of_current_directory_falls_back_to_parent() {
        let mut fs = VirtualFs::new();
        fs.mkdir("d/inner", true).unwrap();
        fs.cd("d/inner").unwrap();
        fs.rm("/home/user/d", true).unwrap();
        assert_eq!(fs.pwd(), "/home/user");
    }

    #[test]
    fn cp_copies_are_independent() {
        let mut fs = VirtualFs::new();
        fs.write(b"one", "a.txt", false).unwrap();
        fs.cp("a.txt", "b.txt", false).unwrap();
        fs.write(b"changed", "b.txt", false).unwrap();
        assert_eq!(fs.cat("a.txt").unwrap(), b"one");
        assert_eq!(fs.cat("b.txt").unwrap(), b"changed");
    }

    #[test]
    fn cp_into_existing_directory_nests() {
        let mut fs = VirtualFs::new();
        fs.write(b"x", "f", false).unwrap();
        fs.mkdir("d", false).unwrap();
        fs.cp("f", "d", false).unwrap();
        assert_eq!(fs.cat("d/f").unwrap(), b"x");
        // Second copy collides with the nested name.
        assert_eq!(
            fs.cp("f", "d", false),
            Err(Error::AlreadyExists("d/f".into()))
        );
    }

    #[test]
    fn cp_directory_requires_recursive() {
        let mut fs = VirtualFs::new();
        fs.mkdir("d", false).unwrap();
        assert_eq!(
            fs.cp("d", "e", false),
            Err(Error::OmittingDirectory("d".into()))
        );
    }

    #[test]
    fn cp_recursive_deep_copies_subtree() {
        let mut fs = VirtualFs::new();
        fs.mkdir("src/sub", true).unwrap();
        fs.write(b"leaf", "src/sub/f", false).unwrap();
        fs.cp("src", "dst", true).unwrap();

        assert_eq!(fs.cat("dst/sub/f").unwrap(), b"leaf");
        fs.write(b"edited", "dst/sub/f", false).unwrap();
        assert_eq!(fs.cat("src/sub/f").unwrap(), b"leaf");
    }

    #[test]
    fn cp_into_own_subtree_fails() {
        let mut fs = VirtualFs::new();
        fs.mkdir("d/inner", true).unwrap();
        assert_eq!(
            fs.cp("d", "d/inner", true),
            Err(Error::CopyIntoSelf("d".into()))
        );
        // Also rejects copying root, whose subtree contains everything.
        assert_eq!(fs.cp("/", "x", true), Err(Error::CopyIntoSelf("/".into())));
    }

    #[test]
    fn cp_onto_existing_file_follows_policy() {
        let mut fs = VirtualFs::new();
        fs.write(b"old", "a", false).unwrap();
        fs.write(b"new", "b", false).unwrap();
        assert_eq!(fs.cp("b", "a", false), Err(Error::AlreadyExists("a".into())));
        assert_eq!(fs.cat("a").unwrap(), b"old");

        let mut fs = VirtualFs::with_policy(Policy {
            clobber: Clobber::Overwrite,
            ..Policy::default()
        });
        fs.write(b"old", "a", false).unwrap();
        fs.write(b"new", "b", false).unwrap();
        fs.cp("b", "a", false).unwrap();
        assert_eq!(fs.cat("a").unwrap(), b"new");
    }

    #[test]
    fn cp_file_onto_itself_fails_under_both_policies() {
        for clobber in [Clobber::Reject, Clobber::Overwrite] {
            let mut fs = VirtualFs::with_policy(Policy {
                clobber,
                ..Policy::default()
            });
            fs.write(b"x", "f", false).unwrap();
            assert_eq!(fs.cp("f", "f", false), Err(Error::AlreadyExists("f".into())));
            assert_eq!(fs.cat("f").unwrap(), b"x");
        }
    }

    #[test]
    fn mv_moves_subtree_wholesale() {
        let mut fs = VirtualFs::new();
        fs.mkdir("dir1/sub", true).unwrap();
        fs.write(b"leaf", "dir1/sub/f", false).unwrap();
        fs.mv("dir1", "dir2").unwrap();

        assert_eq!(fs.resolve("dir1"), Err(Error::NotFound("dir1".into())));
        assert_eq!(fs.cat("dir2/sub/f").unwrap(), b"leaf");
    }

    #[test]
    fn mv_into_existing_directory_nests() {
        let mut fs = VirtualFs::new();
        fs.touch("f").unwrap();
        fs.mkdir("d", false).unwrap();
        fs.mv("f", "d").unwrap();
        assert!(fs.resolve("d/f").is_ok());
        assert_eq!(fs.resolve("f"), Err(Error::NotFound("f".into())));
    }

    #[test]
    fn mv_into_own_subtree_fails() {
        let mut fs = VirtualFs::new();
        fs.mkdir("d/inner", true).unwrap();
        assert_eq!(
            fs.mv("d", "d/inner"),
            Err(Error::MoveIntoSelf("d".into()))
        );
        assert!(fs.resolve("d/inner").is_ok());
    }

    #[test]
    fn mv_onto_existing_file_follows_policy() {
        let mut fs = VirtualFs::new();
        fs.write(b"keep", "a", false).unwrap();
        fs.write(b"src", "b", false).unwrap();
        assert_eq!(fs.mv("b", "a"), Err(Error::AlreadyExists("a".into())));

        let mut fs = VirtualFs::with_policy(Policy {
            clobber: Clobber::Overwrite,
            ..Policy::default()
        });
        fs.write(b"keep", "a", false).unwrap();
        fs.write(b"src", "b", false).unwrap();
        fs.mv("b", "a").unwrap();
        assert_eq!(fs.cat("a").unwrap(), b"src");
        assert_eq!(fs.resolve("b"), Err(Error::NotFound("b".into())));
    }

    #[test]
    fn write_then_cat_round_trips() {
        let mut fs = VirtualFs::new();
        fs.write(b"hello\n", "f", false).unwrap();
        assert_eq!(fs.cat("f").unwrap(), b"hello\n");
    }

    #[test]
    fn append_accumulates_in_order() {
        let mut fs = VirtualFs::new();
        fs.write(b"a", "f", false).unwrap();
        fs.write(b"b", "f", true).unwrap();
        assert_eq!(fs.cat("f").unwrap(), b"ab");
    }

    #[test]
    fn append_to_missing_file_creates_it() {
        let mut fs = VirtualFs::new();
        fs.write(b"first", "f", true).unwrap();
        assert_eq!(fs.cat("f").unwrap(), b"first");
    }

    #[test]
    fn write_to_directory_fails() {
        let mut fs = VirtualFs::new();
        fs.mkdir("d", false).unwrap();
        assert_eq!(
            fs.write(b"x", "d", false),
            Err(Error::IsADirectory("d".into()))
        );
    }

    #[test]
    fn cat_directory_fails() {
        let fs = VirtualFs::new();
        assert_eq!(fs.cat("/home"), Err(Error::IsADirectory("/home".into())));
    }

    #[test]
    fn ls_sorts_and_hides_dotfiles() {
        let mut fs = VirtualFs::new();
        fs.touch("b").unwrap();
        fs.touch("a").unwrap();
        fs.touch(".hidden").unwrap();

        let names: Vec<_> = fs.ls("", false).unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["a", "b"]);

        let names: Vec<_> = fs.ls("", true).unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec![".hidden", "a", "b"]);
    }

    #[test]
    fn ls_of_file_lists_that_file() {
        let mut fs = VirtualFs::new();
        fs.write(b"xyz", "f", false).unwrap();
        let entries = fs.ls("f", false).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "f");
        assert_eq!(entries[0].size, 3);
    }

    #[test]
    fn size_tracks_content_length() {
        let mut fs = VirtualFs::new();
        fs.write(b"1234", "f", false).unwrap();
        let id = fs.resolve("f").unwrap();
        assert_eq!(fs.node(id).size, 4);
        fs.write(b"56", "f", true).unwrap();
        assert_eq!(fs.node(id).size, 6);
    }
}
