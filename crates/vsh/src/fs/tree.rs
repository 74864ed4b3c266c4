//! Tree store: the arena of filesystem nodes.
//!
//! Nodes live in a slab indexed by [`NodeId`]; parent and child links are
//! ids rather than pointers, so the back-reference from child to parent
//! carries no ownership. Structural edits (attach/detach) always go through
//! the parent's child map. Nothing here parses paths: resolution lives in
//! the layer above.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};

/// Stable handle to a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Node flavor: regular file or directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory,
}

impl NodeKind {
    /// Check if this is a file.
    pub fn is_file(self) -> bool {
        matches!(self, NodeKind::File)
    }

    /// Check if this is a directory.
    pub fn is_dir(self) -> bool {
        matches!(self, NodeKind::Directory)
    }
}

/// A file or directory in the virtual tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// Final path segment, unique among siblings. Root's name is empty.
    pub name: String,
    /// File or directory.
    pub kind: NodeKind,
    /// Raw bytes; meaningful only for files.
    pub content: Vec<u8>,
    /// Name -> child id; meaningful only for directories. BTreeMap keeps
    /// listing order lexicographic without a sort at read time.
    pub children: BTreeMap<String, NodeId>,
    /// Non-owning back-reference; `None` only for the root.
    pub parent: Option<NodeId>,
    /// Cosmetic permission bits.
    pub mode: u32,
    /// Last modification time.
    pub modified: DateTime<Utc>,
    /// Byte length of `content` for files, 0 for directories.
    pub size: u64,
}

impl Node {
    fn new(name: String, kind: NodeKind) -> Self {
        let mode = match kind {
            NodeKind::File => 0o644,
            NodeKind::Directory => 0o755,
        };
        Self {
            name,
            kind,
            content: Vec::new(),
            children: BTreeMap::new(),
            parent: None,
            mode,
            modified: Utc::now(),
            size: 0,
        }
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.kind.is_file()
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    /// Replace the content buffer, keeping `size` and `modified` in sync.
    pub fn set_content(&mut self, content: Vec<u8>) {
        self.size = content.len() as u64;
        self.content = content;
        self.modified = Utc::now();
    }

    /// Bump the modification time without touching content.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }
}

/// Arena of nodes with a free list for recycled slots.
#[derive(Debug, Default)]
pub struct Tree {
    slab: Vec<Option<Node>>,
    free: Vec<usize>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh node with empty content/children, zero size,
    /// current timestamp, and default permission bits for its kind.
    pub fn alloc(&mut self, name: impl Into<String>, kind: NodeKind) -> NodeId {
        let node = Node::new(name.into(), kind);
        match self.free.pop() {
            Some(index) => {
                self.slab[index] = Some(node);
                NodeId(index)
            }
            None => {
                self.slab.push(Some(node));
                NodeId(self.slab.len() - 1)
            }
        }
    }

    /// Borrow a node. Ids handed out by this tree stay valid until the
    /// node is released, so a stale id is a logic error.
    pub fn node(&self, id: NodeId) -> &Node {
        self.slab[id.0].as_ref().expect("stale node id")
    }

    /// Mutably borrow a node.
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.slab[id.0].as_mut().expect("stale node id")
    }

    /// Link `child` under `parent`, enforcing sibling-name uniqueness.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let name = self.node(child).name.clone();
        let parent_node = self.node(parent);
        if !parent_node.is_dir() {
            return Err(Error::NotADirectory(parent_node.name.clone()));
        }
        if parent_node.children.contains_key(&name) {
            return Err(Error::AlreadyExists(name));
        }
        self.node_mut(child).parent = Some(parent);
        let parent_node = self.node_mut(parent);
        parent_node.children.insert(name, child);
        parent_node.touch();
        Ok(())
    }

    /// Unlink a node from its parent. Never recursive: whether a subtree
    /// may be removed wholesale is the caller's policy, not the store's.
    pub fn detach(&mut self, id: NodeId) -> Result<()> {
        let Some(parent) = self.node(id).parent else {
            return Err(Error::CannotRemoveRoot);
        };
        let name = self.node(id).name.clone();
        let parent_node = self.node_mut(parent);
        parent_node.children.remove(&name);
        parent_node.touch();
        self.node_mut(id).parent = None;
        Ok(())
    }

    /// Return an already-detached node and its whole subtree to the free
    /// list. Slab bookkeeping only; the tree shape was settled by detach.
    /// Iterative so pathological depth cannot blow the stack.
    pub fn release(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.slab[current.0].take() {
                stack.extend(node.children.into_values());
                self.free.push(current.0);
            }
        }
    }

    /// True when `id` lies in the subtree rooted at `ancestor` (including
    /// `id == ancestor`). Walks parent links, so it terminates in at most
    /// tree-depth steps on any well-formed tree.
    pub fn contains(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = id;
        loop {
            if current == ancestor {
                return true;
            }
            match self.node(current).parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }
}
