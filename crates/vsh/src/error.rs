//! Error types for vsh
//!
//! Every filesystem operation returns either a success payload or one of
//! these tagged errors. All of them are recoverable: the dispatcher renders
//! the message and the session continues. The library itself never writes
//! to an output stream and never terminates the process.

use thiserror::Error;

/// Result type alias using vsh's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// vsh error types.
///
/// Display strings are phrased like the corresponding Unix diagnostics so
/// builtins can prefix them with a verb (`"rm: {err}"`) and show them as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A path segment names nothing in its parent directory.
    #[error("no such file or directory: {0}")]
    NotFound(String),

    /// Tried to descend into, or treat as a directory, a regular file.
    #[error("not a directory: {0}")]
    NotADirectory(String),

    /// A file-only operation hit a directory.
    #[error("is a directory: {0}")]
    IsADirectory(String),

    /// The target name is already taken in the destination directory.
    #[error("file exists: {0}")]
    AlreadyExists(String),

    /// Non-recursive removal of a directory that still has children.
    #[error("directory not empty: {0}")]
    DirectoryNotEmpty(String),

    /// The root directory can never be removed, renamed, or replaced.
    #[error("cannot remove root directory")]
    CannotRemoveRoot,

    /// `cd -` before any directory change.
    #[error("no previous directory")]
    NoPreviousDirectory,

    /// Argument-count validation in the builtins.
    #[error("missing operand")]
    MissingOperand,

    /// Copying a directory without the recursive flag.
    #[error("omitting directory '{0}'")]
    OmittingDirectory(String),

    /// Recursive copy whose destination lies inside the source subtree.
    /// Copying would recurse forever; rejected before any node is created.
    #[error("cannot copy '{0}' into itself")]
    CopyIntoSelf(String),

    /// Move whose destination lies inside the moved subtree. Re-parenting
    /// would create a cycle; rejected before any node is detached.
    #[error("cannot move '{0}' into itself")]
    MoveIntoSelf(String),

    /// Unrecognized command name at the dispatch layer.
    #[error("command not found: {0}")]
    CommandNotFound(String),
}
