use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File,
}

/// A directory or empty file staged for creation, before anything touches the disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedNode {
    /// Path relative to the output root.
    pub destination: PathBuf,
    pub kind: NodeKind,
}
impl PlannedNode {
    pub fn directory(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
            kind: NodeKind::Directory,
        }
    }

    pub fn file(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
            kind: NodeKind::File,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }
}

/// The ordered set of nodes an outline resolves to.
///
/// Order follows the outline, so every directory is staged before anything nested in it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    pub nodes: Vec<PlannedNode>,
    /// Files that were recognised but skipped because of their extension.
    pub ignored: Vec<PathBuf>,
}
impl Plan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn directories(&self) -> impl Iterator<Item = &PlannedNode> {
        self.nodes.iter().filter(|node| !node.is_file())
    }

    pub fn files(&self) -> impl Iterator<Item = &PlannedNode> {
        self.nodes.iter().filter(|node| node.is_file())
    }
}
