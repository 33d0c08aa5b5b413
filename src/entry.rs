/// A single flattened item from an outline: one file or directory at a relative depth.
///
/// A physical line can yield several entries (multi-name lines, extension groups). `depth` is only
/// meaningful relative to other entries of the same outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Bare name, trailing slash already stripped.
    pub name: String,
    pub depth: usize,
    /// `true` when written with a trailing slash, or once something is found nested under it.
    pub is_directory: bool,
}
impl Entry {
    pub fn file(name: impl Into<String>, depth: usize) -> Self {
        Self {
            name: name.into(),
            depth,
            is_directory: false,
        }
    }

    pub fn directory(name: impl Into<String>, depth: usize) -> Self {
        Self {
            name: name.into(),
            depth,
            is_directory: true,
        }
    }
}

/// An open directory scope while paths are being reconstructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncestorFrame {
    /// Slash-joined path of this directory relative to the output root.
    pub path: String,
    pub depth: usize,
}
impl AncestorFrame {
    /// Opens a scope for `entry` nested under `parent`, or at the root when there is no parent.
    pub fn open(parent: Option<&AncestorFrame>, entry: &Entry) -> Self {
        Self {
            path: join(parent, &entry.name),
            depth: entry.depth,
        }
    }
}

/// Joins `name` onto the path of `parent`, if any.
pub fn join(parent: Option<&AncestorFrame>, name: &str) -> String {
    match parent {
        Some(frame) => format!("{}/{}", frame.path, name),
        None => name.to_string(),
    }
}
