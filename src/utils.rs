use std::path::{Component, PathBuf};

/// Turns a slash-joined outline path into a relative path that cannot leave the output root.
///
/// `.` and root/prefix components are dropped and `..` pops the previous component, so
/// `/etc/../passwd` becomes `passwd`.
pub fn normalize_path(source: &str) -> PathBuf {
    let input = PathBuf::from(source);

    let mut new_path = PathBuf::new();

    for component in input.components() {
        match component {
            Component::Normal(part) => new_path.push(part),

            // For "..", pop the last component if possible
            Component::ParentDir => {
                new_path.pop();
            }

            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    new_path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn plain_paths_are_unchanged() {
        assert_eq!(normalize_path("src/main.rs"), Path::new("src/main.rs"));
    }

    #[test]
    fn paths_stay_under_the_root() {
        assert_eq!(normalize_path("/etc/passwd"), Path::new("etc/passwd"));
        assert_eq!(normalize_path("../../escape"), Path::new("escape"));
        assert_eq!(normalize_path("a/./b/../c"), Path::new("a/c"));
        assert_eq!(normalize_path(".."), Path::new(""));
    }
}
