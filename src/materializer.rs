use crate::{
    entry::{self, AncestorFrame, Entry},
    errors::{FileOperation, IoError},
    ignore::IgnoreSet,
    plan::{NodeKind, Plan, PlannedNode},
    utils::normalize_path,
};
use colored::Colorize;
use miette::Diagnostic;
use std::{
    fmt, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum MaterializeError {
    #[error("I/O error within materializer domain")]
    #[diagnostic(code(sprout::materializer::io))]
    Io(#[from] IoError),

    #[error("expected a file but found a directory at: '{path}'")]
    #[diagnostic(
        code(sprout::materializer::not_a_file),
        help("Rename the file in the outline, or remove the existing directory")
    )]
    NotAFile { path: PathBuf },
}

/// What happened while applying a [`Plan`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub directories: usize,
    pub files_created: usize,
    pub files_existing: usize,
    pub ignored: usize,
}
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} directories, {} files created, {} already present, {} ignored",
            self.directories, self.files_created, self.files_existing, self.ignored
        )
    }
}

enum Status {
    Created,
    Existing,
}

/// Marks every entry that has something nested right below it as a directory.
///
/// Runs over the whole sequence before any path is resolved. Depths are only read here, never
/// written, so each comparison sees the outline as written.
pub fn infer_directories(entries: &mut [Entry]) {
    for index in 1..entries.len() {
        if entries[index].depth > entries[index - 1].depth {
            entries[index - 1].is_directory = true;
        }
    }
}

/// Resolves each entry's path with a stack of open directories and stages the result.
///
/// An entry belongs to the nearest preceding directory with a strictly smaller depth. Files with
/// an ignored extension are recorded in [`Plan::ignored`] and otherwise skipped.
pub fn build_plan(entries: &[Entry], ignore: &IgnoreSet) -> Plan {
    let mut plan = Plan::new();
    let mut stack: Vec<AncestorFrame> = Vec::new();

    for entry in entries {
        // a sibling or shallower entry closes every scope at its depth or deeper
        while stack.last().is_some_and(|top| top.depth >= entry.depth) {
            stack.pop();
        }

        let parent = stack.last();

        if entry.is_directory {
            let frame = AncestorFrame::open(parent, entry);

            let destination = normalize_path(&frame.path);
            if destination.as_os_str().is_empty() {
                log::debug!("'{}' resolves to the output root itself", frame.path);
            } else {
                plan.nodes.push(PlannedNode::directory(destination));
            }

            stack.push(frame);
            continue;
        }

        let destination = normalize_path(&entry::join(parent, &entry.name));

        if ignore.is_ignored(&entry.name) {
            log::debug!("ignoring file: {}", destination.display());
            plan.ignored.push(destination);
            continue;
        }

        if destination.as_os_str().is_empty() {
            log::debug!("'{}' does not name a file, skipping", entry.name);
            continue;
        }

        plan.nodes.push(PlannedNode::file(destination));
    }

    plan
}

/// Creates every staged node under `root`, in order.
///
/// Directories that already exist are fine and existing files are never touched. The first
/// failure stops the run; whatever was created before it stays on disk.
pub fn apply_plan(plan: &Plan, root: &Path) -> Result<Report, MaterializeError> {
    create_directory(root)?;

    let mut report = Report {
        ignored: plan.ignored.len(),
        ..Report::default()
    };

    for node in &plan.nodes {
        let final_path = root.join(&node.destination);

        match node.kind {
            NodeKind::Directory => {
                let status = create_directory(&final_path)?;
                if matches!(status, Status::Created) {
                    echo(&status, &final_path);
                }

                report.directories += 1;
            }
            NodeKind::File => {
                if let Some(parent) = final_path.parent() {
                    create_directory(parent)?;
                }

                let status = create_empty_file(&final_path)?;
                echo(&status, &final_path);

                match status {
                    Status::Created => report.files_created += 1,
                    Status::Existing => report.files_existing += 1,
                }
            }
        }
    }

    Ok(report)
}

/// Infers directories, resolves paths and writes the tree for already parsed `entries` under `root`.
pub fn materialize(
    mut entries: Vec<Entry>,
    root: &Path,
    ignore: &IgnoreSet,
) -> Result<Report, MaterializeError> {
    infer_directories(&mut entries);

    let plan = build_plan(&entries, ignore);

    apply_plan(&plan, root)
}

/// Creates `path` and any missing parents. An existing directory is not an error.
fn create_directory(path: &Path) -> Result<Status, MaterializeError> {
    if path.is_dir() {
        return Ok(Status::Existing);
    }

    fs::create_dir_all(path).map_err(IoError::on(FileOperation::Mkdir, path))?;

    Ok(Status::Created)
}

/// Creates a zero-byte file at `path` unless something already lives there.
fn create_empty_file(path: &Path) -> Result<Status, MaterializeError> {
    if path.is_dir() {
        return Err(MaterializeError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    match fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
    {
        Ok(_) => Ok(Status::Created),
        Err(error) if error.kind() == ErrorKind::AlreadyExists => Ok(Status::Existing),
        Err(error) => Err(IoError::new(FileOperation::Create, path.to_path_buf(), error).into()),
    }
}

fn echo(status: &Status, path: &Path) {
    let label = match status {
        Status::Created => "create".green(),
        Status::Existing => "exists".yellow(),
    };

    println!("{} {}", label, path.display());
}
