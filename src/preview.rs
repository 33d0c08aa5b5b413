use crate::plan::{NodeKind, Plan};
use colored::Colorize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Directory,
    File,
    Ignored,
}

/// Represents a node in the tree (either file or directory).
#[derive(Debug)]
struct TreeNode {
    name: String,
    children: Vec<Rc<RefCell<TreeNode>>>,
    marker: Marker,
}
impl TreeNode {
    fn new(name: String, marker: Marker) -> Self {
        Self {
            name,
            children: Vec::new(),
            marker,
        }
    }
}

/// Links every planned path under its parent, returning the node standing for `destination`.
fn build_tree(plan: &Plan, destination: &Path) -> Rc<RefCell<TreeNode>> {
    let root_name = destination
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| destination.display().to_string());

    let root = Rc::new(RefCell::new(TreeNode::new(root_name, Marker::Directory)));

    // keyed by path relative to the destination, the root being the empty path
    let mut lookup: HashMap<PathBuf, Rc<RefCell<TreeNode>>> = HashMap::new();
    lookup.insert(PathBuf::new(), Rc::clone(&root));

    let planned = plan.nodes.iter().map(|node| {
        let marker = match node.kind {
            NodeKind::Directory => Marker::Directory,
            NodeKind::File => Marker::File,
        };
        (&node.destination, marker)
    });
    let ignored = plan.ignored.iter().map(|path| (path, Marker::Ignored));

    for (rel_path, marker) in planned.chain(ignored) {
        // a directory may be listed more than once in an outline
        if lookup.contains_key(rel_path) {
            continue;
        }

        let parent_path = rel_path.parent().unwrap_or_else(|| Path::new(""));

        let parent_node = directory_node(&mut lookup, parent_path);

        let child_name = rel_path
            .file_name()
            .map(|os| os.to_string_lossy().to_string())
            .unwrap_or_else(|| rel_path.display().to_string());

        let new_child = Rc::new(RefCell::new(TreeNode::new(child_name, marker)));

        parent_node
            .borrow_mut()
            .children
            .push(Rc::clone(&new_child));

        lookup.insert(rel_path.clone(), new_child);
    }

    root
}

/// Returns the directory node for `rel_path`, linking any missing ancestors on the way.
///
/// Names with inner slashes stage `docs/api.md` without a separate `docs` node, and the preview
/// has to show the same tree that gets written.
fn directory_node(
    lookup: &mut HashMap<PathBuf, Rc<RefCell<TreeNode>>>,
    rel_path: &Path,
) -> Rc<RefCell<TreeNode>> {
    if let Some(node) = lookup.get(rel_path) {
        return Rc::clone(node);
    }

    let parent_path = rel_path.parent().unwrap_or_else(|| Path::new(""));
    let parent_node = directory_node(lookup, parent_path);

    let name = rel_path
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| rel_path.display().to_string());

    log::trace!("linking implicit directory: {}", rel_path.display());

    let node = Rc::new(RefCell::new(TreeNode::new(name, Marker::Directory)));
    parent_node.borrow_mut().children.push(Rc::clone(&node));
    lookup.insert(rel_path.to_path_buf(), Rc::clone(&node));

    node
}

/// Renders `node` and its children into `out`, one line per node.
fn render_tree(node: &Rc<RefCell<TreeNode>>, prefix: &str, is_last: bool, out: &mut Vec<String>) {
    let node_borrow = node.borrow();

    let connector = if is_last {
        "└── ".yellow()
    } else {
        "├── ".yellow()
    };
    let name = match node_borrow.marker {
        Marker::Directory => format!("{}/", node_borrow.name).blue(),
        Marker::File => node_borrow.name.green(),
        Marker::Ignored => format!("{} (ignored)", node_borrow.name).dimmed(),
    };
    out.push(format!("{}{}{}", prefix.yellow(), connector, name));

    let child_prefix = if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    let len = node_borrow.children.len();
    for (i, child) in node_borrow.children.iter().enumerate() {
        let last = i == len - 1;
        render_tree(child, &child_prefix, last, out);
    }
}

/// Returns the lines of the tree `plan` would create under `destination`.
pub fn tree_lines(plan: &Plan, destination: &Path) -> Vec<String> {
    let tree_root = build_tree(plan, destination);

    let mut lines = Vec::new();
    render_tree(&tree_root, "", true, &mut lines);

    lines
}

pub fn preview_as_tree(plan: &Plan, destination: &Path) {
    println!(
        "Legend: {} = (directory), {} = (file), {} = (ignored)",
        "blue".blue(),
        "green".green(),
        "dimmed".dimmed()
    );

    let fancy_prompt = format!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Preview".bold().bright_blue(),
    );

    println!("{}", fancy_prompt);

    for line in tree_lines(plan, destination) {
        println!("{}", line);
    }

    println!();
}
