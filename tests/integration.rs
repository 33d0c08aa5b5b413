// Runs the `sprout` binary against outlines written into temp dirs and checks the trees it grows.
use std::{fs, path::Path};

use predicates::prelude::*;

fn write_outline(dir: &Path, text: &str) -> String {
    let path = dir.join("outline.txt");
    fs::write(&path, text).unwrap();
    path.display().to_string()
}

/// Every path under `root`, relative and slash-joined, directories marked with a trailing `/`.
fn snapshot(root: &Path) -> Vec<String> {
    let mut paths: Vec<String> = walkdir::WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| entry.unwrap())
        .map(|entry| {
            let relative = entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .components()
                .map(|c| c.as_os_str().to_string_lossy().to_string())
                .collect::<Vec<_>>()
                .join("/");
            if entry.file_type().is_dir() {
                format!("{}/", relative)
            } else {
                relative
            }
        })
        .collect();
    paths.sort();
    paths
}

fn sprout() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("sprout").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn creates_tree_from_outline() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_outline(dir.path(), "src/\n  main.py\n  utils.py\nREADME.md\n");
    let out = dir.path().join("out");

    sprout()
        .arg(&input)
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("create"));

    assert_eq!(
        snapshot(&out),
        vec!["README.md", "src/", "src/main.py", "src/utils.py"]
    );
    assert_eq!(fs::metadata(out.join("src/main.py")).unwrap().len(), 0);
}

#[test]
fn tree_glyphs_comments_and_shorthand() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_outline(
        dir.path(),
        "\
app/                     # the application
├── *.rs main lib
├── assets
│   ├── logo.png
│   └── style.css
└── docs/ notes.md
Cargo.toml
",
    );
    let out = dir.path().join("out");

    sprout().arg(&input).arg(&out).assert().success();

    assert_eq!(
        snapshot(&out),
        vec![
            "Cargo.toml",
            "app/",
            "app/assets/",
            "app/assets/style.css",
            "app/docs/",
            "app/lib.rs",
            "app/main.rs",
            "app/notes.md",
        ]
    );
}

#[test]
fn rerun_preserves_existing_content() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_outline(dir.path(), "src/\n  main.py\n");
    let out = dir.path().join("out");

    sprout().arg(&input).arg(&out).assert().success();
    fs::write(out.join("src/main.py"), "print('kept')\n").unwrap();

    sprout()
        .arg(&input)
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("exists"));

    assert_eq!(
        fs::read_to_string(out.join("src/main.py")).unwrap(),
        "print('kept')\n"
    );
}

#[test]
fn dry_run_creates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_outline(dir.path(), "src/\n  main.py\n  logo.png\n");
    let out = dir.path().join("out");

    sprout()
        .arg(&input)
        .arg(&out)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("main.py"))
        .stdout(predicate::str::contains("logo.png (ignored)"));

    assert!(!out.exists());
}

#[test]
fn dry_run_shows_directories_implied_by_nested_names() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_outline(dir.path(), "docs/api.md\n");
    let out = dir.path().join("out");

    sprout()
        .arg(&input)
        .arg(&out)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("docs/"))
        .stdout(predicate::str::contains("api.md"));

    assert!(!out.exists());
}

#[test]
fn config_adds_ignored_extensions() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_outline(dir.path(), "design.psd\nnotes.txt\n");
    let config = dir.path().join("sprout.toml");
    fs::write(&config, "[ignore]\nextensions = [\"psd\"]\n").unwrap();
    let out = dir.path().join("out");

    sprout()
        .arg(&input)
        .arg(&out)
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    assert_eq!(snapshot(&out), vec!["notes.txt"]);
}

#[test]
fn invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_outline(dir.path(), "notes.txt\n");
    let config = dir.path().join("sprout.toml");
    fs::write(&config, "[ignore\n").unwrap();

    sprout()
        .arg(&input)
        .arg(dir.path().join("out"))
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("sprout::config::parse_toml"));
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();

    sprout()
        .arg(dir.path().join("nope.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading a file"));
}

#[test]
fn blocked_path_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_outline(dir.path(), "a.txt\nsrc/\n  main.py\nz.txt\n");
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();
    fs::write(out.join("src"), "not a directory").unwrap();

    sprout().arg(&input).arg(&out).assert().failure();

    assert!(out.join("a.txt").is_file());
    assert!(!out.join("z.txt").exists());
}

#[test]
fn library_scaffold_matches_cli() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_outline(dir.path(), "a\n  b\nc\n");
    let out = dir.path().join("out");

    let options = sprout::Options {
        output: out.clone(),
        ..sprout::Options::default()
    };
    let report = sprout::scaffold(&input, &options).unwrap().unwrap();

    assert_eq!(report.directories, 1);
    assert_eq!(report.files_created, 2);
    assert_eq!(snapshot(&out), vec!["a/", "a/b", "c"]);
}
