use reclaim::detect::{classify, CleanableKind};
use reclaim::scanner::{
    cleanable_children, dir_size, navigable_children, scan_recursive, SCAN_MAX_DEPTH,
};

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn make_node_modules(parent: &Path, payload: &str) -> PathBuf {
    let dir = parent.join("node_modules");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("package.json"), payload).unwrap();
    dir
}

#[test]
fn test_classify_venv_by_any_marker() {
    let root = tempdir().unwrap();

    let cfg = root.path().join("cfg_env");
    fs::create_dir_all(&cfg).unwrap();
    fs::write(cfg.join("pyvenv.cfg"), "home = /usr/bin\n").unwrap();
    assert_eq!(classify(&cfg), Some(CleanableKind::VirtualEnv));

    let unix = root.path().join("unix_env");
    fs::create_dir_all(unix.join("bin")).unwrap();
    fs::write(unix.join("bin/activate"), "# activate\n").unwrap();
    assert_eq!(classify(&unix), Some(CleanableKind::VirtualEnv));

    let windows = root.path().join("win_env");
    fs::create_dir_all(windows.join("Scripts")).unwrap();
    fs::write(windows.join("Scripts/activate.bat"), "@echo off\n").unwrap();
    assert_eq!(classify(&windows), Some(CleanableKind::VirtualEnv));
}

#[test]
fn test_classify_node_modules_by_name_only() {
    let root = tempdir().unwrap();
    let dir = make_node_modules(root.path(), "{}");
    assert_eq!(classify(&dir), Some(CleanableKind::DependencyCache));

    // Same contents under another name are not cleanable.
    let renamed = root.path().join("modules");
    fs::rename(&dir, &renamed).unwrap();
    assert_eq!(classify(&renamed), None);
}

#[test]
fn test_classify_rejects_files_and_plain_dirs() {
    let root = tempdir().unwrap();

    let file = root.path().join("node_modules");
    fs::write(&file, "not a directory").unwrap();
    assert_eq!(classify(&file), None);

    let plain = root.path().join("src");
    fs::create_dir_all(&plain).unwrap();
    assert_eq!(classify(&plain), None);

    assert_eq!(classify(&root.path().join("missing")), None);
}

#[test]
fn test_dir_size_sums_nested_files() {
    let root = tempdir().unwrap();
    fs::write(root.path().join("a.txt"), "12345").unwrap();
    let sub = root.path().join("sub");
    fs::create_dir_all(&sub).unwrap();
    fs::write(sub.join("b.txt"), "1234567").unwrap();

    assert_eq!(dir_size(root.path()), 12);
    assert_eq!(dir_size(&root.path().join("missing")), 0);
}

#[test]
fn test_cleanable_children_finds_direct_entries() {
    let root = tempdir().unwrap();

    let venv = root.path().join(".venv");
    fs::create_dir_all(&venv).unwrap();
    fs::write(venv.join("pyvenv.cfg"), "home = /usr\n").unwrap();
    make_node_modules(root.path(), "{}");
    fs::create_dir_all(root.path().join("src")).unwrap();
    fs::write(root.path().join("README.md"), "readme").unwrap();

    let found = cleanable_children(root.path());
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|entry| entry.size > 0));
    assert!(found
        .iter()
        .any(|entry| entry.kind == CleanableKind::VirtualEnv));
    assert!(found
        .iter()
        .any(|entry| entry.kind == CleanableKind::DependencyCache));
}

#[test]
fn test_cleanable_children_does_not_report_nested_entries() {
    let root = tempdir().unwrap();
    let project = root.path().join("project");
    fs::create_dir_all(&project).unwrap();
    make_node_modules(&project, "{}");

    assert!(cleanable_children(root.path()).is_empty());
}

#[test]
fn test_navigable_children_sorted_and_filtered() {
    let root = tempdir().unwrap();
    fs::create_dir_all(root.path().join("beta")).unwrap();
    fs::create_dir_all(root.path().join("alpha")).unwrap();
    make_node_modules(root.path(), "{}");
    fs::write(root.path().join("a_file"), "x").unwrap();

    let subdirs = navigable_children(root.path());
    let names: Vec<_> = subdirs
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["alpha", "beta"]);
}

#[test]
fn test_scan_counts_cleanable_once_without_descending() {
    let root = tempdir().unwrap();
    let project = root.path().join("project");
    let venv = project.join("env");
    fs::create_dir_all(&venv).unwrap();
    fs::write(venv.join("pyvenv.cfg"), "home = /usr\n").unwrap();
    // A cache nested inside the venv must not be counted separately.
    make_node_modules(&venv, "nested payload");

    let result = scan_recursive(root.path(), SCAN_MAX_DEPTH);
    assert_eq!(result.count, 1);
    assert_eq!(result.bytes, dir_size(&venv));
}

#[test]
fn test_scan_with_zero_depth_inspects_root_children_only() {
    let root = tempdir().unwrap();
    let sub = root.path().join("sub");
    fs::create_dir_all(&sub).unwrap();
    make_node_modules(&sub, "{}");

    // The nested cache is one level below the root's direct children.
    assert_eq!(scan_recursive(root.path(), 0).count, 0);

    // A cleanable direct child is still seen at depth zero.
    make_node_modules(root.path(), "{}");
    assert_eq!(scan_recursive(root.path(), 0).count, 1);
}

#[test]
fn test_scan_stops_silently_past_depth_cap() {
    let root = tempdir().unwrap();

    // Build a chain deeper than the cap with a cache at the bottom.
    let mut deep = root.path().to_path_buf();
    for level in 0..=SCAN_MAX_DEPTH {
        deep = deep.join(format!("level{level}"));
    }
    fs::create_dir_all(&deep).unwrap();
    make_node_modules(&deep, "{}");

    let result = scan_recursive(root.path(), SCAN_MAX_DEPTH);
    assert_eq!(result, Default::default());

    // One level shallower and the same cache is found.
    let parent = deep.parent().unwrap();
    make_node_modules(parent, "{}");
    assert_eq!(scan_recursive(root.path(), SCAN_MAX_DEPTH).count, 1);
}
