use imgdedupe::dedupe::{DedupeOptions, Deduplicator, RunSummary};
use imgdedupe::report::ConsoleReporter;
use imgdedupe::scanner::NamePattern;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

/// Root with one duplicate pair, `sub/` with another.
fn scenario_c() -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("IMG_0001.jpg"), "root").unwrap();
    fs::write(dir.path().join("IMG_0001 (1).jpg"), "root").unwrap();

    let sub = dir.path().join("sub");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("IMG_0002.jpg"), "sub").unwrap();
    fs::write(sub.join("IMG_0002 (1).jpg"), "sub").unwrap();
    dir
}

fn run(dir: &Path, recursive: bool) -> RunSummary {
    let options = DedupeOptions {
        recursive,
        ..Default::default()
    };
    let mut dedupe = Deduplicator::new(
        NamePattern::camera_and_uuid(),
        options,
        ConsoleReporter::new(Vec::new()),
    );
    dedupe.run(dir).unwrap()
}

#[test]
fn test_scenario_c_recursive_resolves_both() {
    let dir = scenario_c();

    let summary = run(dir.path(), true);

    assert!(!dir.path().join("IMG_0001 (1).jpg").exists());
    assert!(!dir.path().join("sub/IMG_0002 (1).jpg").exists());
    assert!(dir.path().join("IMG_0001.jpg").exists());
    assert!(dir.path().join("sub/IMG_0002.jpg").exists());
    assert_eq!(summary.directories_scanned, 2);
    assert_eq!(summary.files_removed, 2);
}

#[test]
fn test_scenario_c_flat_resolves_root_only() {
    let dir = scenario_c();

    let summary = run(dir.path(), false);

    assert!(!dir.path().join("IMG_0001 (1).jpg").exists());
    assert!(dir.path().join("sub/IMG_0002 (1).jpg").exists());
    assert_eq!(summary.directories_scanned, 1);
}

#[test]
fn test_duplicates_across_directories_are_kept() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir(&sub).unwrap();
    fs::write(dir.path().join("IMG_0001.jpg"), "same").unwrap();
    fs::write(sub.join("IMG_0001.jpg"), "same").unwrap();

    let summary = run(dir.path(), true);

    assert!(dir.path().join("IMG_0001.jpg").exists());
    assert!(sub.join("IMG_0001.jpg").exists());
    assert_eq!(summary.files_removed, 0);
}

#[test]
fn test_deep_tree() {
    let dir = tempdir().unwrap();
    let mut path = dir.path().to_path_buf();
    for depth in 0..40 {
        path = path.join(format!("level_{depth}"));
    }
    fs::create_dir_all(&path).unwrap();
    fs::write(path.join("IMG_0001.jpg"), "deep").unwrap();
    fs::write(path.join("IMG_0001 (1).jpg"), "deep").unwrap();

    let summary = run(dir.path(), true);

    assert_eq!(summary.directories_scanned, 41);
    assert!(!path.join("IMG_0001 (1).jpg").exists());
}

#[cfg(unix)]
#[test]
fn test_symlinked_directories_not_followed() {
    let dir = tempdir().unwrap();
    let outside = tempdir().unwrap();
    fs::write(outside.path().join("IMG_0001.jpg"), "x").unwrap();
    fs::write(outside.path().join("IMG_0001 (1).jpg"), "x").unwrap();
    std::os::unix::fs::symlink(outside.path(), dir.path().join("link")).unwrap();

    let summary = run(dir.path(), true);

    assert_eq!(summary.directories_scanned, 1);
    assert!(outside.path().join("IMG_0001 (1).jpg").exists());
}
