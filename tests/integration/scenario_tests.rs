use imgdedupe::dedupe::{DedupeOptions, Deduplicator, RunSummary};
use imgdedupe::report::ConsoleReporter;
use imgdedupe::scanner::NamePattern;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn dedupe(dir: &Path, options: DedupeOptions) -> (RunSummary, String) {
    let mut dedupe = Deduplicator::new(
        NamePattern::camera_and_uuid(),
        options,
        ConsoleReporter::new(Vec::new()),
    );
    let summary = dedupe.run(dir).unwrap();
    let output = String::from_utf8(dedupe.into_reporter().into_inner()).unwrap();
    (summary, output)
}

fn verbose() -> DedupeOptions {
    DedupeOptions {
        verbose: true,
        ..Default::default()
    }
}

#[test]
fn test_scenario_a_basic_pair() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("IMG_0001.jpg"), "A").unwrap();
    fs::write(dir.path().join("IMG_0001 (1).jpg"), "A").unwrap();
    fs::write(dir.path().join("IMG_0002.jpg"), "B").unwrap();

    let (summary, output) = dedupe(dir.path(), verbose());

    assert!(dir.path().join("IMG_0001.jpg").exists());
    assert!(dir.path().join("IMG_0002.jpg").exists());
    assert!(!dir.path().join("IMG_0001 (1).jpg").exists());
    assert_eq!(summary.files_removed, 1);

    let keep_1 = format!("Keeping {}!", dir.path().join("IMG_0001.jpg").display());
    let keep_2 = format!("Keeping {}!", dir.path().join("IMG_0002.jpg").display());
    let remove = format!(
        "Removing {}...",
        dir.path().join("IMG_0001 (1).jpg").display()
    );
    assert!(output.lines().any(|l| l == keep_1));
    assert!(output.lines().any(|l| l == keep_2));
    assert!(output.lines().any(|l| l == remove));
}

#[test]
fn test_keeper_is_cleanest_name() {
    let dir = tempdir().unwrap();
    for name in ["IMG_1234 (2).jpg", "IMG_1234 (1).jpg", "IMG_1234.jpg"] {
        fs::write(dir.path().join(name), "same photo").unwrap();
    }

    dedupe(dir.path(), DedupeOptions::default());

    assert!(dir.path().join("IMG_1234.jpg").exists());
    assert!(!dir.path().join("IMG_1234 (1).jpg").exists());
    assert!(!dir.path().join("IMG_1234 (2).jpg").exists());
}

#[test]
fn test_scenario_d_same_prefix_different_content() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("IMG_0001.jpg"), "short").unwrap();
    fs::write(dir.path().join("IMG_0001 (1).jpg"), "much longer").unwrap();

    let (summary, _) = dedupe(dir.path(), DedupeOptions::default());

    assert!(dir.path().join("IMG_0001.jpg").exists());
    assert!(dir.path().join("IMG_0001 (1).jpg").exists());
    assert_eq!(summary.groups, 2);
    assert_eq!(summary.files_removed, 0);
}

#[test]
fn test_non_matching_files_untouched() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("IMG_0001.jpg"), "A").unwrap();
    fs::write(dir.path().join("notes.txt"), "A").unwrap();
    fs::write(dir.path().join("copy of IMG_0001.jpg"), "A").unwrap();

    let (summary, _) = dedupe(dir.path(), DedupeOptions::default());

    assert!(dir.path().join("notes.txt").exists());
    assert!(dir.path().join("copy of IMG_0001.jpg").exists());
    assert_eq!(summary.candidates, 1);
    assert_eq!(summary.files_removed, 0);
}

#[test]
fn test_uuid_named_duplicates() {
    let dir = tempdir().unwrap();
    let uuid = "1b4e28ba-2fa1-11d2-883f-0016d3cca427";
    fs::write(dir.path().join(format!("{uuid}.heic")), "live photo").unwrap();
    fs::write(dir.path().join(format!("{uuid} (1).heic")), "live photo").unwrap();

    dedupe(dir.path(), DedupeOptions::default());

    assert!(dir.path().join(format!("{uuid}.heic")).exists());
    assert!(!dir.path().join(format!("{uuid} (1).heic")).exists());
}

#[test]
fn test_second_run_is_noop() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("IMG_0001.jpg"), "A").unwrap();
    fs::write(dir.path().join("IMG_0001 (1).jpg"), "A").unwrap();
    fs::write(dir.path().join("IMG_0002.jpg"), "B").unwrap();
    fs::write(dir.path().join("IMG_0003.jpg"), "C").unwrap();
    fs::write(dir.path().join("IMG_0003 (1).jpg"), "C").unwrap();

    let (first, _) = dedupe(dir.path(), DedupeOptions::default());
    let (second, _) = dedupe(dir.path(), DedupeOptions::default());

    assert_eq!(first.files_removed, 2);
    assert_eq!(second.files_removed, 0);
    assert_eq!(second.groups, 3);
}

#[test]
fn test_keeper_content_preserved() {
    let dir = tempdir().unwrap();
    let content = vec![0xABu8; 200_000];
    fs::write(dir.path().join("IMG_0009.jpg"), &content).unwrap();
    fs::write(dir.path().join("IMG_0009 (1).jpg"), &content).unwrap();
    fs::write(dir.path().join("IMG_0009 (2).jpg"), &content).unwrap();

    let (summary, _) = dedupe(dir.path(), DedupeOptions::default());

    assert_eq!(fs::read(dir.path().join("IMG_0009.jpg")).unwrap(), content);
    assert_eq!(summary.bytes_reclaimed, 400_000);
}
