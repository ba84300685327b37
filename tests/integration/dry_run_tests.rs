use imgdedupe::dedupe::{DedupeOptions, Deduplicator};
use imgdedupe::report::ConsoleReporter;
use imgdedupe::scanner::NamePattern;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

fn scenario_a() -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("IMG_0001.jpg"), "A").unwrap();
    fs::write(dir.path().join("IMG_0001 (1).jpg"), "A").unwrap();
    fs::write(dir.path().join("IMG_0002.jpg"), "B").unwrap();
    dir
}

fn report(dir: &Path, dry_run: bool) -> String {
    let options = DedupeOptions {
        verbose: true,
        dry_run,
        ..Default::default()
    };
    let mut dedupe = Deduplicator::new(
        NamePattern::camera_and_uuid(),
        options,
        ConsoleReporter::new(Vec::new()),
    );
    dedupe.run(dir).unwrap();
    String::from_utf8(dedupe.into_reporter().into_inner()).unwrap()
}

#[test]
fn test_scenario_b_dry_run_keeps_files() {
    let dir = scenario_a();

    report(dir.path(), true);

    assert!(dir.path().join("IMG_0001.jpg").exists());
    assert!(dir.path().join("IMG_0001 (1).jpg").exists());
    assert!(dir.path().join("IMG_0002.jpg").exists());
}

#[test]
fn test_dry_run_report_matches_real_run() {
    let dry = scenario_a();
    let real = scenario_a();

    let dry_output = report(dry.path(), true);
    let real_output = report(real.path(), false);

    let normalize = |output: &str, root: &Path| output.replace(&root.display().to_string(), "<root>");
    assert_eq!(
        normalize(&dry_output, dry.path()),
        normalize(&real_output, real.path())
    );
}

#[test]
fn test_dry_run_is_repeatable() {
    let dir = scenario_a();

    let first = report(dir.path(), true);
    let second = report(dir.path(), true);

    assert_eq!(first, second);
}
