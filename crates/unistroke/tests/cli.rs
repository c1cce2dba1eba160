#![cfg(feature = "cli")]

use std::f64::consts::TAU;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use unistroke::{GestureLibrary, GestureRecord, Point};

fn write_gesture(dir: &Path, name: &str, points: &[Point]) -> std::path::PathBuf {
    let path = unistroke::gesture_path(dir, name);
    GestureRecord::from_points(name, points)
        .write_json(&path)
        .expect("write gesture");
    path
}

fn circle(n: usize, r: f64, start: f64) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let t = start + TAU * i as f64 / n as f64;
            Point::new(r * t.cos(), r * t.sin())
        })
        .collect()
}

fn unistroke() -> Command {
    Command::cargo_bin("unistroke").expect("binary built")
}

#[test]
fn add_then_recognize() {
    let dir = tempfile::tempdir().expect("tempdir");
    let library = dir.path().join("library.json");
    let line = write_gesture(
        dir.path(),
        "line",
        &[Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
    );
    let round = write_gesture(dir.path(), "circle", &circle(64, 100.0, 0.0));

    for gesture in [&line, &round] {
        unistroke()
            .args(["add", "--library"])
            .arg(&library)
            .arg("--gesture")
            .arg(gesture)
            .assert()
            .success()
            .stdout(predicate::str::contains("added"));
    }

    let lib = GestureLibrary::load_json(&library).expect("library written");
    assert_eq!(lib.len(), 2);

    let probe = write_gesture(dir.path(), "probe", &circle(40, 70.0, 1.3));
    unistroke()
        .args(["recognize", "--all", "--library"])
        .arg(&library)
        .arg("--gesture")
        .arg(&probe)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Match: circle Confidence:"))
        .stdout(predicate::str::contains("line"));
}

#[test]
fn add_accepts_name_override() {
    let dir = tempfile::tempdir().expect("tempdir");
    let library = dir.path().join("library.json");
    let gesture = write_gesture(dir.path(), "gesture", &circle(32, 10.0, 0.0));

    unistroke()
        .args(["add", "--name", "ring", "--library"])
        .arg(&library)
        .arg("--gesture")
        .arg(&gesture)
        .assert()
        .success();

    let lib = GestureLibrary::load_json(&library).expect("library written");
    assert_eq!(lib.gestures[0].name, "ring");
}

#[test]
fn recognize_json_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let library = dir.path().join("library.json");
    let mut lib = GestureLibrary::default();
    lib.push(GestureRecord::from_points("circle", &circle(64, 100.0, 0.0)));
    lib.write_json(&library).expect("write library");
    let probe = write_gesture(dir.path(), "probe", &circle(64, 100.0, 0.0));

    let out = unistroke()
        .args(["recognize", "--json", "--library"])
        .arg(&library)
        .arg("--gesture")
        .arg(&probe)
        .output()
        .expect("run");
    assert!(out.status.success());

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json stdout");
    assert_eq!(report["best"]["name"], "circle");
    assert_eq!(report["best"]["index"], 0);
    assert!(report["best"]["score"].as_f64().expect("score") >= 0.99);
    assert!(report.get("scores").is_none());
}

#[test]
fn degenerate_gesture_is_not_added() {
    let dir = tempfile::tempdir().expect("tempdir");
    let library = dir.path().join("library.json");
    let dot = write_gesture(dir.path(), "dot", &[Point::new(4.0, 4.0)]);

    unistroke()
        .args(["add", "--library"])
        .arg(&library)
        .arg("--gesture")
        .arg(&dot)
        .assert()
        .failure()
        .stderr(predicate::str::contains("degenerate path"));
    assert!(!library.exists());
}

#[test]
fn empty_library_fails_recognition() {
    let dir = tempfile::tempdir().expect("tempdir");
    let library = dir.path().join("library.json");
    GestureLibrary::default()
        .write_json(&library)
        .expect("write library");
    let probe = write_gesture(dir.path(), "probe", &circle(16, 5.0, 0.0));

    unistroke()
        .args(["recognize", "--library"])
        .arg(&library)
        .arg("--gesture")
        .arg(&probe)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no templates registered"));
}

#[test]
fn verbosity_controls_debug_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let library = dir.path().join("library.json");
    let mut lib = GestureLibrary::default();
    lib.push(GestureRecord::from_points("circle", &circle(64, 100.0, 0.0)));
    lib.write_json(&library).expect("write library");
    let probe = write_gesture(dir.path(), "sample", &circle(48, 60.0, 0.4));

    unistroke()
        .env_remove("RUST_LOG")
        .args(["-vv", "recognize", "--library"])
        .arg(&library)
        .arg("--gesture")
        .arg(&probe)
        .assert()
        .success()
        .stderr(predicate::str::contains("template #0 'circle'"));

    unistroke()
        .env_remove("RUST_LOG")
        .args(["recognize", "--library"])
        .arg(&library)
        .arg("--gesture")
        .arg(&probe)
        .assert()
        .success()
        .stderr(predicate::str::contains("template #0").not());
}
