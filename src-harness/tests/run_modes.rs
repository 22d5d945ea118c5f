use std::fs;
use std::path::Path;

use lsgo::datagen::generate_all;
use lsgo_env::data_dir;
use lsgo_harness::modes::{BASIC_FUNS_FILE, RANDOM_BY_FUN_FILE, RANDOM_FILE};
use lsgo_harness::{Harness, TestMode};
use tempfile::TempDir;

fn setup() -> TempDir {
    let base = tempfile::tempdir().unwrap();
    generate_all(&data_dir(base.path()), 2013).unwrap();
    base
}

fn run(base: &Path, mode: TestMode, samples: usize, seed: u64) -> String {
    let mut harness = Harness::new(&data_dir(base), base, samples, 18, Some(seed));
    let mut out = Vec::new();
    harness.run(mode, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_optimum_mode() {
    let base = setup();
    let out = run(base.path(), TestMode::Optimum, 1, 0);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "============= Optimum =============");
    assert_eq!(lines.len(), 16);
    assert_eq!(lines[1], "F1: 0");
    // The raw shift file is not the optimum of F12: rosenbrock at zero.
    assert_eq!(lines[12], "F12: 999");
    assert!(lines[14].starts_with("F14: "));
}

#[test]
fn test_zero_mode() {
    let base = setup();
    let out = run(base.path(), TestMode::Zero, 1, 0);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "============== Zero ===============");
    assert_eq!(lines[1], "Precision = 2.220446049250313080847263336181640625E-16");
    assert_eq!(lines.len(), 17);
    for (k, line) in lines[2..].iter().enumerate() {
        assert!(line.starts_with(&format!("F{}: ", k + 1)), "{}", line);
    }
}

#[test]
fn test_basic_funs_file_layout() {
    let base = setup();
    let out = run(base.path(), TestMode::BasicFuns, 2, 5);
    assert!(out.starts_with("== Basic Functions (samples: 2) =="));
    assert!(out.contains("[Function: rosenbrock]"));

    let lines = read_lines(&base.path().join(BASIC_FUNS_FILE));
    assert_eq!(lines[0], "2");
    assert_eq!(lines.len(), 1 + 6 * 2 * 1001);
    // the first sample is a unit vector
    for line in &lines[1..1001] {
        let v: f64 = line.parse().unwrap();
        assert!((0.0..1.0).contains(&v), "{}", v);
    }
}

#[test]
fn test_random_files_replay_through_the_suite() {
    let base = setup();
    run(base.path(), TestMode::Random, 2, 9);

    let lines = read_lines(&base.path().join(RANDOM_FILE));
    assert_eq!(lines[0], "2");
    assert_eq!(lines.len(), 1 + 2 * (1000 + 15));

    // Re-evaluate F2 from the written vector and compare with the written value.
    let u: Vec<f64> = lines[1..1001].iter().map(|l| l.parse().unwrap()).collect();
    let x: ndarray::Array1<f64> = u.iter().map(|v| -5.0 + v * 10.0).collect();
    let mut suite = lsgo::Suite::new(data_dir(base.path()));
    let f2 = suite.compute(lsgo::FunctionId::F2, &x).unwrap();
    let written: f64 = lines[1001 + 1].parse().unwrap();
    assert!(
        ((f2 - written) / written).abs() < 1e-15,
        "F2 = {}, written {}",
        f2,
        written
    );
}

#[test]
fn test_random_by_fun_is_reproducible() {
    let a = setup();
    let b = setup();
    let out_a = run(a.path(), TestMode::RandomByFun, 1, 77);
    let out_b = run(b.path(), TestMode::RandomByFun, 1, 77);
    assert_eq!(out_a, out_b);
    assert!(out_a.contains("[Function: 15]"));

    let lines = read_lines(&a.path().join(RANDOM_BY_FUN_FILE));
    assert_eq!(lines.len(), 1 + 15 * 1001);
    assert_eq!(lines, read_lines(&b.path().join(RANDOM_BY_FUN_FILE)));
}

#[test]
fn test_missing_data_is_reported() {
    let base = tempfile::tempdir().unwrap();
    let mut harness = Harness::new(&data_dir(base.path()), base.path(), 1, 18, Some(1));
    let mut out = Vec::new();
    let err = harness.run(TestMode::Zero, &mut out).unwrap_err();
    assert!(err.to_string().contains("F1-xopt.txt"), "{}", err);
}
