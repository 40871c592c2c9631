use std::process::{Command, Output};

fn loopbench(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_loopbench"))
        .args(args)
        .env_remove("LOOPBENCH_OUT_DIR")
        .output()
        .expect("failed to launch loopbench")
}

fn exit_code(args: &[&str]) -> i32 {
    loopbench(args).status.code().expect("terminated by signal")
}

// ============================================================
// Usage and validation errors exit with status 1
// ============================================================

#[test]
fn test_wrong_argument_count() {
    assert_eq!(exit_code(&[]), 1);
    assert_eq!(exit_code(&["run", "2", "2"]), 1);
    assert_eq!(exit_code(&["run", "2", "2", "2", "2"]), 1);
    assert_eq!(exit_code(&["run", "2", "x", "2"]), 1);
}

#[test]
fn test_non_positive_dimensions() {
    assert_eq!(exit_code(&["run", "0", "2", "2"]), 1);
    assert_eq!(exit_code(&["run", "-3", "2", "2"]), 1);
    assert_eq!(exit_code(&["run", "2", "2", "-1"]), 1);
}

#[test]
fn test_bad_suite_config() {
    assert_eq!(exit_code(&["suite", "--runs", "0"]), 1);
    assert_eq!(exit_code(&["suite", "--sizes", "0"]), 1);
}

#[test]
fn test_report_dir_missing() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");
    let out = loopbench(&[
        "suite",
        "--sizes",
        "2",
        "--runs",
        "1",
        "--out-dir",
        missing.to_str().unwrap(),
    ]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!String::from_utf8_lossy(&out.stderr).is_empty());
}

// ============================================================
// Successful invocations
// ============================================================

#[test]
fn test_help_exits_zero() {
    assert_eq!(exit_code(&["--help"]), 0);
}

#[test]
fn test_single_run_small_problem() {
    let out = loopbench(&["--seed", "1", "run", "2", "2", "2"]);
    assert_eq!(out.status.code(), Some(0));

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.matches("Version ").count(), 3);
    for order in ["ijk", "jki", "kji"] {
        assert!(stdout.contains(&format!("Result C ({}):", order)), "{}", stdout);
    }
    assert!(stdout.contains("Matrix A:"));
    assert!(stdout.contains("Matrix B:"));
}

#[test]
fn test_suite_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let out = loopbench(&[
        "--seed",
        "3",
        "suite",
        "--sizes",
        "2,3",
        "--runs",
        "1",
        "--out-dir",
        dir.path().to_str().unwrap(),
    ]);
    assert_eq!(out.status.code(), Some(0));
    assert!(dir.path().join("results_2.csv").exists());
    assert!(dir.path().join("results_3.csv").exists());
}
