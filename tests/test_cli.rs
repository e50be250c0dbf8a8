//! Integration tests for the pathmin binary
//!
//! Each test points --config at an empty file so a config in the user's
//! home directory cannot change the outcome.
#![cfg(unix)]

mod common;
use common::TestBinDirs;

use pathmin::core::{join_dirs, PATH_SEPARATOR};
use std::path::PathBuf;
use std::process::{Command, Output};

fn empty_config(bins: &TestBinDirs) -> PathBuf {
    let path = bins.root().join("config.toml");
    std::fs::write(&path, "").expect("Failed to write config");
    path
}

fn run_pathmin(bins: &TestBinDirs, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pathmin"))
        .arg("--config")
        .arg(empty_config(bins))
        .args(args)
        .env_remove("PATHMIN_LIMIT")
        .env_remove("PATHMIN_LOG")
        .output()
        .expect("Failed to run pathmin")
}

#[test]
fn test_prints_minimized_value() {
    let bins = TestBinDirs::new().expect("Failed to create temp dirs");
    bins.add_executable("b", "tool").unwrap();
    let a = bins.dir("a").unwrap();
    let b = bins.dir("b").unwrap();
    let c = bins.dir("c").unwrap();
    let value = join_dirs(&[a.clone(), b.clone(), a, c]);

    let output = run_pathmin(&bins, &["--path", &value, "--check", "tool"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout), format!("{b}\n"));
}

#[test]
fn test_reads_named_variable() {
    let bins = TestBinDirs::new().expect("Failed to create temp dirs");
    bins.add_executable("p", "x").unwrap();
    bins.add_executable("q", "y").unwrap();
    let p = bins.dir("p").unwrap();
    let q = bins.dir("q").unwrap();
    let r = bins.dir("r").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_pathmin"))
        .arg("--config")
        .arg(empty_config(&bins))
        .args(["--var", "PATHMIN_TEST_DIRS", "x", "y"])
        .env("PATHMIN_TEST_DIRS", join_dirs(&[r, p.clone(), q.clone()]))
        .output()
        .expect("Failed to run pathmin");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, format!("{p}{PATH_SEPARATOR}{q}\n"));
    assert!(!stdout.trim_end().ends_with(PATH_SEPARATOR));
}

#[test]
fn test_no_commands_returns_deduplicated_input() {
    let bins = TestBinDirs::new().expect("Failed to create temp dirs");
    let a = bins.dir("a").unwrap();
    let b = bins.dir("b").unwrap();
    let value = join_dirs(&[a.clone(), b.clone(), a.clone()]);

    let output = run_pathmin(&bins, &["--path", &value]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("{}\n", join_dirs(&[a, b]))
    );
}

#[test]
fn test_loop_limit_exits_non_zero() {
    let bins = TestBinDirs::new().expect("Failed to create temp dirs");
    bins.add_executable("b", "tool").unwrap();
    let value = join_dirs(&[
        bins.dir("a").unwrap(),
        bins.dir("b").unwrap(),
        bins.dir("c").unwrap(),
    ]);

    let output = run_pathmin(&bins, &["--path", &value, "--limit", "1", "tool"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("loop limit"));
}

#[test]
fn test_missing_variable_fails() {
    let bins = TestBinDirs::new().expect("Failed to create temp dirs");
    let output = run_pathmin(&bins, &["--var", "PATHMIN_TEST_UNSET_VARIABLE", "ls"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("PATHMIN_TEST_UNSET_VARIABLE"));
}

#[test]
fn test_hide_flag() {
    let bins = TestBinDirs::new().expect("Failed to create temp dirs");
    bins.add_executable("wrap", "cc").unwrap();
    bins.add_executable("usr", "cc").unwrap();
    bins.add_executable("usr", "ld").unwrap();
    let wrap = bins.dir("wrap").unwrap();
    let usr = bins.dir("usr").unwrap();
    let value = join_dirs(&[wrap.clone(), usr.clone()]);

    // hiding the wrapper directory's extra tool leaves cc resolving from usr
    bins.add_executable("wrap", "wrapper").unwrap();
    let output = run_pathmin(&bins, &["--path", &value, "--hide", "wrapper", "--check", "cc", "ld"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout), format!("{usr}\n"));
}

#[test]
fn test_config_file_supplies_commands() {
    let bins = TestBinDirs::new().expect("Failed to create temp dirs");
    bins.add_executable("b", "tool").unwrap();
    let value = join_dirs(&[bins.dir("a").unwrap(), bins.dir("b").unwrap()]);
    let config = bins.root().join("pathmin.toml");
    std::fs::write(&config, "commands = [\"tool\"]\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_pathmin"))
        .arg("--config")
        .arg(&config)
        .args(["--path", &value, "-q"])
        .env_remove("PATHMIN_LOG")
        .output()
        .expect("Failed to run pathmin");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("{}\n", bins.dir("b").unwrap())
    );
}
