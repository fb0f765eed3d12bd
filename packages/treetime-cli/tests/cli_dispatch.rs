use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const RTT_TABLE: &str = "name,date,divergence
A,2000.0,0.010
B,2005.0,0.015
C,2010.0,0.020
D,2020.0,0.030
";

const SUBCOMMANDS_LINE: &str = "Available subcommands: clock, plot, info, completions";

fn treetime() -> Command {
  Command::new(env!("CARGO_BIN_EXE_treetime"))
}

fn write_table(dir: &TempDir, filename: &str, contents: &str) -> PathBuf {
  let filepath = dir.path().join(filename);
  fs::write(&filepath, contents).expect("write input table");
  filepath
}

fn path_str(path: &Path) -> &str {
  path.to_str().expect("utf8 path")
}

#[test]
fn no_subcommand_is_usage_error() {
  treetime()
    .assert()
    .code(2)
    .stderr(predicate::str::contains(SUBCOMMANDS_LINE));
}

#[test]
fn unknown_subcommand_is_usage_error() {
  treetime()
    .arg("frobnicate")
    .assert()
    .code(2)
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("frobnicate").and(predicate::str::contains(SUBCOMMANDS_LINE)));
}

#[test]
fn only_global_flags_is_usage_error() {
  treetime()
    .arg("-v")
    .assert()
    .code(2)
    .stderr(predicate::str::contains(SUBCOMMANDS_LINE));
}

#[test]
fn malformed_subcommand_arguments_are_usage_error() {
  treetime()
    .arg("clock")
    .assert()
    .code(2)
    .stderr(predicate::str::contains("--dates"));
}

#[test]
fn help_goes_to_stdout_and_succeeds() {
  treetime()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("clock").and(predicate::str::contains("plot")));
}

#[test]
fn version_goes_to_stdout_and_succeeds() {
  treetime()
    .arg("--version")
    .assert()
    .success()
    .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_reports_headless_backend() {
  treetime()
    .arg("info")
    .assert()
    .success()
    .stdout(predicate::str::contains(r#""render_backend": "headless""#));
}

#[test]
fn clock_writes_model_to_stdout() {
  let dir = TempDir::new().expect("tempdir");
  let table = write_table(&dir, "rtt.csv", RTT_TABLE);

  treetime()
    .args(["clock", "--dates", path_str(&table)])
    .assert()
    .success()
    .stdout(predicate::str::contains(r#""clock_rate""#).and(predicate::str::contains(r#""num_tips": 4"#)));
}

#[test]
fn clock_draws_rtt_chart_to_file() {
  let dir = TempDir::new().expect("tempdir");
  let table = write_table(&dir, "rtt.csv", RTT_TABLE);
  let output = dir.path().join("out").join("clock.json");
  let chart = dir.path().join("out").join("rtt.txt");

  treetime()
    .args(["clock", "--dates", path_str(&table)])
    .args(["--output", path_str(&output)])
    .args(["--plot-rtt", path_str(&chart)])
    .assert()
    .success();

  assert!(fs::read_to_string(&output).expect("read clock model").contains("t_mrca"));
  assert!(!fs::read_to_string(&chart).expect("read chart").trim().is_empty());
}

#[test]
fn plot_writes_chart_without_terminal() {
  let dir = TempDir::new().expect("tempdir");
  let table = write_table(&dir, "rtt.tsv", &RTT_TABLE.replace(',', "\t"));
  let chart = dir.path().join("chart.txt");

  treetime()
    .args(["plot", "--input", path_str(&table), "--output", path_str(&chart)])
    .assert()
    .success();

  assert!(fs::read_to_string(&chart).expect("read chart").lines().count() > 1);
}

#[test]
fn plot_reads_standard_input() {
  treetime()
    .args(["plot", "--input", "-"])
    .write_stdin(RTT_TABLE)
    .assert()
    .success()
    .stdout(predicate::str::is_empty().not());
}

#[test]
fn handler_error_is_surfaced_with_nonzero_status() {
  let dir = TempDir::new().expect("tempdir");
  let missing = dir.path().join("missing.csv");

  treetime()
    .args(["plot", "--input", path_str(&missing)])
    .assert()
    .code(1)
    .stderr(predicate::str::contains("missing.csv"));
}

#[test]
fn clock_without_date_variation_fails() {
  let dir = TempDir::new().expect("tempdir");
  let table = write_table(&dir, "rtt.csv", "name,date,divergence\nA,2000.0,0.01\nB,2000.0,0.02\n");

  treetime()
    .args(["clock", "--dates", path_str(&table)])
    .assert()
    .code(1)
    .stderr(predicate::str::contains("No variation in sampling dates"));
}

#[test]
fn completions_are_generated_from_registry() {
  treetime()
    .args(["completions", "bash"])
    .assert()
    .success()
    .stdout(predicate::str::contains("treetime").and(predicate::str::contains("clock")));
}

#[test]
fn clock_with_overflowing_dates_fails() {
  let dir = TempDir::new().expect("tempdir");
  let table = write_table(&dir, "huge.csv", "name,date,divergence\nA,1e300,0.1\nB,2005,0.2\nC,2010,0.3\n");
  treetime()
    .args(["clock", "--dates", path_str(&table)])
    .assert()
    .code(1)
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("numerically unstable"));
}

#[test]
fn rust_log_applies_without_verbosity_flags() {
  treetime()
    .env("RUST_LOG", "debug")
    .arg("info")
    .assert()
    .success()
    .stderr(predicate::str::contains("Running subcommand 'info'"));
}

#[test]
fn verbosity_flags_override_rust_log() {
  treetime()
    .env("RUST_LOG", "debug")
    .args(["info", "-q"])
    .assert()
    .success()
    .stderr(predicate::str::contains("Running subcommand").not());
}

#[cfg(debug_assertions)]
#[test]
fn explicit_exit_status_reaches_the_process() {
  treetime().args(["exit-status", "--status", "3"]).assert().code(3);
  treetime().args(["exit-status", "--status", "0"]).assert().code(0);
  treetime().arg("exit-status").assert().code(0);
}

#[cfg(debug_assertions)]
#[test]
fn handler_panic_exits_with_101() {
  treetime()
    .args(["exit-status", "--panic"])
    .assert()
    .code(101)
    .stderr(predicate::str::contains("Panic requested with --panic"));
}

#[cfg(debug_assertions)]
#[test]
fn hidden_subcommand_is_not_offered() {
  treetime()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("exit-status").not());
}
