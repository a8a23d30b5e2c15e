//! End-to-end tests for the `starwars-namegen` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn namegen() -> Command {
	Command::cargo_bin("starwars-namegen").unwrap()
}

fn stdout_of(args: &[&str]) -> String {
	let output = namegen().args(args).output().unwrap();
	assert!(output.status.success(), "{args:?} failed");
	String::from_utf8(output.stdout).unwrap()
}

#[test]
fn prints_one_name_by_default() {
	let stdout = stdout_of(&[]);
	assert_eq!(stdout.lines().count(), 1);
	assert!(!stdout.trim().is_empty());
}

#[test]
fn multiple_prints_one_name_per_line() {
	let stdout = stdout_of(&["-m", "7", "-c", "2"]);
	let lines: Vec<&str> = stdout.lines().collect();
	assert_eq!(lines.len(), 7);
	for line in lines {
		assert_eq!(line.split('-').count(), 2, "{line}");
	}
}

#[test]
fn zero_multiple_prints_nothing() {
	namegen().args(["--multiple", "0"]).assert().success().stdout("");
}

#[test]
fn same_seed_same_output() {
	let args = ["--seed", "42", "-m", "5", "-f", "pascal", "-r", "uuid"];
	assert_eq!(stdout_of(&args), stdout_of(&args));
}

#[test]
fn different_seeds_give_different_output() {
	let first = stdout_of(&["--seed", "1", "-m", "5"]);
	let second = stdout_of(&["--seed", "2", "-m", "5"]);
	assert_ne!(first, second);
}

#[test]
fn negative_seed_is_accepted_and_reproducible() {
	let args = ["--seed", "-1", "-m", "3", "-r", "hex"];
	let first = stdout_of(&args);
	assert_eq!(first.lines().count(), 3);
	assert_eq!(first, stdout_of(&args));
	assert_eq!(stdout_of(&["-s", "-1", "-m", "3", "-r", "hex"]), first);
}

#[test]
fn help_lists_options() {
	namegen()
		.arg("--help")
		.assert()
		.success()
		.stdout(predicate::str::contains("--count"))
		.stdout(predicate::str::contains("--format"))
		.stdout(predicate::str::contains("--seed"));
}

#[test]
fn version_prints_package_version() {
	namegen()
		.arg("--version")
		.assert()
		.success()
		.stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn negative_count_is_clamped_to_one_word() {
	let stdout = stdout_of(&["-c", "-4", "-f", "space", "-s", "3"]);
	assert_eq!(stdout.trim_end().split(' ').count(), 1);
}

#[test]
fn large_count_is_clamped_to_five_words() {
	let stdout = stdout_of(&["--count", "12", "--format", "snake", "--seed", "3"]);
	let name = stdout.trim_end();
	assert!(name.starts_with("the_"), "{name}");
	assert_eq!(name.split('_').count(), 5);
}

#[test]
fn format_is_case_insensitive() {
	namegen().args(["-f", "SNAKE", "-c", "1"]).assert().success();
}

#[test]
fn invalid_format_is_rejected() {
	namegen()
		.args(["--format", "shouty"])
		.assert()
		.failure()
		.code(2)
		.stderr(predicate::str::contains("shouty"))
		.stderr(predicate::str::contains("kebab, snake, camel, pascal, space"));
}

#[test]
fn invalid_suffix_is_rejected() {
	namegen()
		.args(["--random", "emoji"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("none, digits, hex, symbol, uuid"));
}

#[test]
fn verbose_logs_to_stderr_only() {
	namegen()
		.args(["-v", "-c", "1", "-s", "1"])
		.env_remove("RUST_LOG")
		.assert()
		.success()
		.stdout(predicate::str::is_match(r"^[a-z]+\n$").unwrap())
		.stderr(predicate::str::contains("generating name"));
}
