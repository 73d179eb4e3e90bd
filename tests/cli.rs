//! Drives the `imgroot` binary through its standard input.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs::{self, File};

#[test]
fn echo_runs_and_prompts_again() {
    let mut command = cargo_bin_cmd!("imgroot");
    command
        .write_stdin("echo hello\next\n")
        .assert()
        .success()
        .stdout("imGroot:> hello\nimGroot:> ");
}

#[test]
fn cwd_list_ext_session() {
    let work = tempfile::tempdir().unwrap();
    let listed = tempfile::tempdir().unwrap();
    File::create(listed.path().join("one")).unwrap();
    File::create(listed.path().join("two")).unwrap();
    let cwd = fs::canonicalize(work.path()).unwrap();

    let mut command = cargo_bin_cmd!("imgroot");
    let assert = command
        .current_dir(work.path())
        .write_stdin(format!("cwd\nlist {}\next\n", listed.path().display()))
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let body = stdout.replace("imGroot:> ", "");
    let mut lines = body.lines();
    assert_eq!(lines.next(), Some(cwd.to_str().unwrap()));
    assert_eq!(lines.next(), Some("."));
    assert_eq!(lines.next(), Some(".."));
    let mut rest: Vec<&str> = lines.collect();
    rest.sort_unstable();
    assert_eq!(rest, ["one", "two"]);
}

#[test]
fn failed_commands_keep_the_session_alive() {
    let mut command = cargo_bin_cmd!("imgroot");
    command
        .write_stdin("cdir\ncdir nonexistent-path-xyz\nlist /nonexistent-path-xyz\ncwd\next\n")
        .assert()
        .success()
        .stderr(contains("expecting argument for \"cdir\""))
        .stderr(contains("nonexistent-path-xyz"))
        .stdout(predicate::str::ends_with("imGroot:> "))
        .stdout(predicate::str::contains("/"));
}

#[test]
fn end_of_input_exits_successfully() {
    let mut command = cargo_bin_cmd!("imgroot");
    command
        .write_stdin("help\n")
        .assert()
        .success()
        .stdout(contains("\t\t\t\t cdir\n"))
        .stdout(contains("\t\t\t\t list\n"));
}

#[test]
fn custom_prompt_option() {
    let mut command = cargo_bin_cmd!("imgroot");
    command
        .args(["--prompt", "% "])
        .write_stdin("ext\n")
        .assert()
        .success()
        .stdout("% ");
}

#[test]
fn quiet_failures_leave_stderr_empty() {
    let mut command = cargo_bin_cmd!("imgroot");
    command
        .write_stdin("list /nonexistent-path-xyz\nlist /nonexistent-path-xyz extra\next\n")
        .assert()
        .success()
        .stdout("imGroot:> imGroot:> imGroot:> ")
        .stderr(predicate::str::is_empty());
}

#[test]
fn builtin_operands_are_never_flags() {
    let work = tempfile::tempdir().unwrap();
    fs::create_dir(work.path().join("-dashdir")).unwrap();
    let expected = fs::canonicalize(work.path().join("-dashdir")).unwrap();

    let mut command = cargo_bin_cmd!("imgroot");
    command
        .current_dir(work.path())
        .write_stdin("help -v\ncdir -dashdir\ncwd\next\n")
        .assert()
        .success()
        .stdout(contains("\t\t\t\t cwd\n"))
        .stdout(contains(format!("{}\n", expected.display())))
        .stderr(predicate::str::is_empty());
}
