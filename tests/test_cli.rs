#![cfg(unix)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

mod common;

const FAKE_CC: &str = r#"
out=""
while [ $# -gt 0 ]; do
    if [ "$1" = "-o" ]; then
        shift
        out="$1"
    fi
    shift
done
echo "compiled" > "$out"
"#;

const FAKE_LINTER: &str = r#"
for file in "$@"; do
    if grep -q BAD "$file"; then
        echo "$file: lint violation"
        exit 3
    fi
done
"#;

fn demake(dir: &Path, args: &[&str]) -> Output {
    fs::write(dir.join("fake_cc.sh"), FAKE_CC).unwrap();
    fs::write(dir.join("fake_lint.sh"), FAKE_LINTER).unwrap();
    Command::new(env!("CARGO_BIN_EXE_demake"))
        .arg("-C")
        .arg(dir)
        .args(args)
        .env("CC", "sh fake_cc.sh")
        .env("LINTER", "sh fake_lint.sh")
        .env("PYTHON", "true")
        .env_remove("CFLAGS")
        .env_remove("PY_FILES")
        .env_remove("DEMAKE_VARIANT")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn default_goal_builds_and_lints() {
    let project = common::demo_project();

    let output = demake(project.path(), &[]);

    assert!(output.status.success(), "{output:?}");
    assert!(common::binary_exists(project.path()));
    let stdout = stdout(&output);
    assert!(stdout.contains("sh fake_cc.sh -Wall -Wextra -o demo demo.c"), "{stdout}");
    assert!(stdout.contains("true -m unittest discover -s tests -p '*_check.py'"), "{stdout}");
    assert!(stdout.contains("sh fake_lint.sh cparser.py utils.py"), "{stdout}");
}

#[test]
fn lint_violation_exit_code() {
    let project = common::demo_project();
    fs::write(project.path().join("bad.py"), "BAD = 1\n").unwrap();

    let output = demake(project.path(), &["lint", "build"]);

    assert_eq!(output.status.code(), Some(3), "{output:?}");
    assert!(!common::binary_exists(project.path()));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Target 'lint' failed with exit code 3"), "{stderr}");
}

#[test]
fn missing_source_fails() {
    let project = common::project_without_source();

    let output = demake(project.path(), &["build"]);

    assert_eq!(output.status.code(), Some(2), "{output:?}");
    assert!(!common::binary_exists(project.path()));
}

#[test]
fn clean_is_idempotent() {
    let project = common::demo_project();

    assert!(demake(project.path(), &["build"]).status.success());
    assert!(common::binary_exists(project.path()));

    assert!(demake(project.path(), &["clean"]).status.success());
    assert!(!common::binary_exists(project.path()));
    assert!(demake(project.path(), &["clean"]).status.success());
}

#[test]
fn command_line_assignment_overrides_environment() {
    let project = common::demo_project();

    let output = demake(project.path(), &["CC=sh fake_cc.sh --cli", "build"]);

    assert!(output.status.success(), "{output:?}");
    assert!(stdout(&output).contains("sh fake_cc.sh --cli -Wall -Wextra -o demo demo.c"));
}

#[test]
fn second_build_has_nothing_to_do() {
    let project = common::demo_project();

    assert!(demake(project.path(), &["build"]).status.success());
    let output = demake(project.path(), &["build"]);

    assert!(output.status.success());
    assert!(
        stdout(&output).contains("Nothing to be done for 'build'"),
        "{output:?}"
    );
}

#[test]
fn dry_run_builds_nothing() {
    let project = common::demo_project();

    let output = demake(project.path(), &["-n"]);

    assert!(output.status.success(), "{output:?}");
    assert!(stdout(&output).contains("-o demo demo.c"));
    assert!(!common::binary_exists(project.path()));
}

#[test]
fn list_targets() {
    let project = common::demo_project();

    let output = demake(project.path(), &["--variant", "lean", "--list"]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "all: build lint\nbuild: demo\ndemo: demo.c  (file)\nlint:\nclean:\n"
    );
}

#[test]
fn dotenv_file_provides_defaults() {
    let project = common::demo_project();
    fs::write(project.path().join(".env"), "CFLAGS=-O0\nPYTHON=false\n").unwrap();

    let output = demake(project.path(), &["all"]);

    // PYTHON from the real environment wins over the .env file
    assert!(output.status.success(), "{output:?}");
    assert!(stdout(&output).contains("sh fake_cc.sh -O0 -o demo demo.c"));
}
