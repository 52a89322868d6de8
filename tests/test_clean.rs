use demake::test_utils::RecordingRunner;
use demake::{Buildfile, Executor, Variables, Variant};

mod common;

#[test]
fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let project = common::demo_project();
    let buildfile = Buildfile::new(Variant::Full);
    let variables = Variables::default();
    let runner = RecordingRunner::new();
    let executor = Executor::new(&buildfile, &variables, &runner, project.path());

    executor.run(&["build"])?;
    assert!(common::binary_exists(project.path()));

    executor.run(&["clean"])?;
    assert!(!common::binary_exists(project.path()));
    // the source is left alone
    assert!(project.path().join("demo.c").exists());

    // Idempotent: cleaning again succeeds and still removes nothing else
    let report = executor.run(&["clean"])?;
    assert_eq!(report.executed, vec!["clean"]);
    assert_eq!(runner.removed().len(), 2);
    assert!(runner.programs().iter().all(|program| program == "cc"));

    Ok(())
}

#[test]
fn clean_then_build_rebuilds() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let project = common::demo_project();
    let buildfile = Buildfile::new(Variant::Lean);
    let variables = Variables::default();
    let runner = RecordingRunner::new();
    let executor = Executor::new(&buildfile, &variables, &runner, project.path());

    executor.run(&["build"])?;
    executor.run(&["clean", "build"])?;

    assert_eq!(runner.programs(), vec!["cc", "cc"]);
    assert!(common::binary_exists(project.path()));
    Ok(())
}
