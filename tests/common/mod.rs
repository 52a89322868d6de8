#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

pub const DEMO_C: &str =
    "#include <stdio.h>\n\nint main(void)\n{\n    puts(\"demo\");\n    return 0;\n}\n";

/// A working directory laid out like the demo project: `demo.c`, a couple of
/// Python modules and a `tests/` directory with a check module.
pub fn demo_project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("demo.c"), DEMO_C).unwrap();
    fs::write(
        dir.path().join("utils.py"),
        "def format_ranges(numbers):\n    return ''\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("cparser.py"),
        "from utils import format_ranges\n",
    )
    .unwrap();
    fs::create_dir(dir.path().join("tests")).unwrap();
    fs::write(dir.path().join("tests/utils_check.py"), "import unittest\n").unwrap();
    dir
}

/// Same as [`demo_project`] but without the C source.
pub fn project_without_source() -> TempDir {
    let dir = demo_project();
    fs::remove_file(dir.path().join("demo.c")).unwrap();
    dir
}

pub fn binary_exists(dir: &Path) -> bool {
    dir.join("demo").exists()
}
