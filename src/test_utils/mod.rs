//! Helpers to exercise the runner without spawning real tools.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::{CommandLine, ProcessRunner, Result};

/// A [`ProcessRunner`] that records what it is asked to do.
///
/// Every program succeeds unless told otherwise with
/// [`RecordingRunner::with_exit_code`]. Successful compiler invocations
/// (`-o <output>` in the arguments) create the output file, so freshness
/// checks behave like after a real build.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    exit_codes: HashMap<String, Option<i32>>,
    commands: Mutex<Vec<CommandLine>>,
    removed: Mutex<Vec<PathBuf>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exit_code(mut self, program: &str, code: Option<i32>) -> Self {
        self.exit_codes.insert(program.to_string(), code);
        self
    }

    pub fn commands(&self) -> Vec<CommandLine> {
        self.commands.lock().unwrap().clone()
    }

    /// Just the program of every recorded command, in order.
    pub fn programs(&self) -> Vec<String> {
        self.commands()
            .into_iter()
            .map(|command| command.program)
            .collect()
    }

    pub fn removed(&self) -> Vec<PathBuf> {
        self.removed.lock().unwrap().clone()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, command: &CommandLine, directory: &Path) -> Result<Option<i32>> {
        self.commands.lock().unwrap().push(command.clone());
        let code = self
            .exit_codes
            .get(&command.program)
            .copied()
            .unwrap_or(Some(0));
        if code == Some(0) {
            if let Some(output) = output_argument(command) {
                std::fs::write(directory.join(output), "")?;
            }
        }
        Ok(code)
    }

    fn remove(&self, path: &Path) -> Result<()> {
        self.removed.lock().unwrap().push(path.to_path_buf());
        crate::runner::remove_file_if_exists(path)
    }
}

fn output_argument(command: &CommandLine) -> Option<&str> {
    command
        .args
        .iter()
        .position(|arg| arg == "-o")
        .and_then(|position| command.args.get(position + 1))
        .map(String::as_str)
}
