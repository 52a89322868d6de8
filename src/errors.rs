use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No rule to make target '{0}'")]
    UnknownTarget(String),

    #[error("No rule to make target '{prerequisite}', needed by '{needed_by}'")]
    NoRule {
        prerequisite: String,
        needed_by: String,
    },

    #[error("Circular dependency: {}", .0.join(" -> "))]
    DependencyCycle(Vec<String>),

    #[error("No files in '{}' match pattern '{pattern}'", .directory.display())]
    NoFilesMatched { pattern: String, directory: PathBuf },

    #[error("Invalid variable assignment '{0}', expected NAME=VALUE")]
    InvalidAssignment(String),

    #[error("Variable '{0}' is empty")]
    EmptyVariable(String),

    #[error(transparent)]
    InvalidPattern(#[from] globset::Error),

    #[error("Cannot execute '{program}': {source}")]
    SpawnFailed {
        program: String,
        source: std::io::Error,
    },

    #[error("Target '{target}' failed{}", exit_code_suffix(.code))]
    ActionFailed { target: String, code: Option<i32> },

    #[error(transparent)]
    SerializationError(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The exit code the runner should terminate with for this error.
    ///
    /// Failures of the invoked tools propagate their own exit code, everything
    /// else (and tools killed by a signal) maps to `2`.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ActionFailed {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 2,
        }
    }
}

fn exit_code_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {code}"),
        None => " (terminated by signal)".to_string(),
    }
}
