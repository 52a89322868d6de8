// (C) Copyright IBM Corp. 2025.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::errors::{Error, Result};
use crate::runner::CommandLine;
use crate::utils::{expand_glob, is_glob};
use crate::variables::{Variables, CC, CFLAGS, LINTER, PYTHON, PY_FILES};

/// What a target does once all its prerequisites are up to date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recipe {
    /// Aggregates other targets, runs nothing by itself.
    None,

    /// `$(CC) $(CFLAGS) -o <output> <source>`
    Compile { source: String, output: String },

    /// `$(PYTHON) -m unittest discover -s <start_dir> -p <pattern>`
    RunTests { start_dir: String, pattern: String },

    /// `$(LINTER) $(PY_FILES)`, with glob patterns expanded in the working directory.
    Lint,

    /// Removes the given files. Missing files are not an error.
    Clean { artifacts: Vec<String> },
}

/// A recipe expanded for a concrete working directory and set of variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    Nothing,
    Run(CommandLine),
    Remove(Vec<PathBuf>),
}

impl Recipe {
    pub(crate) fn action(&self, variables: &Variables, directory: &Path) -> Result<Action> {
        let action = match self {
            Recipe::None => Action::Nothing,
            Recipe::Compile { source, output } => {
                let mut command = CommandLine::from_variable(variables, CC)?;
                command.extend(variables.words(CFLAGS));
                command.extend(["-o".to_string(), output.clone(), source.clone()]);
                Action::Run(command)
            }
            Recipe::RunTests { start_dir, pattern } => {
                let mut command = CommandLine::from_variable(variables, PYTHON)?;
                command.extend(
                    [
                        "-m",
                        "unittest",
                        "discover",
                        "-s",
                        start_dir.as_str(),
                        "-p",
                        pattern.as_str(),
                    ]
                    .map(str::to_string),
                );
                Action::Run(command)
            }
            Recipe::Lint => {
                let mut command = CommandLine::from_variable(variables, LINTER)?;
                command.extend(lint_files(variables, directory)?);
                Action::Run(command)
            }
            Recipe::Clean { artifacts } => Action::Remove(
                artifacts
                    .iter()
                    .map(|artifact| directory.join(artifact))
                    .collect(),
            ),
        };
        Ok(action)
    }
}

/// Expands `PY_FILES`. Glob words are matched against the working directory,
/// plain words are passed through untouched.
fn lint_files(variables: &Variables, directory: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for word in variables.words(PY_FILES) {
        if is_glob(&word) {
            files.extend(expand_glob(directory, &word)?);
        } else {
            files.push(word);
        }
    }
    if files.is_empty() {
        return Err(Error::NoFilesMatched {
            pattern: variables.get(PY_FILES).unwrap_or("").to_string(),
            directory: directory.to_path_buf(),
        });
    }
    Ok(files)
}
